use serde::{Deserialize, Serialize};

use crate::shared::bounds::Bounds;

/// A single detected face as reported by the external detector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub bounds: Bounds,
}

impl Face {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

/// Frame metadata carried alongside detections. Logged for diagnostics,
/// never interpreted by the tracking core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInfo {
    pub width: u32,
    pub height: u32,
    pub index: u64,
}

impl std::fmt::Display for FrameInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}#{}", self.width, self.height, self.index)
    }
}

/// One detector callback invocation: zero or more faces plus the frame
/// they were found in. The detector runs at its own cadence; there is no
/// guarantee of one event per rendered frame, or of any faces at all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectionEvent {
    pub faces: Vec<Face>,
    pub frame: FrameInfo,
}

impl DetectionEvent {
    pub fn new(faces: Vec<Face>, frame: FrameInfo) -> Self {
        Self { faces, frame }
    }

    /// An event with no faces. Processing one leaves the overlay frozen
    /// at its last known box rather than resetting it.
    pub fn empty() -> Self {
        Self::default()
    }
}
