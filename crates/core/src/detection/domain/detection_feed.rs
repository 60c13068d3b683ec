use thiserror::Error;

use crate::detection::domain::face::DetectionEvent;

/// One inbound callback from the camera host, in arrival order.
///
/// Detection results and rotation changes reach the controller through the
/// same serialized stream but update disjoint state: a rotation change
/// never touches the tracked box and vice versa.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedEvent {
    /// Detector callback with its (possibly empty) face results.
    Detection(DetectionEvent),
    /// Device/UI rotation changed, in degrees.
    Rotation(f64),
}

/// A feed event plus the timestamp it occurs at, in milliseconds on the
/// feed's own clock.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedFeedEvent {
    pub at_ms: f64,
    pub event: FeedEvent,
}

/// Domain interface for a serialized stream of camera-host callbacks.
///
/// Implementations must deliver events one at a time and run each call to
/// completion before the next; the controller performs no locking of its
/// own. Implementations may be stateful, hence `&mut self`.
pub trait DetectionFeed: Send {
    /// Next event in timestamp order, or `None` once the feed is exhausted.
    fn next_event(&mut self) -> Result<Option<TimedFeedEvent>, Box<dyn std::error::Error>>;
}

/// Failure to bring up the underlying camera/detector surface.
///
/// Opaque to the tracking core: the host reports it, callers log or display
/// it, and nothing retries automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("camera mount failed: {0}")]
pub struct MountError(pub String);
