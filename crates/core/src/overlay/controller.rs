use crate::detection::domain::detection_feed::FeedEvent;
use crate::detection::domain::face::DetectionEvent;
use crate::overlay::state::OverlayState;
use crate::overlay::timed_value::TimedValue;
use crate::overlay::transform::OverlayTransform;
use crate::shared::constants::BOX_TIMING_MS;

/// Turns an irregular stream of detector callbacks into a smooth render
/// transform.
///
/// Owns the single [`OverlayState`] for the life of the tracking view,
/// plus one [`TimedValue`] per box quantity. Detection callbacks retarget
/// the four box values as one unit; rotation changes apply immediately
/// with no easing. Renderers pull the current transform with
/// [`transform_at`](OverlayController::transform_at) at whatever refresh
/// rate they run at.
///
/// Callbacks must be delivered one at a time: there is no internal
/// locking, and the host is responsible for serializing delivery if its
/// detector runs on another thread.
pub struct OverlayController {
    state: OverlayState,
    x: TimedValue,
    y: TimedValue,
    width: TimedValue,
    height: TimedValue,
}

impl OverlayController {
    /// A controller at the neutral zero state, easing box changes over
    /// the standard window.
    pub fn new() -> Self {
        Self::with_duration(BOX_TIMING_MS)
    }

    pub fn with_duration(duration_ms: f64) -> Self {
        Self {
            state: OverlayState::default(),
            x: TimedValue::new(0.0, duration_ms),
            y: TimedValue::new(0.0, duration_ms),
            width: TimedValue::new(0.0, duration_ms),
            height: TimedValue::new(0.0, duration_ms),
        }
    }

    /// Handles one detector callback at `now_ms`.
    ///
    /// An event with no faces is a no-op: the overlay freezes at its last
    /// known box instead of flickering away during a momentary occlusion.
    /// Otherwise the first face's bounds overwrite the tracked box and all
    /// four timed values begin easing toward it, superseding any
    /// transition still in flight. Faces beyond the first are ignored
    /// (single-target policy, first in detector order).
    pub fn on_detection(&mut self, event: &DetectionEvent, now_ms: f64) {
        log::trace!("faces {} frame {}", event.faces.len(), event.frame);

        let Some(face) = event.faces.first() else {
            return;
        };

        let bounds = face.bounds;
        self.state.set_bounds(bounds);
        self.x.set(bounds.x, now_ms);
        self.y.set(bounds.y, now_ms);
        self.width.set(bounds.width, now_ms);
        self.height.set(bounds.height, now_ms);
    }

    /// Handles a device/UI rotation change. Rotation is not eased; the
    /// next sampled transform carries the new angle as-is. Box state is
    /// untouched.
    pub fn on_orientation_changed(&mut self, rotation_degrees: f64) {
        self.state.rotation = rotation_degrees;
    }

    /// Dispatches a feed event to the matching handler.
    pub fn apply(&mut self, event: &FeedEvent, now_ms: f64) {
        match event {
            FeedEvent::Detection(detection) => self.on_detection(detection, now_ms),
            FeedEvent::Rotation(degrees) => self.on_orientation_changed(*degrees),
        }
    }

    /// Samples the interpolated render transform at `now_ms`.
    pub fn transform_at(&self, now_ms: f64) -> OverlayTransform {
        OverlayTransform {
            x: self.x.sample(now_ms),
            y: self.y.sample(now_ms),
            width: self.width.sample(now_ms),
            height: self.height.sample(now_ms),
            rotation: self.state.rotation,
        }
    }

    /// Whether all four box transitions have fully played out at `now_ms`.
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.x.is_settled(now_ms)
            && self.y.is_settled(now_ms)
            && self.width.is_settled(now_ms)
            && self.height.is_settled(now_ms)
    }

    /// The raw tracked state (latest targets, not interpolated values).
    pub fn state(&self) -> &OverlayState {
        &self.state
    }
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}
