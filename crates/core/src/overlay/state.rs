use crate::shared::bounds::Bounds;

/// Raw tracked state: the latest known face box plus overlay rotation.
///
/// The box fields only ever change together, sourced from one bounding box
/// of one detection event; rotation changes independently on its own
/// signal. Defaults to all-zero at mount, before any face has been seen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayState {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

impl OverlayState {
    /// Overwrites the four box fields as one unit.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = bounds.height;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}
