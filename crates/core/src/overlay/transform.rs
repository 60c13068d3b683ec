use crate::shared::constants::{BORDER_WIDTH, EDGE_COLOR, TOP_EDGE_COLOR};

/// The interpolated render values for one instant: where to draw the
/// overlay rectangle and how far to rotate it. This is all a passive
/// render layer needs; it never reads the raw tracked state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayTransform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

/// Border styling for the overlay rectangle, one color per edge.
///
/// The default paints the top edge red and the rest green, so the box
/// visibly indicates orientation as the rotation transform turns it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    pub border_width: f64,
    pub top: [u8; 3],
    pub bottom: [u8; 3],
    pub left: [u8; 3],
    pub right: [u8; 3],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            border_width: BORDER_WIDTH,
            top: TOP_EDGE_COLOR,
            bottom: EDGE_COLOR,
            left: EDGE_COLOR,
            right: EDGE_COLOR,
        }
    }
}
