/// Duration of one box interpolation window (milliseconds).
///
/// Detection results arrive at a lower, less regular rate than the render
/// refresh; easing each box change over this window hides the mismatch
/// while bounding worst-case lag to the window itself.
pub const BOX_TIMING_MS: f64 = 100.0;

/// Overlay rectangle border thickness in logical pixels.
pub const BORDER_WIDTH: f64 = 4.0;

/// Border color for the left, right, and bottom edges.
pub const EDGE_COLOR: [u8; 3] = [0, 255, 0];

/// Border color for the top edge. Distinct from the other edges so the
/// rendered box shows which way is up once rotation is applied.
pub const TOP_EDGE_COLOR: [u8; 3] = [255, 0, 0];
