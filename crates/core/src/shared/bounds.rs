use serde::{Deserialize, Serialize};

/// Axis-aligned face bounding box in overlay coordinate space.
///
/// Coordinates arrive already scaled to the display window by the external
/// detector (it is configured with the window dimensions and auto-scale);
/// no scaling or validation happens on this side. Dimensions are trusted to
/// be non-negative per the detector contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_construction() {
        let b = Bounds::new(10.0, 20.0, 50.0, 60.0);
        assert_relative_eq!(b.x, 10.0);
        assert_relative_eq!(b.y, 20.0);
        assert_relative_eq!(b.width, 50.0);
        assert_relative_eq!(b.height, 60.0);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Bounds::default(), Bounds::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_json_round_trip() {
        let b = Bounds::new(1.5, 2.5, 3.0, 4.0);
        let json = serde_json::to_string(&b).unwrap();
        let back: Bounds = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
