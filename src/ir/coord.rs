//! Pixel coordinates.

use serde::{Deserialize, Serialize};

/// A 2D point in pixel space, where (0, 0) is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    /// Creates a new coordinate with the given x and y values.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Truncates both coordinates toward zero to integer pixel positions.
    #[inline]
    pub fn to_pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_creation() {
        let coord = Coord::new(10.0, 20.0);
        assert_eq!(coord.x, 10.0);
        assert_eq!(coord.y, 20.0);
    }

    #[test]
    fn test_coord_to_pixel_truncates() {
        assert_eq!(Coord::new(10.9, 20.2).to_pixel(), (10, 20));
        assert_eq!(Coord::new(-1.5, 0.5).to_pixel(), (-1, 0));
    }

    #[test]
    fn test_coord_deserializes_from_object() {
        let coord: Coord = serde_json::from_str(r#"{"x": 3.0, "y": 4.5}"#).unwrap();
        assert_eq!(coord, Coord::new(3.0, 4.5));
    }
}
