//! Point model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in layout coordinates (x grows right, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Write a coordinate the way SVG path data expects it: shortest round-trip
/// form, no trailing `.0`, and no negative zero.
#[allow(clippy::float_cmp)]
fn write_coord(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{value}")
    }
}

/// Format one coordinate with the same rules as the path data
#[must_use]
pub fn format_coord(value: f64) -> String {
    struct Coord(f64);
    impl fmt::Display for Coord {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_coord(f, self.0)
        }
    }
    Coord(value).to_string()
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coord(f, self.x)?;
        f.write_str(" ")?;
        write_coord(f, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let mid = Point::new(100.0, 0.0).midpoint(Point::new(110.0, 40.0));
        assert_eq!(mid, Point::new(105.0, 20.0));
    }

    #[test]
    fn test_display_drops_trailing_zero() {
        assert_eq!(Point::new(100.0, 800.0).to_string(), "100 800");
        assert_eq!(Point::new(99.5, 26.25).to_string(), "99.5 26.25");
    }

    #[test]
    fn test_display_normalizes_negative_zero() {
        assert_eq!(Point::new(-0.0, -0.0).to_string(), "0 0");
        assert_eq!(format_coord(-0.0), "0");
        assert_eq!(format_coord(12.5), "12.5");
    }
}
