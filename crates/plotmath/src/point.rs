//! Plot-space point type shared by the line and triangle solvers.

use crate::Float;

/// Integer-coordinate point produced and consumed by the line and triangle
/// solvers.
///
/// `dist` is populated only by midpoint computation, where it carries half
/// the distance to the sibling point; every other producer leaves it zero.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct LinePoint {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Distance from the sibling point, when meaningful.
    pub dist: Float,
}

impl LinePoint {
    /// Constructs a point with no associated distance.
    pub fn new(x: i32, y: i32) -> Self {
        LinePoint { x, y, dist: 0.0 }
    }

    /// Returns whether both coordinates match `other`, ignoring `dist`.
    pub fn same_coords(&self, other: &LinePoint) -> bool {
        self.x == other.x && self.y == other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_coords_ignores_dist() {
        let a = LinePoint { x: 3, y: -2, dist: 1.5 };
        let b = LinePoint::new(3, -2);
        assert!(a.same_coords(&b));
        assert!(!a.same_coords(&LinePoint::new(3, 2)));
    }
}
