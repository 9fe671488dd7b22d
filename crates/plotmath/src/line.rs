//! Line solvers over integer plot coordinates.

use crate::approx_cmp::{approx_eq, approx_ne};
use crate::errors::MathError;
use crate::point::LinePoint;
use crate::round::{RoundingMode, round_to_int};
use crate::{FLOAT_DIGITS, Float};

/// Slope of a line through two integer points.
///
/// A vertical line has no defined slope; the dedicated variant keeps that
/// case distinct from a computed slope of zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Slope {
    /// Ordinary rise-over-run slope.
    Defined(Float),
    /// Vertical line, or coincident points.
    Undefined,
}

impl Slope {
    /// Returns the slope value, if defined.
    pub fn value(self) -> Option<Float> {
        match self {
            Slope::Defined(v) => Some(v),
            Slope::Undefined => None,
        }
    }
}

/// Euclidean distance between two integer points.
///
/// Identical points are zero distance apart; that is a legitimate result,
/// not an error.
pub fn distance(x1: i32, y1: i32, x2: i32, y2: i32) -> Float {
    let dx = Float::from(x2) - Float::from(x1);
    let dy = Float::from(y2) - Float::from(y1);
    (dx * dx + dy * dy).sqrt()
}

/// Slope of the line through two integer points.
pub fn slope(x1: i32, y1: i32, x2: i32, y2: i32) -> Slope {
    if x1 == x2 {
        // Covers both a vertical line and coincident points.
        return Slope::Undefined;
    }
    Slope::Defined((Float::from(y2) - Float::from(y1)) / (Float::from(x2) - Float::from(x1)))
}

/// Verifies that two points form the given slope to `precision` decimal
/// digits.
///
/// An undefined recomputed slope fails verification, and so does a
/// recomputed slope of zero, which is treated as solver failure: horizontal
/// lines never verify.
pub fn verify_slope(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    expected: Float,
    precision: u32,
) -> bool {
    match slope(x1, y1, x2, y2) {
        Slope::Undefined => {
            log::error!("line: no defined slope between ({x1}, {y1}) and ({x2}, {y2})");
            false
        }
        Slope::Defined(calc) if approx_eq(calc, 0.0, FLOAT_DIGITS) => {
            log::error!("line: recomputed slope between ({x1}, {y1}) and ({x2}, {y2}) is zero");
            false
        }
        Slope::Defined(calc) => approx_eq(calc, expected, precision),
    }
}

/// Midpoint of the segment between two distinct integer points.
///
/// Each coordinate is half the absolute delta, rounded per `mode`, added to
/// the smaller endpoint coordinate on that axis. `dist` carries half the
/// distance between the endpoints.
pub fn midpoint(
    p1: &LinePoint,
    p2: &LinePoint,
    mode: RoundingMode,
) -> Result<LinePoint, MathError> {
    if p1.same_coords(p2) {
        log::error!("line: duplicate coordinates ({}, {}) have no midpoint", p1.x, p1.y);
        return Err(MathError::DuplicatePoints);
    }

    let raw_x = 0.5 * (Float::from(p2.x) - Float::from(p1.x)).abs();
    let raw_y = 0.5 * (Float::from(p2.y) - Float::from(p1.y)).abs();
    Ok(LinePoint {
        x: round_to_int(raw_x, mode)? + i32::min(p1.x, p2.x),
        y: round_to_int(raw_y, mode)? + i32::min(p1.y, p2.y),
        dist: distance(p1.x, p1.y, p2.x, p2.y) / 2.0,
    })
}

/// Solves the point-slope line equation for the x paired with `target_y`,
/// rounded per `mode` to land on a plottable coordinate.
///
/// A slope of zero has no unique x and is rejected.
pub fn solve_for_x(
    known_x: i32,
    known_y: i32,
    target_y: i32,
    slope: Float,
    mode: RoundingMode,
) -> Result<i32, MathError> {
    if !approx_ne(slope, 0.0, FLOAT_DIGITS) {
        log::error!("line: cannot solve a zero slope for x");
        return Err(MathError::ZeroSlope);
    }
    let raw = (Float::from(target_y) - Float::from(known_y)) / slope + Float::from(known_x);
    round_to_int(raw, mode)
}

/// Solves the point-slope line equation for the y paired with `target_x`,
/// rounded per `mode` to land on a plottable coordinate.
pub fn solve_for_y(
    known_x: i32,
    known_y: i32,
    target_x: i32,
    slope: Float,
    mode: RoundingMode,
) -> Result<i32, MathError> {
    let raw = slope * (Float::from(target_x) - Float::from(known_x)) + Float::from(known_y);
    round_to_int(raw, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::serialize_register_tests;

    #[test]
    fn test_distance() {
        assert_eq!(distance(0, 0, 3, 4), 5.0);
        assert_eq!(distance(2, 2, 2, 2), 0.0);
        assert_eq!(distance(-1, -1, 2, 3), 5.0);
    }

    #[test]
    fn test_slope() {
        assert_eq!(slope(0, 0, 2, 4), Slope::Defined(2.0));
        assert_eq!(slope(1, 5, 3, 4), Slope::Defined(-0.5));
        assert_eq!(slope(2, 0, 2, 9), Slope::Undefined);
        assert_eq!(slope(2, 3, 2, 3), Slope::Undefined);
        assert_eq!(Slope::Defined(2.0).value(), Some(2.0));
        assert_eq!(Slope::Undefined.value(), None);
    }

    #[test]
    fn test_verify_slope() {
        assert!(verify_slope(0, 0, 2, 4, 2.0, 10));
        assert!(!verify_slope(0, 0, 2, 4, 2.1, 10));
        // Vertical: nothing to verify against.
        assert!(!verify_slope(2, 0, 2, 9, 0.0, 10));
        // A recomputed slope of zero reads as solver failure.
        assert!(!verify_slope(0, 3, 9, 3, 0.0, 10));
    }

    #[test]
    fn test_midpoint() {
        let _serial = serialize_register_tests();
        let mid = midpoint(
            &LinePoint::new(0, 0),
            &LinePoint::new(4, 2),
            RoundingMode::Nearest,
        )
        .unwrap();
        assert_eq!((mid.x, mid.y), (2, 1));
        assert_eq!(mid.dist, 20.0_f64.sqrt() / 2.0);
    }

    #[test]
    fn test_midpoint_order_independent() {
        let _serial = serialize_register_tests();
        let a = LinePoint::new(-3, 7);
        let b = LinePoint::new(5, -1);
        let ab = midpoint(&a, &b, RoundingMode::Nearest).unwrap();
        let ba = midpoint(&b, &a, RoundingMode::Nearest).unwrap();
        assert_eq!((ab.x, ab.y), (1, 3));
        assert_eq!((ab.x, ab.y), (ba.x, ba.y));
    }

    #[test]
    fn test_midpoint_rounds_per_mode() {
        let p1 = LinePoint::new(0, 0);
        let p2 = LinePoint::new(3, 1);
        let up = midpoint(&p1, &p2, RoundingMode::Up).unwrap();
        let down = midpoint(&p1, &p2, RoundingMode::Down).unwrap();
        assert_eq!((up.x, up.y), (2, 1));
        assert_eq!((down.x, down.y), (1, 0));
    }

    #[test]
    fn test_midpoint_rejects_duplicates() {
        let p = LinePoint::new(4, 4);
        assert_eq!(
            midpoint(&p, &LinePoint::new(4, 4), RoundingMode::Nearest),
            Err(MathError::DuplicatePoints),
        );
    }

    #[test]
    fn test_solve_for_x() {
        let _serial = serialize_register_tests();
        assert_eq!(solve_for_x(0, 0, 4, 2.0, RoundingMode::Nearest), Ok(2));
        assert_eq!(solve_for_x(1, 1, 4, 1.5, RoundingMode::Nearest), Ok(3));
        assert_eq!(
            solve_for_x(0, 0, 4, 0.0, RoundingMode::Nearest),
            Err(MathError::ZeroSlope),
        );
    }

    #[test]
    fn test_solve_for_y() {
        let _serial = serialize_register_tests();
        assert_eq!(solve_for_y(0, 0, 3, 2.0, RoundingMode::Nearest), Ok(6));
        assert_eq!(solve_for_y(2, 5, 2, -4.0, RoundingMode::Nearest), Ok(5));
        // Unlike x, y solves fine on a zero slope: the line is horizontal.
        assert_eq!(solve_for_y(0, 7, 100, 0.0, RoundingMode::Nearest), Ok(7));
    }
}
