//! Error type shared by the precision, rounding, and geometry operations.

use thiserror::Error;

/// Error produced by precision, rounding, and geometry operations.
///
/// Every failure is also reported through the [`log`] facade at the point of
/// detection; the error value carries only what the immediate caller needs
/// to branch on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathError {
    /// Requested comparison precision below one decimal digit
    #[error("precision must be at least 1 decimal digit")]
    InvalidPrecision,
    /// Digit count beyond what a 64-bit float can meaningfully carry
    #[error("digit count must be at most 1074")]
    InvalidDigits,
    /// The machine precision probe established no reliable digits
    #[error("machine precision could not be established")]
    PrecisionUnavailable,
    /// Value outside the representable integer coordinate range
    #[error("value does not fit in the integer coordinate range")]
    IntOutOfRange,
    /// Ellipse semi-axis equal to zero
    #[error("ellipse semi-axis must be nonzero")]
    ZeroSemiAxis,
    /// Coordinate beyond its bounding semi-axis
    #[error("coordinate lies outside the bounding semi-axis")]
    OutsideAxis,
    /// Rasterizer point count below 8 or not a multiple of 4
    #[error("ellipse point count miscalculated")]
    BadPointCount,
    /// Point buffer allocation failed after bounded retries
    #[error("point buffer allocation failed")]
    AllocFailed,
    /// Identical coordinates where distinct points are required
    #[error("duplicate coordinates have no unique solution")]
    DuplicatePoints,
    /// Triangle vertices that duplicate or line up along an axis
    #[error("coordinates do not form a triangle")]
    DegenerateTriangle,
    /// Zero slope where the line equation is solved for x
    #[error("a slope of zero cannot be solved for x")]
    ZeroSlope,
}
