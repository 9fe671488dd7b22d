//! Precision-masked floating-point comparison and plot geometry primitives.
//!
//! Everything here exists so that callers can reason about real-valued
//! geometry with bounded-precision comparisons instead of exact equality,
//! and turn continuous curves into whole-number coordinate sequences a
//! character-cell renderer can plot.

pub use approx;

/// Floating-point type used for geometry (either `f32` or `f64`).
pub type Float = f64;

/// Decimal digits of precision carried by a 64-bit float (1 sign bit, 11
/// exponent bits, 52 mantissa bits).
pub const FLOAT_DIGITS: u32 = 15;

/// Largest decimal digit count that is meaningful when formatting a 64-bit
/// float; bounds the digit count accepted by [`precision::truncate`].
pub const MAX_TRUNC_DIGITS: u32 = 1074;

/// Asserts that both arguments are approximately equal.
///
/// The optional third argument overrides the default test tolerance.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = 1e-9)
    };
    ($a:expr, $b:expr, $eps:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $eps)
    };
}

pub mod approx_cmp;
pub mod ellipse;
pub mod errors;
pub mod line;
pub mod point;
pub mod precision;
pub mod round;
pub mod triangle;

pub use errors::MathError;
pub use line::Slope;
pub use point::LinePoint;
pub use round::RoundingMode;

/// Structs, functions, and constants.
pub mod prelude {
    pub use crate::approx_cmp::*;
    pub use crate::errors::MathError;
    pub use crate::line::{self, Slope};
    pub use crate::point::LinePoint;
    pub use crate::precision::{max_precision, precision_mask, truncate};
    pub use crate::round::{RoundingMode, round_to_int};
    pub use crate::{FLOAT_DIGITS, Float, ellipse, triangle};
}
pub use prelude::*;
