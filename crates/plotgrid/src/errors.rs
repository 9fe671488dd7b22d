//! Error type for plot-list building and window arithmetic.

use plotmath::MathError;
use thiserror::Error;

/// Error produced when translating relative plot points into window
/// coordinates.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridError {
    /// Window dimension below the 3-cell minimum
    #[error("window dimensions must be at least 3 by 3")]
    WindowTooSmall,
    /// Empty relative point buffer
    #[error("relative point buffer is empty")]
    EmptyPoints,
    /// Buffer length odd, or below one coordinate pair
    #[error("relative point buffer must hold an even number of values")]
    OddPointCount,
    /// Center coordinates that leave no window interior
    #[error("center coordinates leave no window interior")]
    BadCenter,
    /// Translated coordinate off the window
    #[error("translated coordinate falls outside the window")]
    OffGrid,
    /// Failure bubbled up from the math layer
    #[error(transparent)]
    Math(#[from] MathError),
}
