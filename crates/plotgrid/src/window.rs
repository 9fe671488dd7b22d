//! Window-center arithmetic.

use crate::errors::GridError;

/// Which corner the center leans toward when a window dimension is even and
/// no exact center cell exists.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Lean toward the upper left (the default).
    #[default]
    UpLeft,
    /// Lean toward the upper right.
    UpRight,
    /// Lean toward the lower left.
    LowerLeft,
    /// Lean toward the lower right.
    LowerRight,
}

impl Orientation {
    fn leans_right(self) -> bool {
        matches!(self, Orientation::UpRight | Orientation::LowerRight)
    }

    fn leans_low(self) -> bool {
        matches!(self, Orientation::LowerLeft | Orientation::LowerRight)
    }
}

/// Center cell of a `width` by `height` window, both at least 3 cells.
///
/// Odd dimensions have an exact center. An even dimension is first adjusted
/// to the odd interior span nearest the corner named by `orient`, so the
/// returned cell is always a true center of some odd-sized span.
pub fn determine_center(
    width: i32,
    height: i32,
    orient: Orientation,
) -> Result<(i32, i32), GridError> {
    if width < 3 {
        log::error!("window: width {width} is below the 3-cell minimum");
        return Err(GridError::WindowTooSmall);
    }
    if height < 3 {
        log::error!("window: height {height} is below the 3-cell minimum");
        return Err(GridError::WindowTooSmall);
    }

    let span_width = if width % 2 == 1 {
        width
    } else if orient.leans_right() {
        width + 1
    } else {
        width - 1
    };
    let span_height = if height % 2 == 1 {
        height
    } else if orient.leans_low() {
        height + 1
    } else {
        height - 1
    };

    Ok((((span_width - 1) / 2) + 1, ((span_height - 1) / 2) + 1))
}
