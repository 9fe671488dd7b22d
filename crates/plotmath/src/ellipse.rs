//! Ellipse coordinate solvers and the whole-number boundary rasterizer.

use crate::approx_cmp::{approx_eq, approx_lt};
use crate::errors::MathError;
use crate::{FLOAT_DIGITS, Float};

/// Allocation attempts for the rasterizer's point buffer.
const MAX_ALLOC_TRIES: usize = 3;

/// Solves the standard ellipse equation `x²/a² + y²/b² = 1` for x:
/// `x = ±(a/b)·√(b² − y²)`.
///
/// Returns the non-negative magnitude only; the caller applies sign and
/// reflection.
pub fn x_coord(a: Float, b: Float, y: Float) -> Result<Float, MathError> {
    check_semi_axes(a, b)?;
    if y > b {
        log::error!("ellipse: y = {y} lies beyond the semi-axis b = {b}");
        return Err(MathError::OutsideAxis);
    }
    Ok((a * (b * b - y * y).sqrt() / b).abs())
}

/// Solves the standard ellipse equation `x²/a² + y²/b² = 1` for y:
/// `y = ±(b/a)·√(a² − x²)`.
///
/// Returns the non-negative magnitude only; the caller applies sign and
/// reflection.
pub fn y_coord(a: Float, b: Float, x: Float) -> Result<Float, MathError> {
    check_semi_axes(a, b)?;
    if x > a {
        log::error!("ellipse: x = {x} lies beyond the semi-axis a = {a}");
        return Err(MathError::OutsideAxis);
    }
    Ok((b * (a * a - x * x).sqrt() / a).abs())
}

fn check_semi_axes(a: Float, b: Float) -> Result<(), MathError> {
    if approx_eq(a, 0.0, FLOAT_DIGITS) || approx_eq(b, 0.0, FLOAT_DIGITS) {
        log::error!("ellipse: zero semi-axis (a = {a}, b = {b})");
        return Err(MathError::ZeroSemiAxis);
    }
    Ok(())
}

/// Traces the full ellipse boundary at whole-number resolution.
///
/// Returns a flat buffer of coordinate values relative to the ellipse
/// center: index 2k holds an x coordinate and index 2k+1 its paired y
/// coordinate. The semi-axis with the larger magnitude is the major axis
/// (ties sweep x); the sweep starts on the negative end of the major axis,
/// walks one whole number per point through all four quadrants, and
/// finishes one step short of its starting point, closing the boundary
/// without repeating it.
///
/// The buffer length is `whole(major) * 4 * 2`: half the major axis, four
/// quadrant traversals, two values per point. Lengths below 8 fail, as does
/// a length that is not a multiple of 4.
pub fn rasterize(a: Float, b: Float) -> Result<Vec<Float>, MathError> {
    check_semi_axes(a, b)?;

    let a_abs = a.abs();
    let b_abs = b.abs();
    let x_is_major = !approx_lt(a_abs, b_abs, FLOAT_DIGITS);
    let major = if x_is_major { a_abs } else { b_abs };

    if major > Float::from(i32::MAX) {
        log::error!("ellipse: semi-axis {major} exceeds the coordinate range");
        return Err(MathError::IntOutOfRange);
    }
    // Truncation, not rounding: the sweep must stay inside the semi-axis
    // bound for fractional axes, so the fractional vertex is never emitted.
    let major_whole = major as i32;

    let num_values = major_whole * 4 * 2;
    if num_values < 8 || num_values % 4 != 0 {
        log::error!("ellipse: point count {num_values} miscalculated for major axis {major}");
        return Err(MathError::BadPointCount);
    }
    let num_values = num_values as usize;

    let mut points = alloc_point_buffer(num_values)?;
    let swept = if x_is_major {
        sweep_x_major(&mut points, a_abs, b_abs, major_whole, num_values)
    } else {
        sweep_y_major(&mut points, a_abs, b_abs, major_whole, num_values)
    };
    if let Err(err) = swept {
        // Nothing partial escapes: scrub, then release.
        points.iter_mut().for_each(|v| *v = 0.0);
        drop(points);
        return Err(err);
    }
    Ok(points)
}

/// Allocates the rasterizer buffer, retrying a bounded number of times
/// before reporting exhaustion.
fn alloc_point_buffer(len: usize) -> Result<Vec<Float>, MathError> {
    let mut tries = 0;
    while tries < MAX_ALLOC_TRIES {
        let mut buf = Vec::new();
        if buf.try_reserve_exact(len).is_ok() {
            return Ok(buf);
        }
        tries += 1;
    }
    log::error!("ellipse: point buffer allocation failed after {tries} tries");
    Err(MathError::AllocFailed)
}

/// Sweeps x along the major axis: right along the top half from
/// `(−major, 0)`, then back left along the bottom half.
fn sweep_x_major(
    points: &mut Vec<Float>,
    a_abs: Float,
    b_abs: Float,
    major_whole: i32,
    num_values: usize,
) -> Result<(), MathError> {
    let mut maj_pnt = -Float::from(major_whole);
    // Reflects the minor coordinate across the major axis.
    let mut flip: Float = 1.0;
    while points.len() < num_values {
        points.push(maj_pnt);
        points.push(flip * y_coord(a_abs, b_abs, maj_pnt)?);
        if points.len() > num_values / 2 {
            maj_pnt -= 1.0;
            flip = -1.0;
        } else {
            maj_pnt += 1.0;
            flip = 1.0;
        }
    }
    Ok(())
}

/// Sweeps y along the major axis: up the negative-x side from
/// `(0, −major)`, then back down the positive-x side.
fn sweep_y_major(
    points: &mut Vec<Float>,
    a_abs: Float,
    b_abs: Float,
    major_whole: i32,
    num_values: usize,
) -> Result<(), MathError> {
    let mut maj_pnt = -Float::from(major_whole);
    let mut flip: Float = -1.0;
    while points.len() < num_values {
        points.push(flip * x_coord(a_abs, b_abs, maj_pnt)?);
        points.push(maj_pnt);
        if points.len() > num_values / 2 {
            maj_pnt -= 1.0;
            flip = 1.0;
        } else {
            maj_pnt += 1.0;
            flip = -1.0;
        }
    }
    Ok(())
}
