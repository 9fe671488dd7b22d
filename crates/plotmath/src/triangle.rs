//! Triangle solvers over integer plot coordinates.

use crate::approx_cmp::approx_eq;
use crate::errors::MathError;
use crate::line;
use crate::point::LinePoint;
use crate::round::{RoundingMode, round_to_int};
use crate::{FLOAT_DIGITS, Float};

/// Centroid of the triangle with vertices `p1`, `p2`, `p3`.
///
/// The arithmetic mean of the three coordinate pairs, rounded per `mode`.
/// The vertices must be pairwise distinct.
pub fn centroid(
    p1: &LinePoint,
    p2: &LinePoint,
    p3: &LinePoint,
    mode: RoundingMode,
) -> Result<LinePoint, MathError> {
    if p1.same_coords(p2) || p1.same_coords(p3) || p2.same_coords(p3) {
        log::error!("triangle: duplicate coordinates cannot form a triangle");
        return Err(MathError::DuplicatePoints);
    }

    let cx = (Float::from(p1.x) + Float::from(p2.x) + Float::from(p3.x)) / 3.0;
    let cy = (Float::from(p1.y) + Float::from(p2.y) + Float::from(p3.y)) / 3.0;
    Ok(LinePoint::new(round_to_int(cx, mode)?, round_to_int(cy, mode)?))
}

/// Area of triangle `ABC` by Heron's formula.
///
/// Duplicate vertices, or all three vertices sharing an x or sharing a y,
/// are degenerate. Collinear vertices off the axes are only detected by the
/// semiperimeter check, which warns and lets the (collapsing) area through.
pub fn area(ax: i32, ay: i32, bx: i32, by: i32, cx: i32, cy: i32) -> Result<Float, MathError> {
    if (ax == bx && ay == by) || (ax == cx && ay == cy) || (bx == cx && by == cy) {
        log::error!("triangle: duplicate coordinates cannot form a triangle");
        return Err(MathError::DegenerateTriangle);
    }
    if (ax == bx && ax == cx) || (ay == by && ay == cy) {
        log::error!("triangle: coordinates on one line cannot form a triangle");
        return Err(MathError::DegenerateTriangle);
    }

    let len_ab = line::distance(ax, ay, bx, by);
    let len_bc = line::distance(bx, by, cx, cy);
    let len_ca = line::distance(cx, cy, ax, ay);
    let semi = (len_ab + len_bc + len_ca) / 2.0;

    // A semiperimeter equal to one side puts the third vertex on the line
    // through the other two.
    if approx_eq(semi, len_ab, FLOAT_DIGITS)
        || approx_eq(semi, len_bc, FLOAT_DIGITS)
        || approx_eq(semi, len_ca, FLOAT_DIGITS)
    {
        log::warn!("triangle: vertices are collinear");
    }

    Ok((semi * (semi - len_ab) * (semi - len_bc) * (semi - len_ca)).sqrt())
}

/// Returns whether `(px, py)` lies within triangle `ABC`, compared at
/// `precision` decimal digits.
///
/// Decomposes `ABC` into the three sub-triangles formed with the query
/// point; the point is inside exactly when the sub-areas reassemble the
/// whole area within the mask. A degenerate sub-triangle (the query point
/// on a vertex, or lined up with an edge along an axis) fails containment.
pub fn contains_point(
    ax: i32,
    ay: i32,
    bx: i32,
    by: i32,
    cx: i32,
    cy: i32,
    px: i32,
    py: i32,
    precision: u32,
) -> bool {
    let (Ok(area_abp), Ok(area_bcp), Ok(area_cap), Ok(area_abc)) = (
        area(ax, ay, bx, by, px, py),
        area(bx, by, cx, cy, px, py),
        area(cx, cy, ax, ay, px, py),
        area(ax, ay, bx, by, cx, cy),
    ) else {
        log::error!("triangle: containment query decomposed into a degenerate triangle");
        return false;
    };
    approx_eq(area_abc, area_abp + area_bcp + area_cap, precision)
}
