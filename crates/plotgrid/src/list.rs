//! Relative-to-absolute plot-list building.

use itertools::Itertools;
use plotmath::Float;
use plotmath::round::{RoundingMode, round_to_int};

use crate::errors::GridError;
use crate::node::PlotNode;

/// Converts center-relative coordinate pairs into the ordered plot-node
/// list the renderer consumes and owns.
///
/// `rel_points` is a flat buffer: even indices hold x values, odd indices
/// the paired y values, relative to the window center
/// `(center_x, center_y)`. Components round up to whole cells before
/// translation. On any failure, the nodes built so far are dropped and only
/// the error escapes.
pub fn build_plot_list(
    rel_points: &[Float],
    center_x: i32,
    center_y: i32,
) -> Result<Vec<PlotNode>, GridError> {
    if rel_points.is_empty() {
        log::error!("plot list: no relative points supplied");
        return Err(GridError::EmptyPoints);
    }
    if rel_points.len() < 2 || rel_points.len() % 2 != 0 {
        log::error!("plot list: {} values do not pair up", rel_points.len());
        return Err(GridError::OddPointCount);
    }
    if center_x < 0 || center_y < 0 {
        log::error!("plot list: invalid center ({center_x}, {center_y})");
        return Err(GridError::BadCenter);
    }

    let mut nodes = Vec::with_capacity(rel_points.len() / 2);
    for (rel_x, rel_y) in rel_points.iter().tuples() {
        let x = round_to_int(*rel_x, RoundingMode::Up)?;
        let y = round_to_int(*rel_y, RoundingMode::Up)?;
        let (abs_x, abs_y) = translate_point(x, y, center_x, center_y)?;
        nodes.push(PlotNode::new(abs_x, abs_y));
    }
    Ok(nodes)
}

/// Translates a center-relative cell into absolute window coordinates.
///
/// The window's home cell is its upper left corner, so Cartesian "up"
/// shrinks the row index. The center must leave an interior on both axes,
/// and the translated cell must stay on the window.
fn translate_point(
    rel_x: i32,
    rel_y: i32,
    center_x: i32,
    center_y: i32,
) -> Result<(i32, i32), GridError> {
    if center_x < 1 || center_y < 1 {
        log::error!("plot list: center ({center_x}, {center_y}) has no interior");
        return Err(GridError::BadCenter);
    }

    let abs_x = center_x.checked_add(rel_x);
    let abs_y = center_y.checked_sub(rel_y);
    match (abs_x, abs_y) {
        (Some(x), Some(y)) if x >= 0 && y >= 0 => Ok((x, y)),
        _ => {
            log::error!("plot list: ({rel_x}, {rel_y}) translates off the window");
            Err(GridError::OffGrid)
        }
    }
}

#[cfg(test)]
mod tests {
    use plotmath::ellipse;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_single_pair_lands_on_center() {
        let nodes = build_plot_list(&[0.0, 0.0], 5, 5).unwrap();
        assert_eq!(nodes, vec![PlotNode::new(5, 5)]);
    }

    #[test]
    fn test_y_axis_inverts() {
        // Cartesian up (positive y) is a smaller row index.
        let nodes = build_plot_list(&[0.0, 2.0, 0.0, -2.0], 5, 5).unwrap();
        assert_eq!(nodes, vec![PlotNode::new(5, 3), PlotNode::new(5, 7)]);
    }

    #[test]
    fn test_components_round_up() {
        let nodes = build_plot_list(&[0.25, -0.75], 5, 5).unwrap();
        // ceil(0.25) = 1 column right, ceil(-0.75) = 0 rows up.
        assert_eq!(nodes, vec![PlotNode::new(6, 5)]);
    }

    #[test]
    fn test_rasterized_ellipse_translates_onto_window() {
        let points = ellipse::rasterize(2.0, 1.0).unwrap();
        let nodes = build_plot_list(&points, 5, 5).unwrap();
        assert_eq!(
            nodes,
            vec![
                PlotNode::new(3, 5),
                PlotNode::new(4, 4),
                PlotNode::new(5, 4),
                PlotNode::new(6, 4),
                PlotNode::new(7, 5),
                PlotNode::new(6, 5),
                PlotNode::new(5, 6),
                PlotNode::new(4, 5),
            ],
        );
    }

    #[test]
    fn test_rejects_malformed_buffers() {
        assert_eq!(build_plot_list(&[], 5, 5), Err(GridError::EmptyPoints));
        assert_eq!(build_plot_list(&[1.0, 2.0, 3.0], 5, 5), Err(GridError::OddPointCount));
    }

    #[test]
    fn test_rejects_bad_centers() {
        assert_eq!(build_plot_list(&[0.0, 0.0], -1, 5), Err(GridError::BadCenter));
        assert_eq!(build_plot_list(&[0.0, 0.0], 5, -1), Err(GridError::BadCenter));
        // Zero passes the sign check but leaves no interior to plot into.
        assert_eq!(build_plot_list(&[0.0, 0.0], 0, 5), Err(GridError::BadCenter));
    }

    #[test]
    fn test_rejects_points_off_the_window() {
        assert_eq!(build_plot_list(&[-10.0, 0.0], 5, 5), Err(GridError::OffGrid));
        assert_eq!(build_plot_list(&[0.0, 10.0], 5, 5), Err(GridError::OffGrid));
    }

    #[test]
    fn test_rounding_failure_bubbles_up() {
        let err = build_plot_list(&[Float::NAN, 0.0], 5, 5).unwrap_err();
        assert_eq!(err, GridError::Math(plotmath::MathError::IntOutOfRange));
    }
}
