//! Control point sequences and phantom endpoints.

use maneuver_core::{ManeuverError, Result};

use crate::Point;

/// An ordered sequence of spline control points.
pub type Points = Vec<Point>;

/// Prepend a phantom point mirroring the second point across the first,
/// so that a spline passes through the true first point.
pub fn add_pre_start_point(points: &mut Points) -> Result<()> {
    if points.len() < 2 {
        return Err(ManeuverError::too_few_points(
            "pre-start point insertion",
            2,
            points.len(),
        ));
    }
    let front = points[0];
    let second = points[1];
    points.insert(0, front - (second - front));
    Ok(())
}

/// Append a phantom point mirroring the second-to-last point across the last.
pub fn add_post_end_point(points: &mut Points) -> Result<()> {
    let n = points.len();
    if n < 2 {
        return Err(ManeuverError::too_few_points(
            "post-end point insertion",
            2,
            n,
        ));
    }
    let back = points[n - 1];
    let second_to_last = points[n - 2];
    points.push(back - (second_to_last - back));
    Ok(())
}
