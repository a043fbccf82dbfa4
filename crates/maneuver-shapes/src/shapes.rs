//! Common shapes in unit coordinates.

use log::debug;
use maneuver_core::Result;
use maneuver_math::{dvec2, DVec2, Point, TransformParams};

use crate::build::{concat, from_points, transform};
use crate::Maneuver;

/// Three quarters of a unit circle through the four axis points, starting at
/// `(1, 0)` and ending at `(0, -1)`.
pub fn circle(ticks: usize) -> Result<Maneuver> {
    let points = vec![
        dvec2(1.0, 0.0),
        dvec2(0.0, 1.0),
        dvec2(-1.0, 0.0),
        dvec2(0.0, -1.0),
    ];
    from_points(ticks, points, true, true)
}

/// Heart outline from `(0, -1)` around the left lobe to `(0, 0)`, then back
/// down the mirrored right lobe. Each half gets `ticks / 2` ticks.
pub fn heart(ticks: usize) -> Result<Maneuver> {
    let left_side = vec![
        dvec2(0.0, -1.0),
        dvec2(-0.5, -0.5),
        dvec2(-1.0, 0.0),
        dvec2(-0.5, 0.5),
        dvec2(0.0, 0.0),
    ];
    let right_side: Vec<Point> = left_side.iter().rev().copied().collect();
    let half = ticks / 2;
    debug!("heart maneuver: {} ticks per side", half);

    let left = from_points(half, left_side, true, true)?;
    let mirrored = from_points(half, right_side, true, true)?;
    let right = transform(
        mirrored,
        TransformParams::default().with_flips(true, false),
    )?;
    Ok(concat(left, right))
}

/// Arc from `start` to `end` through the chord midpoint pushed sideways by
/// `curvature` times the chord's perpendicular.
///
/// Positive curvature bends to the left of the direction of travel.
pub fn arc(ticks: usize, start: Point, end: Point, curvature: f64) -> Result<Maneuver> {
    let chord: DVec2 = end - start;
    let linear_mid = (start + end) * 0.5;
    let mid = linear_mid + chord.perp() * curvature;
    from_points(ticks, vec![start, mid, end], true, true)
}
