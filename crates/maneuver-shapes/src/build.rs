//! Building blocks: splines through points, lines, and the combinators.

use log::debug;
use maneuver_core::{ManeuverError, Result};
use maneuver_math::{add_post_end_point, add_pre_start_point, Point, Points, TransformParams};
use maneuver_path::{
    LinearManeuver, Maneuver, PointSpline, PointwiseSumManeuver, RepeatManeuver,
    SequenceManeuver, SplineRawManeuver, TransformManeuver,
};

/// Build a spline maneuver through `points` that takes about `ticks` ticks.
///
/// With `pre_start` / `post_end` set, phantom points are added so the path
/// starts on the first point and ends on the last one. The sequence needs at
/// least 2 points before and 4 points after the phantoms are added.
pub fn from_points(
    ticks: usize,
    mut points: Points,
    pre_start: bool,
    post_end: bool,
) -> Result<Maneuver> {
    if ticks == 0 {
        return Err(ManeuverError::Precondition(
            "a spline maneuver needs at least one tick".into(),
        ));
    }
    if pre_start {
        add_pre_start_point(&mut points)?;
    }
    if post_end {
        add_post_end_point(&mut points)?;
    }
    let spline = PointSpline::new(points)?;
    let segments = spline.segment_count();
    let ticks_per_segment = ticks as f64 / segments as f64;
    debug!(
        "spline maneuver: {} segments, {:.3} ticks per segment",
        segments, ticks_per_segment
    );
    Ok(SplineRawManeuver::new(spline, 1.0 / ticks_per_segment)?.into())
}

/// Straight line from `start` to `end` in `ticks` equal steps.
pub fn line(ticks: usize, start: Point, end: Point) -> Result<Maneuver> {
    Ok(LinearManeuver::new(start, end, ticks)?.into())
}

pub fn transform(maneuver: Maneuver, params: TransformParams) -> Result<Maneuver> {
    Ok(TransformManeuver::new(maneuver, params)?.into())
}

pub fn repeat(maneuver: Maneuver) -> Maneuver {
    RepeatManeuver::new(maneuver).into()
}

pub fn concat(first: Maneuver, second: Maneuver) -> Maneuver {
    concat_all(vec![first, second])
}

pub fn concat_all(maneuvers: Vec<Maneuver>) -> Maneuver {
    SequenceManeuver::new(maneuvers).into()
}

pub fn pointwise_add(first: Maneuver, second: Maneuver) -> Maneuver {
    pointwise_add_all(vec![first, second])
}

pub fn pointwise_add_all(maneuvers: Vec<Maneuver>) -> Maneuver {
    PointwiseSumManeuver::new(maneuvers).into()
}
