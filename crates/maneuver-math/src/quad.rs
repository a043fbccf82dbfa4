//! Four-point neighborhoods and the Catmull-Rom evaluator.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Four consecutive control points of a spline.
///
/// The segment runs from `p1` to `p2`; `p0` and `p3` only shape the tangents
/// at its ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Quad {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the segment at `t` (see [`catmull_rom`]).
    pub fn point_at(&self, t: f64) -> Point {
        catmull_rom(self, t)
    }
}

/// Catmull-Rom interpolation between `quad.p1` (t = 0) and `quad.p2` (t = 1).
///
/// `t` is not clamped; callers pass values in `[0, 1]`.
pub fn catmull_rom(quad: &Quad, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;

    let b1 = 0.5 * (-t3 + 2.0 * t2 - t);
    let b2 = 0.5 * (3.0 * t3 - 5.0 * t2 + 2.0);
    let b3 = 0.5 * (-3.0 * t3 + 4.0 * t2 + t);
    let b4 = 0.5 * (t3 - t2);

    quad.p0 * b1 + quad.p1 * b2 + quad.p2 * b3 + quad.p3 * b4
}
