//! Constant-velocity straight-line generator.

use maneuver_core::{ManeuverError, Result, Tolerance};
use maneuver_math::{Point, Vector2};

use super::RawManeuver;

/// Moves from `start` to `end` in a fixed number of equal steps.
///
/// The first point is one step past `start`; the last point is `end`.
#[derive(Debug, Clone)]
pub struct LinearManeuver {
    start: Point,
    delta: Vector2,
    rate: f64,
    t: f64,
    tolerance: Tolerance,
}

impl LinearManeuver {
    pub fn new(start: Point, end: Point, steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(ManeuverError::Precondition(
                "linear maneuver needs at least one step".into(),
            ));
        }
        let rate = 1.0 / steps as f64;
        Ok(Self {
            start,
            delta: end - start,
            rate,
            t: 0.0,
            tolerance: Tolerance::for_rate(rate),
        })
    }
}

impl RawManeuver for LinearManeuver {
    fn next_point(&mut self) -> Point {
        self.t += self.rate;
        self.start + self.delta * self.t
    }

    fn is_finished(&self) -> bool {
        self.tolerance.has_reached(self.t, 1.0)
    }

    fn reset(&mut self) {
        self.t = 0.0;
    }
}
