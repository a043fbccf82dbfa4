//! Spline-driven point generator.

use log::trace;
use maneuver_core::{ManeuverError, Result, Tolerance};
use maneuver_math::{catmull_rom, Point, Quad};

use super::RawManeuver;
use crate::spline::{PointSpline, SplineManeuver};

/// Samples a spline cursor at a fixed rate per tick.
///
/// The parameter `t` accumulates across the whole traversal: segment `k` of
/// the spline covers `t` in `[k, k + 1]`. Every time `t` crosses an integer the
/// next quad is fetched from the cursor.
#[derive(Debug, Clone)]
pub struct SplineRawManeuver<S: SplineManeuver = PointSpline> {
    spline: S,
    rate: f64,
    t: f64,
    /// Index of the segment `quad` belongs to
    segment: usize,
    quad: Quad,
    fraction: f64,
    input_finished: bool,
    tolerance: Tolerance,
}

impl<S: SplineManeuver> SplineRawManeuver<S> {
    /// Wrap `spline`, advancing `t` by `rate` (the reciprocal of ticks per
    /// segment) on every tick.
    pub fn new(spline: S, rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ManeuverError::Precondition(format!(
                "spline rate must be finite and positive, got {}",
                rate
            )));
        }
        let mut spline = spline;
        let quad = spline.next_quad();
        Ok(Self {
            spline,
            rate,
            t: 0.0,
            segment: 0,
            quad,
            fraction: 0.0,
            input_finished: false,
            tolerance: Tolerance::for_rate(rate),
        })
    }

    fn advance_t(&mut self) {
        self.t += self.rate;
        let target = self.tolerance.step_floor(self.t);
        while !self.input_finished && (self.segment as f64) < target {
            if self.spline.is_finished() {
                trace!("spline input finished at t={:.4}", self.t);
                self.input_finished = true;
            } else {
                self.quad = self.spline.next_quad();
                self.segment += 1;
            }
        }
        self.fraction = self.t - self.segment as f64;
    }

    fn partial_reset(&mut self) {
        self.input_finished = false;
        self.t = 0.0;
        self.segment = 0;
        self.quad = self.spline.next_quad();
        self.fraction = 0.0;
    }
}

impl<S: SplineManeuver> RawManeuver for SplineRawManeuver<S> {
    fn next_point(&mut self) -> Point {
        self.advance_t();
        catmull_rom(&self.quad, self.fraction.clamp(0.0, 1.0))
    }

    fn is_finished(&self) -> bool {
        if self.input_finished {
            return true;
        }
        // on the last segment, the tick nearest its end is the final one
        self.spline.is_finished()
            && self.fraction + self.rate / 2.0 + self.tolerance.step >= 1.0
    }

    fn reset(&mut self) {
        self.spline.reset();
        self.partial_reset();
    }
}
