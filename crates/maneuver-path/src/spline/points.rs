//! Spline cursor over an owned control point sequence.

use log::trace;
use maneuver_core::{ManeuverError, Result};
use maneuver_math::{Points, Quad};

use super::SplineManeuver;

/// Walks a fixed control point sequence one point at a time.
///
/// A sequence of `n` points yields `n - 3` quads.
#[derive(Debug, Clone)]
pub struct PointSpline {
    points: Points,
    cursor: usize,
}

impl PointSpline {
    pub const MIN_POINTS: usize = 4;

    pub fn new(points: Points) -> Result<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(ManeuverError::too_few_points(
                "spline traversal",
                Self::MIN_POINTS,
                points.len(),
            ));
        }
        Ok(Self { points, cursor: 0 })
    }

    /// Number of spline segments (quads) in the sequence.
    pub fn segment_count(&self) -> usize {
        self.points.len() - 3
    }
}

impl SplineManeuver for PointSpline {
    fn next_quad(&mut self) -> Quad {
        // past the end the final quad is repeated
        let start = self.cursor.min(self.points.len() - 4);
        let quad = Quad::new(
            self.points[start],
            self.points[start + 1],
            self.points[start + 2],
            self.points[start + 3],
        );
        if !self.is_finished() {
            self.cursor += 1;
        }
        trace!("spline quad {} of {}", start + 1, self.segment_count());
        quad
    }

    fn is_finished(&self) -> bool {
        self.cursor + 4 > self.points.len()
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
