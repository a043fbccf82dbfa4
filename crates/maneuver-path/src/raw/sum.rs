use maneuver_math::{DVec2, Point};

use super::{Maneuver, RawManeuver};

/// Runs maneuvers in lockstep and adds their points.
///
/// Finishes as soon as any inner maneuver finishes. Every inner maneuver is
/// stepped on every tick, so callers stop at the first finished tick.
#[derive(Debug, Clone)]
pub struct PointwiseSumManeuver {
    maneuvers: Vec<Maneuver>,
}

impl PointwiseSumManeuver {
    pub fn new(maneuvers: Vec<Maneuver>) -> Self {
        Self { maneuvers }
    }
}

impl RawManeuver for PointwiseSumManeuver {
    fn next_point(&mut self) -> Point {
        self.maneuvers
            .iter_mut()
            .fold(DVec2::ZERO, |sum, m| sum + m.next_point())
    }

    fn is_finished(&self) -> bool {
        self.maneuvers.iter().any(|m| m.is_finished())
    }

    fn reset(&mut self) {
        for maneuver in &mut self.maneuvers {
            maneuver.reset();
        }
    }
}
