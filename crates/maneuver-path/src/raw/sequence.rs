use log::trace;
use maneuver_math::{DVec2, Point};

use super::{Maneuver, RawManeuver};

/// Runs maneuvers one after another.
///
/// The hand-over is one tick late: the final point of a finished maneuver is
/// still delivered before the next one starts.
#[derive(Debug, Clone)]
pub struct SequenceManeuver {
    maneuvers: Vec<Maneuver>,
    current: usize,
}

impl SequenceManeuver {
    pub fn new(maneuvers: Vec<Maneuver>) -> Self {
        Self {
            maneuvers,
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.maneuvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maneuvers.is_empty()
    }
}

impl RawManeuver for SequenceManeuver {
    /// Children that are already finished are skipped without being stepped.
    /// Past the end this yields the origin.
    fn next_point(&mut self) -> Point {
        while self
            .maneuvers
            .get(self.current)
            .is_some_and(|m| m.is_finished())
        {
            self.current += 1;
        }
        let Some(maneuver) = self.maneuvers.get_mut(self.current) else {
            return DVec2::ZERO;
        };
        let point = maneuver.next_point();
        if maneuver.is_finished() {
            self.current += 1;
            trace!(
                "sequence advanced to {} of {}",
                self.current,
                self.maneuvers.len()
            );
        }
        point
    }

    fn is_finished(&self) -> bool {
        self.maneuvers
            .iter()
            .skip(self.current)
            .all(|m| m.is_finished())
    }

    fn reset(&mut self) {
        self.current = 0;
        for maneuver in &mut self.maneuvers {
            maneuver.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinearManeuver;
    use maneuver_math::dvec2;

    fn line(a: Point, b: Point, steps: usize) -> Maneuver {
        LinearManeuver::new(a, b, steps).unwrap().into()
    }

    fn abc() -> SequenceManeuver {
        let a = dvec2(0.0, 0.0);
        let b = dvec2(3.0, 0.0);
        let c = dvec2(3.0, 3.0);
        SequenceManeuver::new(vec![line(a, b, 3), line(b, c, 3)])
    }

    #[test]
    fn test_concat_two_lines() {
        let mut seq = abc();
        let pts: Vec<_> = seq.points().collect();
        assert_eq!(pts.len(), 6);
        assert!(pts[2].abs_diff_eq(dvec2(3.0, 0.0), 1e-9));
        assert!(pts[3].abs_diff_eq(dvec2(3.0, 1.0), 1e-9));
        assert!(pts[5].abs_diff_eq(dvec2(3.0, 3.0), 1e-9));
        assert!(seq.is_finished());
    }

    #[test]
    fn test_past_end_yields_origin() {
        let mut seq = abc();
        assert_eq!(seq.points().count(), 6);
        assert_eq!(seq.next_point(), DVec2::ZERO);

        let mut empty = SequenceManeuver::new(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.is_finished());
        assert_eq!(empty.next_point(), DVec2::ZERO);
    }

    #[test]
    fn test_skips_children_finished_up_front() {
        let a = dvec2(1.0, 1.0);
        let b = dvec2(3.0, 1.0);
        let empty = || Maneuver::from(SequenceManeuver::new(Vec::new()));
        let mut seq = SequenceManeuver::new(vec![
            empty(),
            line(a, b, 2),
            empty(),
            line(b, a, 2),
            empty(),
        ]);

        let pts: Vec<_> = seq.points().collect();
        assert_eq!(pts.len(), 4);
        assert!(!pts.contains(&DVec2::ZERO));
        assert!(pts[1].abs_diff_eq(b, 1e-9));
        assert!(pts[2].abs_diff_eq(dvec2(2.0, 1.0), 1e-9));
        assert!(pts[3].abs_diff_eq(a, 1e-9));
        assert!(seq.is_finished());

        seq.reset();
        assert!(!seq.is_finished());
        assert_eq!(seq.points().collect::<Vec<_>>(), pts);
    }

    #[test]
    fn test_reset_mid_sequence_resets_all() {
        let mut seq = abc();
        let full: Vec<_> = seq.points().collect();

        seq.reset();
        for _ in 0..4 {
            seq.next_point();
        }
        seq.reset();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.points().collect::<Vec<_>>(), full);
    }
}
