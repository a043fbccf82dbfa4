use super::{Maneuver, RawManeuver};
use maneuver_math::Point;

/// Replays an inner maneuver forever, resetting it whenever it finishes.
#[derive(Debug, Clone)]
pub struct RepeatManeuver {
    inner: Box<Maneuver>,
}

impl RepeatManeuver {
    pub fn new(inner: Maneuver) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl RawManeuver for RepeatManeuver {
    fn next_point(&mut self) -> Point {
        if self.inner.is_finished() {
            self.inner.reset();
        }
        self.inner.next_point()
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinearManeuver;
    use maneuver_math::dvec2;

    fn line4() -> Maneuver {
        LinearManeuver::new(dvec2(0.0, 0.0), dvec2(4.0, 0.0), 4)
            .unwrap()
            .into()
    }

    #[test]
    fn test_never_finishes_and_cycles() {
        let mut repeat = RepeatManeuver::new(line4());
        let pts: Vec<_> = repeat.points().take(20).collect();
        assert_eq!(pts.len(), 20);
        assert!(!repeat.is_finished());
        for k in 0..5 {
            assert_eq!(pts[4 * k], pts[0]);
            assert_eq!(pts[4 * k + 3], dvec2(4.0, 0.0));
        }
    }

    #[test]
    fn test_reset_restarts_cycle() {
        let mut repeat = RepeatManeuver::new(line4());
        let first = repeat.next_point();
        repeat.next_point();
        repeat.reset();
        assert_eq!(repeat.next_point(), first);
    }
}
