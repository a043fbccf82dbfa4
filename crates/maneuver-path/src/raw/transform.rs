use maneuver_core::traits::Validate;
use maneuver_core::Result;
use maneuver_math::{Point, Transform2, TransformParams};

use super::{Maneuver, RawManeuver};

/// Applies flip, scale, rotation, and translation to every point of an
/// inner maneuver.
#[derive(Debug, Clone)]
pub struct TransformManeuver {
    inner: Box<Maneuver>,
    params: TransformParams,
    transform: Transform2,
}

impl TransformManeuver {
    pub fn new(inner: Maneuver, params: TransformParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            inner: Box::new(inner),
            transform: Transform2::from_params(&params),
            params,
        })
    }

    pub fn params(&self) -> &TransformParams {
        &self.params
    }
}

impl RawManeuver for TransformManeuver {
    fn next_point(&mut self) -> Point {
        let point = self.inner.next_point();
        self.transform.transform_point(point)
    }

    fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinearManeuver;
    use maneuver_math::{dvec2, DVec2};
    use std::f64::consts::PI;

    fn unit_x(steps: usize) -> Maneuver {
        LinearManeuver::new(DVec2::ZERO, dvec2(1.0, 0.0), steps)
            .unwrap()
            .into()
    }

    #[test]
    fn test_transform_applies_to_every_point() {
        let params = TransformParams::new(2.0, PI, dvec2(5.0, 1.0));
        let mut m = TransformManeuver::new(unit_x(2), params).unwrap();
        let pts: Vec<_> = m.points().collect();
        assert_eq!(pts.len(), 2);
        // (0.5, 0) -> (1, 0) -> (-1, 0) -> (4, 1)
        assert!(pts[0].abs_diff_eq(dvec2(4.0, 1.0), 1e-9));
        assert!(pts[1].abs_diff_eq(dvec2(3.0, 1.0), 1e-9));
    }

    #[test]
    fn test_flip_horizontal() {
        let params = TransformParams::default().with_flips(true, false);
        let mut m = TransformManeuver::new(unit_x(1), params).unwrap();
        assert!(m.next_point().abs_diff_eq(dvec2(-1.0, 0.0), 1e-12));
        assert!(m.is_finished());
        m.reset();
        assert!(!m.is_finished());
        assert!(m.params().flip_h);
    }

    #[test]
    fn test_rejects_non_finite_params() {
        let params = TransformParams::new(f64::INFINITY, 0.0, DVec2::ZERO);
        assert!(TransformManeuver::new(unit_x(1), params).is_err());
    }
}
