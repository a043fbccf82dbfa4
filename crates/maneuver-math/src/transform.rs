use maneuver_core::traits::Validate;
use maneuver_core::{ManeuverError, Result};
use serde::{Deserialize, Serialize};

use crate::{DAffine2, DVec2, Point, Vector2};

/// Parameters of a maneuver transform, applied in order:
/// horizontal flip, vertical flip, uniform scale, rotation, translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    pub scale: f64,
    /// Rotation in radians, counter-clockwise
    pub rotate: f64,
    pub translate: Vector2,
    /// Negate x before scaling
    pub flip_h: bool,
    /// Negate y before scaling
    pub flip_v: bool,
}

impl TransformParams {
    pub fn new(scale: f64, rotate: f64, translate: Vector2) -> Self {
        Self {
            scale,
            rotate,
            translate,
            flip_h: false,
            flip_v: false,
        }
    }

    pub fn with_flips(mut self, flip_h: bool, flip_v: bool) -> Self {
        self.flip_h = flip_h;
        self.flip_v = flip_v;
        self
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::new(1.0, 0.0, DVec2::ZERO)
    }
}

impl Validate for TransformParams {
    fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || !self.rotate.is_finite() {
            return Err(ManeuverError::Geometry(format!(
                "transform scale and rotation must be finite, got scale={} rotate={}",
                self.scale, self.rotate
            )));
        }
        if !self.translate.is_finite() {
            return Err(ManeuverError::Geometry(format!(
                "transform translation must be finite, got {}",
                self.translate
            )));
        }
        Ok(())
    }
}

/// 2-D affine transform (flip + uniform scale + rotation + translation).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform2 {
    pub matrix: [f64; 6],
}

impl Transform2 {
    /// Compose the transform described by `params`.
    ///
    /// Flips fold into the sign of the per-axis scale, which is applied
    /// before the rotation.
    pub fn from_params(params: &TransformParams) -> Self {
        let sx = if params.flip_h { -params.scale } else { params.scale };
        let sy = if params.flip_v { -params.scale } else { params.scale };
        Self::from_affine(DAffine2::from_scale_angle_translation(
            DVec2::new(sx, sy),
            params.rotate,
            params.translate,
        ))
    }

    pub fn from_affine(a: DAffine2) -> Self {
        Self {
            matrix: a.to_cols_array(),
        }
    }

    pub fn to_affine(&self) -> DAffine2 {
        DAffine2::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point) -> Point {
        self.to_affine().transform_point2(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_default_params_are_identity() {
        let t = Transform2::from_params(&TransformParams::default());
        let p = dvec2(-3.0, 7.5);
        assert!((t.transform_point(p) - p).length() < 1e-10);
    }

    #[test]
    fn test_scale_rotate_translate_order() {
        // (1, 0) -> scale 2 -> (2, 0) -> rotate 90deg -> (0, 2) -> translate -> (10, 12)
        let params = TransformParams::new(2.0, FRAC_PI_2, dvec2(10.0, 10.0));
        let t = Transform2::from_params(&params);
        let result = t.transform_point(dvec2(1.0, 0.0));
        assert!((result - dvec2(10.0, 12.0)).length() < 1e-10);
    }

    #[test]
    fn test_flips_apply_before_rotation() {
        // flip_h: (1, 0) -> (-1, 0); rotate 90deg -> (0, -1)
        let params = TransformParams::new(1.0, FRAC_PI_2, DVec2::ZERO).with_flips(true, false);
        let result = Transform2::from_params(&params).transform_point(dvec2(1.0, 0.0));
        assert!((result - dvec2(0.0, -1.0)).length() < 1e-10);

        let params = TransformParams::default().with_flips(true, true);
        let result = Transform2::from_params(&params).transform_point(dvec2(2.0, 3.0));
        assert!((result - dvec2(-2.0, -3.0)).length() < 1e-10);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut params = TransformParams::default();
        assert!(params.validate().is_ok());
        params.scale = f64::NAN;
        assert!(params.validate().is_err());
        params.scale = 1.0;
        params.translate = dvec2(f64::INFINITY, 0.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: TransformParams =
            serde_json::from_str(r#"{"scale": 0.5, "flip_v": true}"#).unwrap();
        assert_eq!(params.scale, 0.5);
        assert_eq!(params.rotate, 0.0);
        assert!(params.flip_v);
        assert!(!params.flip_h);
    }
}
