//! Maneuver algebra: composable, resettable, steppable 2-D point generators.
//!
//! Control points feed a [`PointSpline`] cursor, which a [`SplineRawManeuver`]
//! samples at a fixed per-tick rate. Generators compose through the
//! [`Maneuver`] enum: repeat, sequence, pointwise sum, and affine transform.

pub mod raw;
pub mod spline;

pub use raw::{
    LinearManeuver, Maneuver, PointIter, PointwiseSumManeuver, RawManeuver, RepeatManeuver,
    SequenceManeuver, SplineRawManeuver, TransformManeuver,
};
pub use spline::{PointSpline, SplineManeuver};
