//! Maneuver math primitives: 2-D points, Catmull-Rom quads, and affine transforms.

pub mod points;
pub mod quad;
pub mod transform;

pub use glam::{dvec2, DAffine2, DMat2, DVec2};
pub use points::{add_post_end_point, add_pre_start_point, Points};
pub use quad::{catmull_rom, Quad};
pub use transform::{Transform2, TransformParams};

pub type Point = DVec2;
pub type Vector2 = DVec2;
