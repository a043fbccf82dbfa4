//! Maneuver shape factory.
//!
//! Thin wiring over the maneuver algebra: every function here returns an
//! owned [`Maneuver`] assembled from the public constructors of
//! `maneuver-path`.

pub mod build;
pub mod shapes;

pub use build::{
    concat, concat_all, from_points, line, pointwise_add, pointwise_add_all, repeat, transform,
};
pub use maneuver_path::Maneuver;
pub use shapes::{arc, circle, heart};
