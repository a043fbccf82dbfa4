//! Maneuver core types: errors, tolerances, and validation.

pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{ManeuverError, Result};
pub use tolerance::{Tolerance, STEP_EPSILON};
