use crate::error::Result;

/// Validate the parameters of a maneuver building block before it is used.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
