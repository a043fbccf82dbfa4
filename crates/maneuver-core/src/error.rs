use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManeuverError {
    #[error("Precondition violated: {0}")]
    Precondition(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl ManeuverError {
    /// Shorthand for a point sequence that is shorter than an operation needs.
    pub fn too_few_points(operation: &str, needed: usize, got: usize) -> Self {
        Self::Precondition(format!(
            "{} needs at least {} points, got {}",
            operation, needed, got
        ))
    }
}

pub type Result<T> = std::result::Result<T, ManeuverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_points_message() {
        let err = ManeuverError::too_few_points("spline traversal", 4, 3);
        assert_eq!(
            err.to_string(),
            "Precondition violated: spline traversal needs at least 4 points, got 3"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ManeuverError = io.into();
        assert!(matches!(err, ManeuverError::Io(_)));
    }
}
