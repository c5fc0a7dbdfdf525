//! Error types for blindbot

use std::fmt;

/// Main error type for configuration-space and movement operations
///
/// Every expected failure path carries one of these reason codes so that
/// callers (and test diagnostics) can distinguish why a construction or
/// movement was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// Boundary input has fewer than 3 points, self-intersects, or is collinear
    DegenerateBoundary(String),
    /// Erosion produced nothing: the robot cannot fit in the wall at all
    RobotTooLarge,
    /// Erosion collapsed: the wall is too tight for the robot somewhere
    SpaceTooTight,
    /// Movement origin does not lie on the configuration-space boundary
    InvalidOrigin,
    /// Heading points outside the configuration space from a boundary feature
    InvalidHeading,
    /// No boundary crossing found along an otherwise valid heading
    NoIntersection,
    /// Robot has no configuration space installed
    MissingConfigurationSpace,
    /// Numerical computation failed (parallel offset lines, invalid radius, etc.)
    NumericalError(String),
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceError::DegenerateBoundary(msg) => write!(f, "Degenerate boundary: {}", msg),
            SpaceError::RobotTooLarge => write!(f, "Robot too large for the wall boundary"),
            SpaceError::SpaceTooTight => write!(f, "Wall boundary too tight for the robot"),
            SpaceError::InvalidOrigin => {
                write!(f, "Movement origin is not on the configuration-space boundary")
            }
            SpaceError::InvalidHeading => {
                write!(f, "Heading points outside the configuration space")
            }
            SpaceError::NoIntersection => {
                write!(f, "No boundary intersection found along the heading")
            }
            SpaceError::MissingConfigurationSpace => {
                write!(f, "Robot has no configuration space installed")
            }
            SpaceError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for SpaceError {}

/// Result type alias for configuration-space operations
pub type SpaceResult<T> = Result<T, SpaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpaceError::DegenerateBoundary("fewer than 3 points".to_string());
        assert_eq!(format!("{}", err), "Degenerate boundary: fewer than 3 points");
        assert_eq!(
            format!("{}", SpaceError::SpaceTooTight),
            "Wall boundary too tight for the robot"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(SpaceError::RobotTooLarge, SpaceError::RobotTooLarge);
        assert_ne!(SpaceError::RobotTooLarge, SpaceError::SpaceTooTight);
    }
}
