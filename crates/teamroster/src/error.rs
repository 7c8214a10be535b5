//! Error types for teamroster.
//!
//! Validation failures live in [`crate::validate::ValidationError`]; this
//! module wraps them together with the ambient failures (configuration, I/O,
//! serialization) the binary can run into.

use thiserror::Error;

use crate::team::{ParseLeagueError, TeamId};
use crate::validate::ValidationError;

/// The main error type for teamroster operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Roster Errors ===
    /// A submitted team form was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No team with the given id is on the roster.
    #[error("no team with id {id}")]
    UnknownTeam {
        /// The id that was looked up.
        id: TeamId,
    },

    /// A league name could not be recognised.
    #[error(transparent)]
    League(#[from] ParseLeagueError),

    /// The action does not apply to what is currently on screen.
    #[error("that action is not available in {mode} mode")]
    Unavailable {
        /// The current view mode.
        mode: &'static str,
    },

    // === I/O Errors ===
    /// Terminal or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for teamroster operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an unknown-team error.
    #[must_use]
    pub fn unknown_team(id: TeamId) -> Self {
        Self::UnknownTeam { id }
    }

    /// Check if this error is a rejected form submission.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unknown_team(TeamId::new(42));
        assert_eq!(err.to_string(), "no team with id 42");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: Error = ValidationError::EmptyCoach.into();
        assert!(err.is_validation_error());
        assert_eq!(err.to_string(), ValidationError::EmptyCoach.to_string());
    }

    #[test]
    fn test_is_validation_error() {
        assert!(Error::Validation(ValidationError::EmptyName).is_validation_error());
        assert!(!Error::unknown_team(TeamId::new(1)).is_validation_error());
    }

    #[test]
    fn test_unavailable_error_display() {
        let err = Error::Unavailable { mode: "form" };
        assert_eq!(err.to_string(), "that action is not available in form mode");
    }

    #[test]
    fn test_from_league_error() {
        let league_err = "Serie A".parse::<crate::team::League>().unwrap_err();
        let err: Error = league_err.into();
        assert!(matches!(err, Error::League(_)));
        assert!(err.to_string().contains("Serie A"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "timeout_ms must be greater than 0".to_string(),
        };
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
