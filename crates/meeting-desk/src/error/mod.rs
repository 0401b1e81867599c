use meeting_desk_core::DeskError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the meeting-desk binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Recorder or form error from meeting-desk-core.
    #[error("{source} {location}")]
    Core {
        /// The underlying core error.
        #[source]
        source: DeskError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Navigation to a path that matches no route.
    #[error("No route matches {path:?} {location}")]
    RouteNotFound {
        /// The path that was requested.
        path: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Input line that is not a known command, or not valid in the current view.
    #[error("Invalid command: {reason} {location}")]
    InvalidCommand {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from the terminal or filesystem.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

impl AppError {
    /// Shorthand for [`AppError::InvalidCommand`] at the caller's location.
    #[track_caller]
    pub(crate) fn invalid_command(reason: impl Into<String>) -> Self {
        AppError::InvalidCommand {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

// Manual From impls with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<DeskError> for AppError {
    #[track_caller]
    fn from(source: DeskError) -> Self {
        AppError::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
