use crate::{
    FieldErrors,
    ports::{CreateError, SaveError},
    recorder::SessionStatus,
};

use error_location::ErrorLocation;
use thiserror::Error;

/// Meeting desk errors with source location tracking.
///
/// None of these are fatal: every variant leaves the component that raised
/// it in an unchanged, still-usable state.
#[derive(Error, Debug)]
pub enum DeskError {
    /// The requested action is not valid from the session's current status.
    #[error("Cannot {action} while session is {from} {location}")]
    InvalidTransition {
        /// Status the session was in when the action was attempted.
        from: SessionStatus,
        /// The rejected action.
        action: &'static str,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// One or more input fields failed validation.
    #[error("Validation failed: {errors} {location}")]
    Validation {
        /// Field name to message mapping.
        errors: FieldErrors,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The persistence gateway rejected a save.
    #[error("Save failed: {source} {location}")]
    SaveFailed {
        /// Underlying gateway error.
        #[source]
        source: SaveError,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The persistence gateway rejected a meeting creation.
    #[error("Create meeting failed: {source} {location}")]
    CreateFailed {
        /// Underlying gateway error.
        #[source]
        source: CreateError,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A create request is already in flight for this dialog.
    #[error("A meeting is already being created {location}")]
    SubmissionInFlight {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl DeskError {
    /// Field errors carried by a [`DeskError::Validation`], if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            DeskError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias using [`DeskError`].
pub type Result<T> = std::result::Result<T, DeskError>;
