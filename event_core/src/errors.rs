//! # Error Types
//!
//! Structured error types for event_core. Field edits and navigation are total
//! and never fail; errors only come from the edges of the wizard: parsing
//! step names, reading attachment metadata, loading config, and handing the
//! snapshot to a submission collaborator.
//!
//! ## Example
//!
//! ```rust
//! use event_core::errors::{WizardError, WizardResult};
//!
//! fn parse_capacity(value: &str) -> WizardResult<u32> {
//!     value.trim().parse().map_err(|_| {
//!         WizardError::invalid_input("maxParticipants", value, "Expected a whole number")
//!     })
//! }
//!
//! assert!(parse_capacity("forty").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for event_core operations
pub type WizardResult<T> = Result<T, WizardError>;

/// Structured error type for wizard operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum WizardError {
    /// A step name or index does not identify a wizard step
    #[error("Invalid step: '{value}'")]
    InvalidStep { value: String },

    /// An input value could not be interpreted
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Submit was requested while a forward step still exists
    #[error("Submit is only available on the last step (currently on '{step}')")]
    SubmitUnavailable { step: String },

    /// The submission collaborator rejected the snapshot
    #[error("Submission failed: {reason}")]
    SubmissionFailed { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Config file could not be parsed
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl WizardError {
    /// Create an InvalidStep error
    pub fn invalid_step(value: impl Into<String>) -> Self {
        WizardError::InvalidStep {
            value: value.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        WizardError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SubmissionFailed error
    pub fn submission_failed(reason: impl Into<String>) -> Self {
        WizardError::SubmissionFailed {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        WizardError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        WizardError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if retrying the same action could succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WizardError::SubmissionFailed { .. } | WizardError::FileError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            WizardError::InvalidStep { .. } => "INVALID_STEP",
            WizardError::InvalidInput { .. } => "INVALID_INPUT",
            WizardError::SubmitUnavailable { .. } => "SUBMIT_UNAVAILABLE",
            WizardError::SubmissionFailed { .. } => "SUBMISSION_FAILED",
            WizardError::FileError { .. } => "FILE_ERROR",
            WizardError::ConfigError { .. } => "CONFIG_ERROR",
            WizardError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(err: serde_json::Error) -> Self {
        WizardError::SerializationError {
            reason: err.to_string(),
        }
    }
}
