//! Error types and exit codes for wayfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing dataset, malformed graph or game tree)
//!
//! Search outcomes such as "start not in graph" or "goal unreachable" are not
//! errors; they are reported through the `success` flag of the search result.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the wayfind binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing dataset, malformed graph or tree (3)
    Data = 3,
}

/// Errors that can occur during wayfind operations
#[derive(Error, Debug)]
pub enum WayfindError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    #[error("invalid dataset {path:?}: {reason}")]
    InvalidDataset { path: PathBuf, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfindError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WayfindError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        WayfindError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        WayfindError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a dataset that parsed but failed validation
    pub fn invalid_dataset(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        WayfindError::InvalidDataset {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::UnknownFormat(_)
            | WayfindError::UsageError(_)
            | WayfindError::InvalidValue { .. }
            | WayfindError::Unsupported { .. } => ExitCode::Usage,

            WayfindError::DatasetNotFound { .. }
            | WayfindError::InvalidDataset { .. }
            | WayfindError::NotFound { .. } => ExitCode::Data,

            WayfindError::Io(_)
            | WayfindError::Json(_)
            | WayfindError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WayfindError::UnknownFormat(_) => "unknown_format",
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::InvalidValue { .. } => "invalid_value",
            WayfindError::Unsupported { .. } => "unsupported",
            WayfindError::DatasetNotFound { .. } => "dataset_not_found",
            WayfindError::InvalidDataset { .. } => "invalid_dataset",
            WayfindError::NotFound { .. } => "not_found",
            WayfindError::Io(_) => "io_error",
            WayfindError::Json(_) => "json_error",
            WayfindError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, WayfindError>;
