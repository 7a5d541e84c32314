//! Unified error handling for the codec and the tooling.
//!
//! Provides a single error type that carries:
//! - a stable error code for machine consumers
//! - a process exit code (sysexits) for the command-line tool
//! - a user-facing message that hides internal details

use domain::{DomainError, Shape};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Wire format
    #[error("Invalid {shape} document: {source}")]
    Decode {
        shape: Shape,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {shape}: {source}")]
    Encode {
        shape: Shape,
        #[source]
        source: serde_json::Error,
    },

    // Lookup
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    // Input/output
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Decode { .. } => "DECODE_ERROR",
            AppError::Encode { .. } => "ENCODE_ERROR",
            AppError::UnknownShape(_) => "UNKNOWN_SHAPE",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get process exit code (sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::UnknownShape(_) => 64,
            AppError::Decode { .. } => 65,
            AppError::Io(_) => 74,
            AppError::Encode { .. } | AppError::Internal(_) => 70,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for input errors
            AppError::Decode { .. } | AppError::UnknownShape(_) => self.to_string(),
            AppError::Io(e) => format!("I/O error: {}", e),

            // Hide details for internal errors
            AppError::Encode { shape, source } => {
                tracing::error!(%shape, "Encode error: {:?}", source);
                format!("Failed to encode {}", shape)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }

    /// True when decoding failed because a required field is absent
    pub fn is_missing_field(&self) -> bool {
        match self {
            AppError::Decode { source, .. } => {
                source.is_data() && source.to_string().starts_with("missing field")
            }
            _ => false,
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownShape(name) => AppError::UnknownShape(name),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn decode(shape: Shape, source: serde_json::Error) -> Self {
        AppError::Decode { shape, source }
    }

    pub fn encode(shape: Shape, source: serde_json::Error) -> Self {
        AppError::Encode { shape, source }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
