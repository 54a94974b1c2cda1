//! Error handling for packcalc.
//!
//! This module provides:
//! - [`PackError`]: The main error enum for all packcalc operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing

mod codes;

use std::io;

use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for packcalc operations.
#[derive(Error, Debug)]
pub enum PackError {
    #[error("invalid argument: {reason}: {value}")]
    InvalidArgument { reason: &'static str, value: i64 },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl PackError {
    /// Build an `InvalidArgument` for a non-positive order.
    #[must_use]
    pub const fn non_positive_order(value: i64) -> Self {
        Self::InvalidArgument {
            reason: "order amount is not positive",
            value,
        }
    }

    /// Build an `InvalidArgument` for a non-positive pack size.
    #[must_use]
    pub const fn non_positive_size(value: i64) -> Self {
        Self::InvalidArgument {
            reason: "size amount is not positive",
            value,
        }
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Self::Database(_) => ErrorCode::DatabaseError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::Migration(_) => ErrorCode::MigrationFailed,
            Self::Server(_) => ErrorCode::ServerError,
        }
    }

    /// True when the caller supplied a bad order or pack size.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::InvalidArgument { reason, value } => {
                Some(serde_json::json!({ "reason": reason, "value": value }))
            }
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }
}

/// Result type alias using `PackError`.
pub type Result<T> = std::result::Result<T, PackError>;
