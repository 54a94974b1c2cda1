//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Input errors
//! - 3xx: Config errors
//! - 5xx: Server errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine output and HTTP responses.
///
/// Each variant maps to a numeric code (e.g., `InvalidArgument` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Input errors (1xx)
    // ========================================
    /// E101: Order or pack size is not a positive integer
    InvalidArgument,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file or environment value is invalid
    ConfigInvalid,
    /// E302: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Server errors (5xx)
    // ========================================
    /// E501: HTTP server could not start or serve
    ServerError,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Database operation failed
    DatabaseError,
    /// E602: Schema migration failed
    MigrationFailed,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Serialization/deserialization failed
    SerializationError,
    /// E902: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `InvalidArgument` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::InvalidArgument => 101,
            Self::ConfigInvalid => 301,
            Self::ConfigMissingRequired => 302,
            Self::ServerError => 501,
            Self::DatabaseError => 601,
            Self::MigrationFailed => 602,
            Self::SerializationError => 901,
            Self::IoError => 902,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "Orders and pack sizes must be positive integers",
            Self::ConfigInvalid => "Run `packcalc config show` to see current values. Check TOML syntax and PACKCALC_* variables",
            Self::ConfigMissingRequired => "Set the missing value in config.toml or through its PACKCALC_* variable",
            Self::ServerError => "Check that the listen address is free and reachable",
            Self::DatabaseError => "Check that the database file is readable and not locked by another process",
            Self::MigrationFailed => "The database schema could not be upgraded. Move the database aside and retry",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidArgument
            | Self::ConfigInvalid
            | Self::ConfigMissingRequired
            | Self::ServerError
            | Self::IoError => true,

            Self::DatabaseError | Self::MigrationFailed | Self::SerializationError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "input",
            3 => "config",
            5 => "server",
            6 => "storage",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// HTTP status used when this error surfaces through the service.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidArgument | Self::SerializationError => 400,
            _ => 500,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
