//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::message::{ParseColorError, ParseTimestampError, ValidationError};

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
/// No variant ever includes the webhook URL itself.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    ///
    /// Carries the parser message without the source excerpt, which could
    /// quote the webhook URL.
    #[error(
        "Failed to parse TOML config{}: {message}",
        .line.map_or_else(String::new, |l| format!(" at line {l}"))
    )]
    TomlParse {
        /// Parser message with quoted values removed
        message: String,
        /// 1-based line of the error, when known
        line: Option<usize>,
    },

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid webhook URL. The URL is not echoed back since it holds the token.
    #[error("Invalid webhook URL: {reason}")]
    InvalidUrl {
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid User-Agent value.
    #[error("Invalid user agent '{value}': {reason}")]
    InvalidUserAgent {
        /// The rejected value
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid duration value (zero).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid embed color.
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),

    /// Invalid embed timestamp.
    #[error(transparent)]
    InvalidTimestamp(#[from] ParseTimestampError),

    /// Invalid embed field format.
    #[error("Invalid field format '{value}': expected 'Name=Value'")]
    InvalidField {
        /// The invalid field string
        value: String,
    },

    /// Nothing to send: neither content nor embed options were given.
    #[error("Empty message: provide --content or at least one embed option")]
    EmptyMessage,

    /// The assembled message violates a platform limit.
    #[error("Invalid message: {0}")]
    Message(#[from] ValidationError),
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The webhook URL field.
    pub const URL: &str = "url";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
