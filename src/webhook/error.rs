//! Error types for webhook delivery.

use std::fmt;

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level. Status codes are not
/// errors here; any response the server sends back is a success.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and I/O errors while writing or reading.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error returned when a message could not be delivered.
///
/// Neither the description of a transport failure nor any error in its
/// source chain contains the webhook URL; every occurrence is replaced with
/// [`REDACTED_URL`](super::REDACTED_URL). `Debug` prints the description only.
#[derive(Error)]
pub enum SendError {
    /// The message could not be encoded as JSON.
    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    /// The request failed before a response was received.
    #[error("Failed to send webhook message: {description}")]
    Transport {
        /// Redacted description of the failure and its causes
        description: String,
        /// Underlying transport error
        #[source]
        source: HttpError,
    },
}

impl SendError {
    /// Returns true if the failure was a timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                source: HttpError::Timeout,
                ..
            }
        )
    }
}

impl fmt::Debug for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(e) => f.debug_tuple("Encode").field(e).finish(),
            Self::Transport { description, .. } => f
                .debug_struct("Transport")
                .field("description", description)
                .finish_non_exhaustive(),
        }
    }
}

/// A cause in a transport error chain, with the webhook URL scrubbed from its message.
#[derive(Debug)]
pub(crate) struct RedactedError {
    pub(crate) message: String,
    pub(crate) source: Option<Box<Self>>,
}

impl fmt::Display for RedactedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RedactedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
