//! Error types for message construction.

use thiserror::Error;

/// Error raised when a message would violate a platform limit.
///
/// Raised synchronously while the message is being built, so it always
/// surfaces before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The message already carries the maximum number of embeds.
    #[error("Too many embeds for this message: at most {max} are allowed")]
    TooManyEmbeds {
        /// The embed limit that was exceeded
        max: usize,
    },
}
