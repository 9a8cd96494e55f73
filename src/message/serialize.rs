//! JSON encoding of messages.
//!
//! The wire shape is defined entirely by the serde attributes on the model
//! types; these functions hold no configuration of their own.

use super::Message;

/// Encodes a message as a UTF-8 JSON document.
///
/// # Errors
///
/// Returns an error only if serde_json fails internally; every
/// constructible [`Message`] encodes successfully.
pub fn to_json(message: &Message) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(message)
}

/// Encodes a message as a JSON string, for logging and dry runs.
///
/// # Errors
///
/// See [`to_json`].
pub fn to_json_string(message: &Message) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}
