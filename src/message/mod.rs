//! Message data model for webhook payloads.
//!
//! This module provides:
//! - The top-level payload ([`Message`]) with its 10-embed limit
//! - Rich embeds ([`Embed`]) and their parts ([`Author`], [`Field`],
//!   [`Thumbnail`], [`Image`], [`Footer`])
//! - Packed RGB colors ([`Color`]) and normalized timestamps ([`Timestamp`])
//! - The JSON encoder ([`to_json`], [`to_json_string`])
//!
//! # Wire Shape
//!
//! Unset optional values are omitted from the encoded document, never
//! written as `null`. Only `color`, `tts` and each field's `inline` are
//! always present, even at their default values.

mod color;
mod embed;
mod error;
mod parts;
mod payload;
mod serialize;
mod timestamp;

#[cfg(test)]
mod timestamp_tests;

pub use color::{Color, ParseColorError};
pub use embed::Embed;
pub use error::ValidationError;
pub use parts::{Author, Field, Footer, Image, Thumbnail};
pub use payload::{MAX_EMBEDS, Message};
pub use serialize::{to_json, to_json_string};
pub use timestamp::{ParseTimestampError, Timestamp};
