//! Webhook layer for delivering messages over HTTP.
//!
//! This module provides types and traits for:
//! - Delivering messages ([`MessageSender`], [`Webhook`])
//! - Reading the endpoint's reply and rate-limit headers ([`Response`])
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//!
//! Nothing here retries or throttles. Failures and rate-limit state are
//! reported to the caller, who decides what to do with them.

mod client;
mod dispatcher;
mod error;
mod http;
mod response;


pub use client::ReqwestClient;
pub use dispatcher::{MessageSender, REDACTED_URL, Webhook};
pub use error::{HttpError, SendError};
use error::RedactedError;
pub use self::http::{HttpClient, HttpRequest, HttpResponse};
pub use response::{Response, header, header_i32, header_i64};
