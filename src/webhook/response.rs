//! Delivery result and rate-limit header extraction.

use std::fmt;
use std::str::FromStr;

use http::{HeaderMap, StatusCode};

use super::HttpResponse;

/// Rate-limit header names read from webhook responses.
///
/// Header lookups are case-insensitive.
pub mod header {
    /// Set when the global rate limit was hit.
    pub const GLOBAL: &str = "x-ratelimit-global";
    /// Number of requests allowed in the current window.
    pub const LIMIT: &str = "x-ratelimit-limit";
    /// Requests left in the current window.
    pub const REMAINING: &str = "x-ratelimit-remaining";
    /// Epoch seconds at which the window resets.
    pub const RESET: &str = "x-ratelimit-reset";
    /// Seconds until the window resets.
    pub const RESET_AFTER: &str = "x-ratelimit-reset-after";
}

/// What the webhook endpoint sent back for a delivered message.
///
/// The status code is always present and is never treated as an error;
/// callers decide what a 4xx or 5xx means for them. Each rate-limit field
/// is `None` when its header was missing or was not a base-10 integer,
/// independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code, usually 204 No Content on success
    pub status: StatusCode,
    /// `X-RateLimit-Global`
    pub rate_limit_global: Option<i32>,
    /// `X-RateLimit-Limit`
    pub rate_limit_limit: Option<i32>,
    /// `X-RateLimit-Remaining`
    pub rate_limit_remaining: Option<i32>,
    /// `X-RateLimit-Reset`, in epoch seconds
    pub rate_limit_reset: Option<i64>,
    /// `X-RateLimit-Reset-After`, in seconds
    pub rate_limit_reset_after: Option<i32>,
}

impl Response {
    /// Extracts the status and rate-limit fields from a status and header map.
    #[must_use]
    pub fn from_parts(status: StatusCode, headers: &HeaderMap) -> Self {
        Self {
            status,
            rate_limit_global: header_i32(headers, header::GLOBAL),
            rate_limit_limit: header_i32(headers, header::LIMIT),
            rate_limit_remaining: header_i32(headers, header::REMAINING),
            rate_limit_reset: header_i64(headers, header::RESET),
            rate_limit_reset_after: header_i32(headers, header::RESET_AFTER),
        }
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns true if the endpoint answered 429 Too Many Requests.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status == StatusCode::TOO_MANY_REQUESTS
    }
}

impl From<&HttpResponse> for Response {
    fn from(response: &HttpResponse) -> Self {
        Self::from_parts(response.status, &response.headers)
    }
}

/// Formats an optional value as the value or `-`.
struct Opt<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("-"),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Response {{ status: {}, global: {}, limit: {}, remaining: {}, reset: {}, reset_after: {} }}",
            self.status_code(),
            Opt(self.rate_limit_global),
            Opt(self.rate_limit_limit),
            Opt(self.rate_limit_remaining),
            Opt(self.rate_limit_reset),
            Opt(self.rate_limit_reset_after),
        )
    }
}

/// Reads a 32-bit integer header; missing or malformed values yield `None`.
#[must_use]
pub fn header_i32(headers: &HeaderMap, name: &str) -> Option<i32> {
    parse_header(headers, name)
}

/// Reads a 64-bit integer header; missing or malformed values yield `None`.
#[must_use]
pub fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    parse_header(headers, name)
}

fn parse_header<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
