//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default User-Agent header, identifying this tool and its version.
pub const USER_AGENT: &str = concat!("discord-hook/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
