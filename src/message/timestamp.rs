//! Embed timestamps normalized to an absolute instant.

use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Formats accepted for date-times that carry no offset.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A point in time shown in an embed.
///
/// Always holds an absolute instant together with the offset it was
/// created with. Date-times without an offset are interpreted as UTC.
///
/// # Wire Format
///
/// Encoded as an RFC 3339 instant in UTC with a `Z` suffix. Fractional
/// seconds are written only when non-zero, e.g. `2021-01-01T00:00:00Z`
/// or `2021-01-01T00:00:00.250Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// The current system time, in UTC.
    #[must_use]
    pub fn now() -> Self {
        Utc::now().into()
    }

    /// Returns the instant with its original offset.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Returns the canonical wire encoding.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.0
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.fixed_offset())
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(dt: DateTime<Local>) -> Self {
        Self(dt.fixed_offset())
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Self(naive.and_utc().fixed_offset())
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        DateTime::<Utc>::from(time).into()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

/// Error returned when a timestamp string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid timestamp '{value}': expected RFC 3339 or 'YYYY-MM-DDTHH:MM:SS'")]
pub struct ParseTimestampError {
    /// The rejected input
    pub value: String,
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    /// Parses RFC 3339, falling back to an offset-less date-time taken as UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.into());
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(Self::from)
            .ok_or_else(|| ParseTimestampError {
                value: s.to_string(),
            })
    }
}
