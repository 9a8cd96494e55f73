//! Packed 24-bit RGB colors for embeds.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

const RGB_MASK: u32 = 0x00FF_FFFF;

/// An embed color, stored as a packed `0xRRGGBB` integer.
///
/// Serializes as a plain decimal number, so `0x00FF00` is written as `65280`.
/// The default is black (`0`), which is still serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Black, the platform default.
    pub const BLACK: Self = Self(0);

    /// Creates a color from its red, green and blue components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Returns the packed `0xRRGGBB` value.
    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Returns the red, green and blue components.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // each component is masked to 8 bits
    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            (self.0 >> 16) as u8,
            (self.0 >> 8) as u8,
            self.0 as u8,
        )
    }
}

impl From<u32> for Color {
    /// Bits above the low 24 are discarded.
    fn from(packed: u32) -> Self {
        Self(packed & RGB_MASK)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color '{value}': expected '#RRGGBB', '0xRRGGBB' or a decimal value up to 16777215")]
pub struct ParseColorError {
    /// The rejected input
    pub value: String,
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#RRGGBB`, `0xRRGGBB` or a decimal integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseColorError {
            value: s.to_string(),
        };

        let packed = if let Some(hex) = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            if hex.len() != 6 {
                return Err(err());
            }
            u32::from_str_radix(hex, 16).map_err(|_| err())?
        } else {
            trimmed.parse::<u32>().map_err(|_| err())?
        };

        if packed > RGB_MASK {
            return Err(err());
        }

        Ok(Self(packed))
    }
}
