//! RGB color values and their hex serialization.
//!
//! A [`ColorHex`] is both the value stored in each tile grid cell and the
//! color component of glyph lookup URLs and cache keys, so its string form is
//! fixed: six lowercase hex digits, two per channel, zero-padded.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{input}' - expected six hex digits like '0c2238'")]
pub struct ColorParseError {
    input: String,
}

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorHex {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorHex {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Two-digit lowercase hex for a single channel value.
///
/// ```
/// use mosaic::color::to_hex;
///
/// assert_eq!(to_hex(0), "00");
/// assert_eq!(to_hex(16), "10");
/// assert_eq!(to_hex(255), "ff");
/// ```
pub fn to_hex(channel: u8) -> String {
    format!("{:02x}", channel)
}

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for ColorHex {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };

        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| err());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<[u8; 3]> for ColorHex {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}
