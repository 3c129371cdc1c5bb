//! 24-bit colors and the ANSI escape pieces used by the probe line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Escape prefix selecting a truecolor background (panic style).
pub const PANIC_PREFIX: &str = "48;2;";

/// Escape prefix selecting a truecolor foreground (normal style).
pub const REGULAR_PREFIX: &str = "38;2;";

/// Control sequence introducer.
pub const CSI: &str = "\x1b[";

/// Sequence resetting all attributes.
pub const RESET: &str = "\x1b[m";

/// An RGB triple, written as `r;g;b` inside an SGR escape sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an optional color where an empty string means "not set".
    pub fn parse_optional(text: &str) -> Result<Option<Self>, ColorError> {
        if text.trim().is_empty() {
            Ok(None)
        } else {
            text.parse().map(Some)
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.r, self.g, self.b)
    }
}

/// Errors from parsing an `r;g;b` triple.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The text did not have exactly three `;`-separated fields.
    #[error("expected three ';'-separated channels, found {0}")]
    ChannelCount(usize),

    /// A channel was not a decimal number in `0..=255`.
    #[error("invalid color channel '{0}'")]
    InvalidChannel(String),
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(';').collect();
        if parts.len() != 3 {
            return Err(ColorError::ChannelCount(parts.len()));
        }
        let channel = |part: &str| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| ColorError::InvalidChannel(part.to_string()))
        };
        Ok(Rgb::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
        ))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}
