//! Severity presets ordered from least to most severe.

use crate::code;
use crate::color::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The emphasis and normal colors a probe is drawn with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Palette {
    /// Background color used in panic mode.
    pub emphasis: Rgb,
    /// Foreground color used otherwise.
    pub normal: Rgb,
}

impl Palette {
    /// A palette using `emphasis` for both modes.
    pub const fn uniform(emphasis: Rgb) -> Self {
        Self {
            emphasis,
            normal: emphasis,
        }
    }
}

/// One of the three labelled presets over the base probe.
///
/// Ordered from least severe (`Informational`) to most severe (`Error`),
/// matching the derived `PartialOrd`/`Ord` implementation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Plain logging; exits with 1 on panic.
    Informational,
    /// Something worth a look; exits with 11 (`EAGAIN`) on panic.
    Warning,
    /// A definite failure; exits with 9 on panic.
    Error,
}

impl Severity {
    /// All severities, least severe first.
    pub const ALL: [Severity; 3] = [Severity::Informational, Severity::Warning, Severity::Error];

    /// Looks up a severity by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.to_string() == name)
    }

    /// The label printed in the record.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Informational => "LOGGS",
            Severity::Warning => "WARNS",
            Severity::Error => "ERROR",
        }
    }

    /// The default code, before any origin nibble is composed in.
    pub fn code(self) -> u32 {
        match self {
            Severity::Informational => 0x1,
            Severity::Warning => 0xB,
            Severity::Error => 0x8,
        }
    }

    /// The message used when the caller gives none.
    pub fn default_message(self) -> &'static str {
        match self {
            Severity::Informational => "logging",
            Severity::Warning => "warning",
            Severity::Error => "whoopsie!",
        }
    }

    /// The built-in colors for this severity.
    pub fn palette(self) -> Palette {
        match self {
            Severity::Informational => Palette {
                emphasis: Rgb::new(120, 240, 0),
                normal: Rgb::new(240, 0, 0),
            },
            Severity::Warning => Palette {
                emphasis: Rgb::new(0, 120, 240),
                normal: Rgb::new(240, 120, 240),
            },
            Severity::Error => Palette {
                emphasis: Rgb::new(204, 35, 120),
                normal: Rgb::new(204, 240, 120),
            },
        }
    }

    /// Exit status of a panicking probe using this severity's default code.
    pub fn exit_status(self) -> i32 {
        code::exit_status(self.code())
    }

    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Informational => write!(f, "informational"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}
