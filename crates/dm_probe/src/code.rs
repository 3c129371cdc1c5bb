//! Probe codes: the exit bit, origin nibbles, and the byte/nibble layout.
//!
//! A probe code is a plain `u32`. Callers assign meaning to it following a
//! fixed convention, most significant byte last:
//!
//! | Byte | Low nibble | High nibble |
//! |------|------------|-------------|
//! | 0 | system exit codes | global exit codes |
//! | 1 | creation, initialisation and destruction | setup, getup and callbacks |
//! | 2 | resource acquisition and initialisation | resource misfile and error handling |
//! | 3 | dependency codes | things that should not happen in `main` |
//!
//! The convention is documentation only; the emitter accepts any value. The
//! only bit the emitter touches is [`EXIT_BIT`], which is always set before a
//! code is displayed or turned into a process exit status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit OR'ed into every displayed code so a panicking probe never exits with 0.
pub const EXIT_BIT: u32 = 0x1;

/// Mask applied to the displayed code to obtain the process exit status.
pub const EXIT_MASK: u32 = 0xF;

/// Origin nibble for calls that report and continue.
pub const ORIGIN_CHECK: u32 = 0x10;

/// Origin nibble for calls that report and terminate.
pub const ORIGIN_TERMINATE: u32 = 0x20;

/// Returns the code as it is printed: `code | EXIT_BIT`.
pub const fn displayed(code: u32) -> u32 {
    code | EXIT_BIT
}

/// Returns the process exit status a panicking probe with `code` terminates with.
///
/// Only the low four bits survive, so the result is always in `1..=15`.
pub const fn exit_status(code: u32) -> i32 {
    (displayed(code) & EXIT_MASK) as i32
}

/// Combines a severity code with an origin nibble.
pub const fn compose(severity_code: u32, origin: u32) -> u32 {
    severity_code | origin
}

/// One nibble of the code convention.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Section {
    /// Byte 0, low nibble.
    SystemExit,
    /// Byte 0, high nibble.
    GlobalExit,
    /// Byte 1, low nibble.
    Lifecycle,
    /// Byte 1, high nibble.
    Setup,
    /// Byte 2, low nibble.
    ResourceAcquisition,
    /// Byte 2, high nibble.
    ResourceHandling,
    /// Byte 3, low nibble.
    Dependency,
    /// Byte 3, high nibble.
    Unreachable,
}

impl Section {
    /// All sections, least significant first.
    pub const ALL: [Section; 8] = [
        Section::SystemExit,
        Section::GlobalExit,
        Section::Lifecycle,
        Section::Setup,
        Section::ResourceAcquisition,
        Section::ResourceHandling,
        Section::Dependency,
        Section::Unreachable,
    ];

    /// Bit offset of this nibble within the code.
    pub fn shift(self) -> u32 {
        match self {
            Section::SystemExit => 0,
            Section::GlobalExit => 4,
            Section::Lifecycle => 8,
            Section::Setup => 12,
            Section::ResourceAcquisition => 16,
            Section::ResourceHandling => 20,
            Section::Dependency => 24,
            Section::Unreachable => 28,
        }
    }

    /// Extracts this section's nibble from `code`.
    pub fn get(self, code: u32) -> u8 {
        ((code >> self.shift()) & 0xF) as u8
    }

    /// Returns `code` with this section's nibble replaced by `value & 0xF`.
    pub fn set(self, code: u32, value: u8) -> u32 {
        let shift = self.shift();
        (code & !(0xF << shift)) | ((u32::from(value) & 0xF) << shift)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::SystemExit => "system exit",
            Section::GlobalExit => "global exit",
            Section::Lifecycle => "creation/initialisation/destruction",
            Section::Setup => "setup/getup/callback",
            Section::ResourceAcquisition => "resource acquisition",
            Section::ResourceHandling => "resource handling",
            Section::Dependency => "dependency",
            Section::Unreachable => "unreachable in main",
        };
        f.write_str(name)
    }
}

/// Parses a code written either as `0x`-prefixed hex or as decimal.
pub fn parse_code(text: &str) -> Option<u32> {
    let text = text.trim();
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}
