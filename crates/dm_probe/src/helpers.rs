//! The six standard call forms.
//!
//! Three forms report and continue (origin nibble [`ORIGIN_CHECK`]) and three
//! report and terminate (origin nibble [`ORIGIN_TERMINATE`]). The macros in
//! this crate ([`probe_check!`](crate::probe_check) and friends) forward here.

use crate::code::{compose, ORIGIN_CHECK, ORIGIN_TERMINATE};
use crate::probe::{Probe, DEFAULT_LABEL};
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the standard call forms.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Call {
    /// Base probe, code `0x10`, continues.
    Check,
    /// Warning, code `0xB | 0x10`, continues.
    Notice,
    /// Error, code `0x8 | 0x10`, continues.
    Error,
    /// Base probe, code `0x20`, exits with 1.
    Probe,
    /// Warning, code `0xB | 0x20`, exits with 11.
    Warn,
    /// Error, code `0x8 | 0x20`, exits with 9.
    Panic,
}

impl Call {
    /// All call forms, non-terminating first.
    pub const ALL: [Call; 6] = [
        Call::Check,
        Call::Notice,
        Call::Error,
        Call::Probe,
        Call::Warn,
        Call::Panic,
    ];

    /// Whether this form ends the process.
    pub fn terminates(self) -> bool {
        matches!(self, Call::Probe | Call::Warn | Call::Panic)
    }

    /// The severity preset, or `None` for the base probe.
    pub fn severity(self) -> Option<Severity> {
        match self {
            Call::Check | Call::Probe => None,
            Call::Notice | Call::Warn => Some(Severity::Warning),
            Call::Error | Call::Panic => Some(Severity::Error),
        }
    }

    /// The composed code: severity code (if any) plus the origin nibble.
    pub fn code(self) -> u32 {
        let origin = if self.terminates() {
            ORIGIN_TERMINATE
        } else {
            ORIGIN_CHECK
        };
        compose(self.severity().map_or(0, Severity::code), origin)
    }

    /// Builds the probe this form would emit, without emitting it.
    pub fn build(self, message: impl Into<String>) -> Probe {
        let probe = match self.severity() {
            Some(severity) => Probe::from_severity(severity, message),
            None => Probe::new(DEFAULT_LABEL, message),
        };
        probe.with_code(self.code()).with_panic(self.terminates())
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Call::Check => "check",
            Call::Notice => "notice",
            Call::Error => "error",
            Call::Probe => "probe",
            Call::Warn => "warn",
            Call::Panic => "panic",
        };
        f.write_str(name)
    }
}

/// Reports `message` as a `PROBE` and continues.
pub fn check(message: impl Into<String>) -> Probe {
    Call::Check.build(message).emit()
}

/// Reports `message` as a warning and continues.
pub fn notice(message: impl Into<String>) -> Probe {
    Call::Notice.build(message).emit()
}

/// Reports `message` as an error and continues.
pub fn error(message: impl Into<String>) -> Probe {
    Call::Error.build(message).emit()
}

/// Reports `message` as a `PROBE` and exits with 1.
pub fn probe(message: impl Into<String>) -> ! {
    Call::Probe.build(message).terminate()
}

/// Reports `message` as a warning and exits with 11.
pub fn warn(message: impl Into<String>) -> ! {
    Call::Warn.build(message).terminate()
}

/// Reports `message` as an error and exits with 9.
pub fn panic(message: impl Into<String>) -> ! {
    Call::Panic.build(message).terminate()
}
