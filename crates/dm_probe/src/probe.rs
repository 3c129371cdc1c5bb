//! The diagnostic record and its emission.
//!
//! Building a [`Probe`] is pure apart from reading the clock. Nothing is
//! printed until [`Probe::emit`] (or [`Probe::terminate`]) is called, which
//! writes exactly one line to standard error and, for panicking probes, ends
//! the process with [`Probe::exit_status`].

use crate::code::{self, EXIT_BIT};
use crate::color::{Rgb, PANIC_PREFIX, REGULAR_PREFIX};
use crate::renderer::{AnsiRenderer, ProbeRenderer};
use crate::severity::{Palette, Severity};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::process;

/// Label used by the base probe.
pub const DEFAULT_LABEL: &str = "PROBE";

/// Message used by the base probe.
pub const DEFAULT_MESSAGE: &str = "butt";

/// Emphasis color used by the base probe.
pub const DEFAULT_EMPHASIS: Rgb = Rgb::new(120, 120, 120);

/// `strftime` pattern for the record timestamp.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// How the color is applied to the record header.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Background color, used when the probe terminates the process.
    Panic,
    /// Foreground color.
    Regular,
}

impl Style {
    /// The SGR parameters that precede the RGB triple.
    pub fn prefix(self) -> &'static str {
        match self {
            Style::Panic => PANIC_PREFIX,
            Style::Regular => REGULAR_PREFIX,
        }
    }

    /// Maps an SGR prefix back to its style.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            PANIC_PREFIX => Some(Style::Panic),
            REGULAR_PREFIX => Some(Style::Regular),
            _ => None,
        }
    }
}

/// A single diagnostic record.
///
/// Fields are fixed once the record is built; only the code can be copied
/// over from another record with [`assign_code`](Self::assign_code).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probe {
    label: String,
    message: String,
    code: u32,
    panic: bool,
    emphasis: Rgb,
    normal: Rgb,
    timestamp: String,
}

/// What happened to a dispatched probe.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The line was written and control returns to the caller.
    Continued(Probe),
    /// The line was written and the process must exit with `status`.
    Terminated {
        /// Exit status, always in `1..=15`.
        status: i32,
    },
}

impl Outcome {
    /// The exit status if the probe terminates.
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            Outcome::Continued(_) => None,
            Outcome::Terminated { status } => Some(*status),
        }
    }

    /// The returned probe if control continues.
    pub fn into_probe(self) -> Option<Probe> {
        match self {
            Outcome::Continued(probe) => Some(probe),
            Outcome::Terminated { .. } => None,
        }
    }
}

impl Probe {
    /// Creates a non-panicking probe with the base code and colors.
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            code: EXIT_BIT,
            panic: false,
            emphasis: DEFAULT_EMPHASIS,
            normal: DEFAULT_EMPHASIS,
            timestamp: capture_timestamp(),
        }
    }

    /// Creates a probe preset for `severity`: its label, default code and colors.
    pub fn from_severity(severity: Severity, message: impl Into<String>) -> Self {
        Self::new(severity.label(), message)
            .with_code(severity.code())
            .with_palette(severity.palette())
    }

    /// Informational preset (`LOGGS`).
    pub fn logging(message: impl Into<String>) -> Self {
        Self::from_severity(Severity::Informational, message)
    }

    /// Warning preset (`WARNS`).
    pub fn warning(message: impl Into<String>) -> Self {
        Self::from_severity(Severity::Warning, message)
    }

    /// Error preset (`ERROR`).
    pub fn error(message: impl Into<String>) -> Self {
        Self::from_severity(Severity::Error, message)
    }

    /// Replaces the category label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the raw code. No validation is performed.
    pub fn with_code(mut self, code: u32) -> Self {
        self.code = code;
        self
    }

    /// Selects whether emission terminates the process.
    pub fn with_panic(mut self, panic: bool) -> Self {
        self.panic = panic;
        self
    }

    /// Sets both colors; `normal` falls back to `emphasis` when `None`.
    pub fn with_colors(mut self, emphasis: Rgb, normal: Option<Rgb>) -> Self {
        self.emphasis = emphasis;
        self.normal = normal.unwrap_or(emphasis);
        self
    }

    /// Sets both colors from a palette.
    pub fn with_palette(self, palette: Palette) -> Self {
        self.with_colors(palette.emphasis, Some(palette.normal))
    }

    /// Replaces the captured timestamp.
    pub fn at(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Copies `other`'s code into this record. Nothing is re-emitted.
    pub fn assign_code(&mut self, other: &Probe) {
        self.code = other.code;
    }

    /// The category label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The free-text message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The code as given by the caller.
    pub fn code(&self) -> u32 {
        self.code
    }

    /// The code as printed, with [`EXIT_BIT`] set.
    pub fn displayed_code(&self) -> u32 {
        code::displayed(self.code)
    }

    /// Whether emission terminates the process.
    pub fn is_panic(&self) -> bool {
        self.panic
    }

    /// The panic-mode background color.
    pub fn emphasis(&self) -> Rgb {
        self.emphasis
    }

    /// The normal-mode foreground color.
    pub fn normal(&self) -> Rgb {
        self.normal
    }

    /// `HH:MM:SS` at construction, or whatever the formatter managed to produce.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The style the header is drawn in.
    pub fn style(&self) -> Style {
        if self.panic {
            Style::Panic
        } else {
            Style::Regular
        }
    }

    /// The color matching [`style`](Self::style).
    pub fn color(&self) -> Rgb {
        if self.panic {
            self.emphasis
        } else {
            self.normal
        }
    }

    /// The status the process exits with if this probe panics.
    pub fn exit_status(&self) -> i32 {
        code::exit_status(self.code)
    }

    /// Writes the rendered line to `out` and reports whether to exit.
    ///
    /// Write failures are ignored. The process is never terminated here;
    /// callers that receive [`Outcome::Terminated`] decide how to stop.
    pub fn dispatch<W: Write>(self, renderer: &dyn ProbeRenderer, out: &mut W) -> Outcome {
        write_line(renderer, &self, out);
        if self.panic {
            Outcome::Terminated {
                status: self.exit_status(),
            }
        } else {
            Outcome::Continued(self)
        }
    }

    /// Prints the record to standard error, exiting if it panics.
    pub fn emit(self) -> Probe {
        self.emit_with(&AnsiRenderer)
    }

    /// Like [`emit`](Self::emit) with a custom renderer.
    pub fn emit_with(self, renderer: &dyn ProbeRenderer) -> Probe {
        if self.panic {
            self.terminate_with(renderer)
        }
        write_line(renderer, &self, &mut io::stderr().lock());
        self
    }

    /// Prints the record in panic style and exits with [`exit_status`](Self::exit_status).
    pub fn terminate(self) -> ! {
        self.terminate_with(&AnsiRenderer)
    }

    /// Like [`terminate`](Self::terminate) with a custom renderer.
    pub fn terminate_with(self, renderer: &dyn ProbeRenderer) -> ! {
        let probe = self.with_panic(true);
        write_line(renderer, &probe, &mut io::stderr().lock());
        process::exit(probe.exit_status())
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL, DEFAULT_MESSAGE)
    }
}

fn write_line<W: Write>(renderer: &dyn ProbeRenderer, probe: &Probe, out: &mut W) {
    let _ = out.write_all(renderer.render(probe).as_bytes());
    let _ = out.flush();
}

/// Formats the local time as `HH:MM:SS`; a formatter error leaves a partial string.
fn capture_timestamp() -> String {
    let mut buf = String::with_capacity(16);
    let _ = write!(buf, "{}", Local::now().format(TIMESTAMP_FORMAT));
    buf
}
