//! Rendering backends for the probe line.

use crate::color::{CSI, RESET};
use crate::probe::{Probe, Style};
use serde::Serialize;

/// Trait for rendering probes into output lines.
///
/// Every implementation produces exactly one line, including the trailing
/// newline.
pub trait ProbeRenderer {
    /// Renders a single probe.
    fn render(&self, probe: &Probe) -> String;
}

/// The colored wire format:
///
/// ```text
/// \x1b[38;2;120;240;0m: LOGGS @ 12:34:56 :\x1b[m 'message' 0x11 \n
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiRenderer;

impl ProbeRenderer for AnsiRenderer {
    fn render(&self, probe: &Probe) -> String {
        format!(
            "{CSI}{}{}m: {} @ {} :{RESET} '{}' 0x{:X} \n",
            probe.style().prefix(),
            probe.color(),
            probe.label(),
            probe.timestamp(),
            probe.message(),
            probe.displayed_code(),
        )
    }
}

/// The wire format with all escape sequences removed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainRenderer;

impl ProbeRenderer for PlainRenderer {
    fn render(&self, probe: &Probe) -> String {
        format!(
            ": {} @ {} : '{}' 0x{:X} \n",
            probe.label(),
            probe.timestamp(),
            probe.message(),
            probe.displayed_code(),
        )
    }
}

/// One JSON object per line.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonRecord<'a> {
    label: &'a str,
    timestamp: &'a str,
    message: &'a str,
    code: u32,
    displayed_code: String,
    panic: bool,
    style: Style,
    color: String,
}

impl ProbeRenderer for JsonRenderer {
    fn render(&self, probe: &Probe) -> String {
        let record = JsonRecord {
            label: probe.label(),
            timestamp: probe.timestamp(),
            message: probe.message(),
            code: probe.code(),
            displayed_code: format!("0x{:X}", probe.displayed_code()),
            panic: probe.is_panic(),
            style: probe.style(),
            color: probe.color().to_string(),
        };
        let mut line = serde_json::to_string(&record).unwrap_or_default();
        line.push('\n');
        line
    }
}

/// Removes CSI escape sequences (`ESC [ ... final`) from `text`.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameter and intermediate bytes, then one final byte in '@'..='~'.
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
