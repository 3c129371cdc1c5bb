//! Single-line, color-coded diagnostic records on standard error.
//!
//! A [`Probe`] prints one line of the form
//!
//! ```text
//! ESC[38;2;<r;g;b>m: LABEL @ HH:MM:SS :ESC[m 'message' 0xCODE
//! ```
//!
//! and, when built in panic mode, terminates the process with the low four
//! bits of its code (always `1..=15`, see [`code`]). [`Severity`] supplies the
//! `LOGGS`/`WARNS`/`ERROR` presets, [`helpers`] and the exported macros supply
//! the standard check/notice/error and probe/warn/panic call forms, and
//! [`parse_line`] reads lines back for downstream tooling.

#![warn(missing_docs)]

pub mod code;
pub mod color;
pub mod helpers;
mod macros;
pub mod parse;
pub mod probe;
pub mod renderer;
pub mod severity;

pub use code::{Section, EXIT_BIT, ORIGIN_CHECK, ORIGIN_TERMINATE};
pub use color::{ColorError, Rgb};
pub use helpers::Call;
pub use parse::{parse_line, ParseError, ParsedLine};
pub use probe::{
    Outcome, Probe, Style, DEFAULT_EMPHASIS, DEFAULT_LABEL, DEFAULT_MESSAGE, TIMESTAMP_FORMAT,
};
pub use renderer::{strip_ansi, AnsiRenderer, JsonRenderer, PlainRenderer, ProbeRenderer};
pub use severity::{Palette, Severity};
