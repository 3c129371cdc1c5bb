//! Shared plumbing: configuration lookup, renderer selection and dispatch.

use std::io::{self, IsTerminal};
use std::path::Path;

use dm_probe::{AnsiRenderer, JsonRenderer, Outcome, PlainRenderer, Probe, ProbeRenderer};
use dm_probe_config::{ConfigError, ResolvedConfig};

use crate::{GlobalArgs, ReportFormat};

/// Whether standard error is attached to a terminal.
pub fn stderr_is_terminal() -> bool {
    io::stderr().is_terminal()
}

/// Loads `--config` if given, otherwise `./probe.toml` if present.
pub fn load_config(global: &GlobalArgs) -> Result<ResolvedConfig, ConfigError> {
    match &global.config {
        Some(path) => dm_probe_config::load_config(Path::new(path)),
        None => dm_probe_config::discover_config(&std::env::current_dir()?),
    }
}

/// Picks the renderer for the requested format and color setting.
pub fn renderer(global: &GlobalArgs) -> Box<dyn ProbeRenderer> {
    match (global.format, global.color) {
        (ReportFormat::Json, _) => Box::new(JsonRenderer),
        (ReportFormat::Text, true) => Box::new(AnsiRenderer),
        (ReportFormat::Text, false) => Box::new(PlainRenderer),
    }
}

/// Writes `probe` to stderr and returns the process exit status.
pub fn dispatch(probe: Probe, global: &GlobalArgs) -> i32 {
    let renderer = renderer(global);
    match probe.dispatch(renderer.as_ref(), &mut io::stderr().lock()) {
        Outcome::Continued(probe) => {
            tracing::debug!(code = probe.displayed_code(), "probe continued");
            0
        }
        Outcome::Terminated { status } => {
            tracing::debug!(status, "probe terminated");
            status
        }
    }
}
