//! `dm-probe emit` and the call-form subcommands.

use dm_probe::{Call, ColorError, Probe, Rgb, Severity};
use dm_probe_config::ResolvedConfig;

use crate::output;
use crate::{EmitArgs, GlobalArgs};

/// Runs `dm-probe emit`.
///
/// Returns 0 for a continuing record, or the probe's exit status if it panics.
pub fn run(args: &EmitArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = output::load_config(global)?;
    let probe = build(args, &config)?;
    Ok(output::dispatch(probe, global))
}

/// Runs one of the call-form subcommands.
pub fn run_call(
    call: Call,
    message: Option<String>,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let config = output::load_config(global)?;
    tracing::debug!(%call, code = call.code(), "dispatching call");
    Ok(output::dispatch(build_call(call, message, &config), global))
}

/// Builds the record for `dm-probe emit` from flags layered over the configuration.
pub fn build(args: &EmitArgs, config: &ResolvedConfig) -> Result<Probe, ColorError> {
    let mut probe = match args.severity.map(Severity::from) {
        Some(severity) => {
            let message = args
                .message
                .clone()
                .unwrap_or_else(|| severity.default_message().to_string());
            config.severity_probe(severity, message)
        }
        None => config.base_probe(args.message.clone()),
    };

    if let Some(label) = &args.label {
        probe = probe.with_label(label.clone());
    }
    if let Some(code) = args.code {
        probe = probe.with_code(code);
    }

    let emphasis = args.emphasis.as_deref().map(str::parse::<Rgb>).transpose()?;
    let normal = args.normal.as_deref().map(Rgb::parse_optional).transpose()?;
    probe = match (emphasis, normal) {
        (None, None) => probe,
        (Some(emphasis), None) => probe.with_colors(emphasis, None),
        (emphasis, Some(normal)) => {
            let emphasis = emphasis.unwrap_or(probe.emphasis());
            probe.with_colors(emphasis, normal)
        }
    };

    Ok(probe.with_panic(args.panic))
}

/// Builds the record for a call form, using configured colors.
pub fn build_call(call: Call, message: Option<String>, config: &ResolvedConfig) -> Probe {
    match call.severity() {
        Some(severity) => {
            let message = message.unwrap_or_else(|| severity.default_message().to_string());
            call.build(message).with_palette(config.palette(severity))
        }
        None => call
            .build(message.unwrap_or_else(|| config.message.clone()))
            .with_colors(config.emphasis, config.normal),
    }
}
