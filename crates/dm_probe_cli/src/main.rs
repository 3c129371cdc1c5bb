//! dm-probe CLI: emit and read probe lines from the shell.
//!
//! Provides `dm-probe emit` for arbitrary records, one subcommand per standard
//! call form (`check`, `notice`, `error`, `probe`, `warn`, `panic`),
//! `dm-probe demo` for a walkthrough of the call forms, and `dm-probe parse`
//! for turning probe lines back into fields.

#![warn(missing_docs)]

mod demo;
mod emit;
mod output;
mod parse;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use dm_probe::{Call, Severity};
use tracing::Level;

/// dm-probe: color-coded diagnostic lines with exit codes.
#[derive(Parser, Debug)]
#[command(name = "dm-probe", version, about = "Structured diagnostic probes")]
pub struct Cli {
    /// Suppress all logging except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Always)]
    pub color: ColorChoice,

    /// Output format for records.
    #[arg(short, long, global = true, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Path to a `probe.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit a single record with explicit fields.
    Emit(EmitArgs),
    /// Report a PROBE (code 0x10) and continue.
    Check(MessageArgs),
    /// Report a warning (code 0x1B) and continue.
    Notice(MessageArgs),
    /// Report an error (code 0x18) and continue.
    Error(MessageArgs),
    /// Report a PROBE (code 0x20) and exit with 1.
    Probe(MessageArgs),
    /// Report a warning (code 0x2B) and exit with 11.
    Warn(MessageArgs),
    /// Report an error (code 0x28) and exit with 9.
    Panic(MessageArgs),
    /// Walk through the call forms, ending with a terminating probe.
    Demo,
    /// Read probe lines from stdin and print their fields.
    Parse(ParseArgs),
}

/// Arguments for the `dm-probe emit` subcommand.
#[derive(Parser, Debug)]
pub struct EmitArgs {
    /// Start from a severity preset instead of the base probe.
    #[arg(short, long, value_enum)]
    pub severity: Option<SeverityArg>,

    /// Category label (defaults to the preset or configured label).
    #[arg(short, long)]
    pub label: Option<String>,

    /// Message text.
    #[arg(short, long)]
    pub message: Option<String>,

    /// Code as `0x`-prefixed hex or decimal.
    #[arg(short, long, value_parser = parse_code_arg)]
    pub code: Option<u32>,

    /// Exit after printing, with the low four bits of `code | 1`.
    #[arg(short, long)]
    pub panic: bool,

    /// Emphasis color as `r;g;b`.
    #[arg(long)]
    pub emphasis: Option<String>,

    /// Normal color as `r;g;b`; empty means the emphasis color.
    #[arg(long)]
    pub normal: Option<String>,
}

/// The message argument shared by the call-form subcommands.
#[derive(Parser, Debug)]
pub struct MessageArgs {
    /// Message text.
    pub message: Vec<String>,
}

impl MessageArgs {
    /// The words joined with spaces, or `None` if no words were given.
    pub fn text(&self) -> Option<String> {
        if self.message.is_empty() {
            None
        } else {
            Some(self.message.join(" "))
        }
    }
}

/// Arguments for the `dm-probe parse` subcommand.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Exit with 1 if any line is not a probe line.
    #[arg(long)]
    pub strict: bool,
}

/// Severity preset selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    /// `LOGGS`.
    Informational,
    /// `WARNS`.
    Warning,
    /// `ERROR`.
    Error,
}

impl From<SeverityArg> for Severity {
    fn from(value: SeverityArg) -> Self {
        match value {
            SeverityArg::Informational => Severity::Informational,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Error => Severity::Error,
        }
    }
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stderr is a terminal.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Record output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// The probe line.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to use colored output.
    pub color: bool,
    /// Record output format.
    pub format: ReportFormat,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn parse_code_arg(text: &str) -> Result<u32, String> {
    dm_probe::code::parse_code(text).ok_or_else(|| format!("'{text}' is not a 32-bit code"))
}

fn log_level(quiet: bool, verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.quiet, cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let color = match cli.color {
        ColorChoice::Auto => output::stderr_is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        color,
        format: cli.format,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Emit(ref args) => emit::run(args, &global),
        Command::Check(ref args) => emit::run_call(Call::Check, args.text(), &global),
        Command::Notice(ref args) => emit::run_call(Call::Notice, args.text(), &global),
        Command::Error(ref args) => emit::run_call(Call::Error, args.text(), &global),
        Command::Probe(ref args) => emit::run_call(Call::Probe, args.text(), &global),
        Command::Warn(ref args) => emit::run_call(Call::Warn, args.text(), &global),
        Command::Panic(ref args) => emit::run_call(Call::Panic, args.text(), &global),
        Command::Demo => demo::run(),
        Command::Parse(ref args) => parse::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_emit_default() {
        let cli = Cli::parse_from(["dm-probe", "emit"]);
        match cli.command {
            Command::Emit(ref args) => {
                assert!(args.severity.is_none());
                assert!(args.label.is_none());
                assert!(args.message.is_none());
                assert!(args.code.is_none());
                assert!(!args.panic);
                assert!(args.emphasis.is_none());
                assert!(args.normal.is_none());
            }
            _ => panic!("expected Emit command"),
        }
    }

    #[test]
    fn parse_emit_with_args() {
        let cli = Cli::parse_from([
            "dm-probe",
            "emit",
            "--severity",
            "warning",
            "--label",
            "TRACE",
            "--message",
            "what?",
            "--code",
            "0x10",
            "--panic",
            "--emphasis",
            "1;2;3",
            "--normal",
            "",
        ]);
        match cli.command {
            Command::Emit(ref args) => {
                assert_eq!(args.severity, Some(SeverityArg::Warning));
                assert_eq!(args.label.as_deref(), Some("TRACE"));
                assert_eq!(args.message.as_deref(), Some("what?"));
                assert_eq!(args.code, Some(0x10));
                assert!(args.panic);
                assert_eq!(args.emphasis.as_deref(), Some("1;2;3"));
                assert_eq!(args.normal.as_deref(), Some(""));
            }
            _ => panic!("expected Emit command"),
        }
    }

    #[test]
    fn parse_emit_decimal_code() {
        let cli = Cli::parse_from(["dm-probe", "emit", "-c", "32"]);
        match cli.command {
            Command::Emit(ref args) => assert_eq!(args.code, Some(32)),
            _ => panic!("expected Emit command"),
        }
    }

    #[test]
    fn parse_emit_rejects_bad_code() {
        let result = Cli::try_parse_from(["dm-probe", "emit", "--code", "0xZZ"]);
        assert!(result.is_err());
    }

    #[test]
    fn call_subcommands_parse() {
        for name in ["check", "notice", "error", "probe", "warn", "panic"] {
            let cli = Cli::parse_from(["dm-probe", name, "hello", "there"]);
            let args = match cli.command {
                Command::Check(args)
                | Command::Notice(args)
                | Command::Error(args)
                | Command::Probe(args)
                | Command::Warn(args)
                | Command::Panic(args) => args,
                other => panic!("unexpected command {other:?}"),
            };
            assert_eq!(args.message, vec!["hello", "there"]);
        }
    }

    #[test]
    fn message_words_joined() {
        let cli = Cli::parse_from(["dm-probe", "notice", "hello", "there"]);
        match cli.command {
            Command::Notice(ref args) => assert_eq!(args.text().as_deref(), Some("hello there")),
            _ => panic!("expected Notice command"),
        }
        let cli = Cli::parse_from(["dm-probe", "warn"]);
        match cli.command {
            Command::Warn(ref args) => assert!(args.text().is_none()),
            _ => panic!("expected Warn command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["dm-probe", "--quiet", "--color", "never", "demo"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(matches!(cli.command, Command::Demo));
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["dm-probe", "demo"]);
        assert_eq!(cli.color, ColorChoice::Always);
        assert_eq!(cli.format, ReportFormat::Text);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_format_and_config() {
        let cli = Cli::parse_from([
            "dm-probe",
            "check",
            "x",
            "--format",
            "json",
            "--config",
            "/path/to/probe.toml",
        ]);
        assert_eq!(cli.format, ReportFormat::Json);
        assert_eq!(cli.config.as_deref(), Some("/path/to/probe.toml"));
    }

    #[test]
    fn parse_strict() {
        let cli = Cli::parse_from(["dm-probe", "parse", "--strict"]);
        match cli.command {
            Command::Parse(ref args) => assert!(args.strict),
            _ => panic!("expected Parse command"),
        }
    }

    #[test]
    fn severity_arg_conversion() {
        assert_eq!(Severity::from(SeverityArg::Informational), Severity::Informational);
        assert_eq!(Severity::from(SeverityArg::Warning), Severity::Warning);
        assert_eq!(Severity::from(SeverityArg::Error), Severity::Error);
    }

    #[test]
    fn log_levels() {
        assert_eq!(log_level(false, false), Level::WARN);
        assert_eq!(log_level(true, false), Level::ERROR);
        assert_eq!(log_level(false, true), Level::DEBUG);
        assert_eq!(log_level(true, true), Level::DEBUG);
    }
}
