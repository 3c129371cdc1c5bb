//! `dm-probe parse`: probe lines on stdin, one record per line on stdout.

use std::io::{self, BufRead, Write};

use dm_probe::{parse_line, ParsedLine};

use crate::{GlobalArgs, ParseArgs, ReportFormat};

/// Runs `dm-probe parse`.
///
/// Lines that are not probe lines are skipped with a warning. With
/// `--strict`, any skipped line makes the command exit with 1.
pub fn run(args: &ParseArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let rejected = scan(stdin.lock(), &mut out, global.format)?;
    if rejected > 0 {
        tracing::debug!(rejected, "some lines were not probe lines");
    }
    Ok(if args.strict && rejected > 0 { 1 } else { 0 })
}

/// Parses every line of `input`, writing records to `out`.
///
/// Returns the number of non-blank lines that could not be parsed.
pub fn scan<R: BufRead, W: Write>(input: R, out: &mut W, format: ReportFormat) -> io::Result<usize> {
    let mut rejected = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(parsed) => write_record(out, &parsed, format)?,
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping line");
                rejected += 1;
            }
        }
    }
    Ok(rejected)
}

fn write_record<W: Write>(out: &mut W, parsed: &ParsedLine, format: ReportFormat) -> io::Result<()> {
    match format {
        ReportFormat::Text => writeln!(
            out,
            "{}\t{}\t0x{:X}\t{}",
            parsed.label, parsed.timestamp, parsed.code, parsed.message
        ),
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, parsed)?;
            writeln!(out)
        }
    }
}
