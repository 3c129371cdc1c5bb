//! Reading probe lines back, for tooling that consumes standard error.
//!
//! Accepts both the colored form produced by [`AnsiRenderer`](crate::AnsiRenderer)
//! and the plain form produced by [`PlainRenderer`](crate::PlainRenderer).

use crate::code::EXIT_MASK;
use crate::color::{ColorError, Rgb, CSI, RESET};
use crate::probe::Style;
use serde::Serialize;

/// The fields recovered from one probe line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    /// Category label.
    pub label: String,
    /// Timestamp text, possibly empty.
    pub timestamp: String,
    /// Message between the single quotes.
    pub message: String,
    /// The printed code (exit bit already set).
    pub code: u32,
    /// Header style, if the line was colored.
    pub style: Option<Style>,
    /// Header color, if the line was colored.
    pub color: Option<Rgb>,
}

impl ParsedLine {
    /// The status a panicking probe with this code exited with.
    pub fn exit_status(&self) -> i32 {
        (self.code & EXIT_MASK) as i32
    }
}

/// Errors from [`parse_line`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line does not start with a probe header.
    #[error("not a probe line")]
    NotAProbe,

    /// The escape sequence prefix is not one a probe emits.
    #[error("unrecognised escape sequence '{0}'")]
    BadEscape(String),

    /// The header color is malformed.
    #[error("invalid header color: {0}")]
    Color(#[from] ColorError),

    /// A delimiter was not found.
    #[error("missing {0}")]
    Missing(&'static str),

    /// The trailing code is not hexadecimal.
    #[error("invalid code '{0}'")]
    InvalidCode(String),
}

/// Parses a single probe line.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);

    let Some(escaped) = line.strip_prefix(CSI) else {
        return parse_plain(line, None, None);
    };

    let end = escaped.find('m').ok_or(ParseError::Missing("escape terminator"))?;
    let params = &escaped[..end];
    let rest = &escaped[end + 1..];
    let style = params
        .get(..5)
        .and_then(Style::from_prefix)
        .ok_or_else(|| ParseError::BadEscape(params.to_string()))?;
    let color: Rgb = params[5..].parse()?;

    let reset = rest.find(RESET).ok_or(ParseError::Missing("reset sequence"))?;
    let plain = format!("{}{}", &rest[..reset], &rest[reset + RESET.len()..]);
    parse_plain(&plain, Some(style), Some(color))
}

fn parse_plain(
    line: &str,
    style: Option<Style>,
    color: Option<Rgb>,
) -> Result<ParsedLine, ParseError> {
    let body = line.strip_prefix(": ").ok_or(ParseError::NotAProbe)?;

    // The timestamp never contains " @ ", so the last one in the header ends the label.
    let open = body.find(" : '").ok_or(ParseError::Missing("opening quote"))?;
    let header = &body[..open];
    let body = &body[open + 4..];

    let at = header.rfind(" @ ").ok_or(ParseError::Missing("' @ ' separator"))?;
    let label = &header[..at];
    let timestamp = &header[at + 3..];

    let close = body.rfind("' 0x").ok_or(ParseError::Missing("closing quote"))?;
    let message = &body[..close];
    let hex = body[close + 4..].trim_end_matches(' ');
    let code =
        u32::from_str_radix(hex, 16).map_err(|_| ParseError::InvalidCode(hex.to_string()))?;

    Ok(ParsedLine {
        label: label.to_string(),
        timestamp: timestamp.to_string(),
        message: message.to_string(),
        code,
        style,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::Probe;
    use crate::renderer::{AnsiRenderer, PlainRenderer, ProbeRenderer};

    #[test]
    fn parse_ansi_line() {
        let probe = Probe::error("it's 'quoted'").with_code(0x28).with_panic(true).at("23:59:01");
        let parsed = parse_line(&AnsiRenderer.render(&probe)).unwrap();
        assert_eq!(parsed.label, "ERROR");
        assert_eq!(parsed.timestamp, "23:59:01");
        assert_eq!(parsed.message, "it's 'quoted'");
        assert_eq!(parsed.code, 0x29);
        assert_eq!(parsed.style, Some(Style::Panic));
        assert_eq!(parsed.color, Some(Rgb::new(204, 35, 120)));
        assert_eq!(parsed.exit_status(), 9);
    }

    #[test]
    fn parse_plain_line() {
        let probe = Probe::warning("help").at("00:00:00");
        let parsed = parse_line(&PlainRenderer.render(&probe)).unwrap();
        assert_eq!(parsed.label, "WARNS");
        assert_eq!(parsed.code, 0xB);
        assert_eq!(parsed.style, None);
        assert_eq!(parsed.color, None);
    }

    #[test]
    fn parse_empty_timestamp() {
        let parsed = parse_line(": PROBE @  : 'm' 0x11 ").unwrap();
        assert_eq!(parsed.timestamp, "");
        assert_eq!(parsed.code, 0x11);
    }

    #[test]
    fn rejects_other_text() {
        assert_eq!(parse_line("hello world"), Err(ParseError::NotAProbe));
        assert_eq!(
            parse_line("\x1b[1;31mred\x1b[m"),
            Err(ParseError::BadEscape("1;31".to_string()))
        );
        assert_eq!(
            parse_line("\x1b[é;2;1;2;3m: P @ t :\x1b[m 'm' 0x1 "),
            Err(ParseError::BadEscape("é;2;1;2;3".to_string()))
        );
        assert_eq!(
            parse_line(": PROBE @ 01:02:03 : 'm' 0xZZ "),
            Err(ParseError::InvalidCode("ZZ".to_string()))
        );
        assert_eq!(
            parse_line(": PROBE 01:02:03 : 'm' 0x1 "),
            Err(ParseError::Missing("' @ ' separator"))
        );
        assert_eq!(
            parse_line(": PROBE @ 01:02:03"),
            Err(ParseError::Missing("opening quote"))
        );
    }

    #[test]
    fn label_containing_separator() {
        let probe = Probe::new("A @ B", "m").at("12:00:00");
        let parsed = parse_line(&AnsiRenderer.render(&probe)).unwrap();
        assert_eq!(parsed.label, "A @ B");
        assert_eq!(parsed.timestamp, "12:00:00");

        let parsed = parse_line(&PlainRenderer.render(&probe.clone().at(""))).unwrap();
        assert_eq!(parsed.label, "A @ B");
        assert_eq!(parsed.timestamp, "");
        assert_eq!(parsed.message, "m");
    }

    #[test]
    fn rejects_bad_color() {
        let err = parse_line("\x1b[38;2;1;2m: P @ t :\x1b[m 'm' 0x1 \n").unwrap_err();
        assert_eq!(err, ParseError::Color(ColorError::ChannelCount(2)));
    }
}
