//! Errors from reading and validating `probe.toml`.

use dm_probe::ColorError;

/// Why a `probe.toml` could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid TOML or has unknown keys.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A color value is not an `r;g;b` triple.
    #[error("invalid color for {field}: {source}")]
    InvalidColor {
        /// Dotted path of the offending key, e.g. `palette.error.normal`.
        field: String,
        /// What was wrong with the value.
        #[source]
        source: ColorError,
    },

    /// A `[palette.<name>]` table names no severity.
    #[error("unknown severity '{0}' in palette")]
    UnknownSeverity(String),

    /// Any other rejected value, such as a blank label.
    #[error("validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_invalid_color() {
        let err = ConfigError::InvalidColor {
            field: "palette.error.normal".to_string(),
            source: ColorError::ChannelCount(2),
        };
        assert!(format!("{err}").starts_with("invalid color for palette.error.normal: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn display_unknown_severity() {
        let err = ConfigError::UnknownSeverity("fatal".to_string());
        assert_eq!(format!("{err}"), "unknown severity 'fatal' in palette");
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected '=' at line 3".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse configuration: expected '=' at line 3"
        );
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::IoError(io_err);
        assert!(format!("{err}").starts_with("failed to read configuration:"));
    }
}
