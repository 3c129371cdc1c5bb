//! Resolution: validating colors and merging overrides onto the built-in presets.

use crate::error::ConfigError;
use crate::types::{ColorOverride, ProbeConfig};
use dm_probe::{Palette, Probe, Rgb, Severity, DEFAULT_EMPHASIS, DEFAULT_LABEL, DEFAULT_MESSAGE};
use std::collections::BTreeMap;

/// A validated configuration with every color parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Default label for the base probe.
    pub label: String,
    /// Default message for the base probe.
    pub message: String,
    /// Default emphasis color for the base probe.
    pub emphasis: Rgb,
    /// Default normal color for the base probe; `None` means the emphasis color.
    pub normal: Option<Rgb>,
    palettes: BTreeMap<Severity, Palette>,
}

impl ResolvedConfig {
    /// The palette for `severity`, after overrides.
    pub fn palette(&self, severity: Severity) -> Palette {
        self.palettes
            .get(&severity)
            .copied()
            .unwrap_or_else(|| severity.palette())
    }

    /// A base probe carrying the configured label and colors.
    ///
    /// `message` replaces the configured default message when given.
    pub fn base_probe(&self, message: Option<String>) -> Probe {
        Probe::new(self.label.clone(), message.unwrap_or_else(|| self.message.clone()))
            .with_colors(self.emphasis, self.normal)
    }

    /// A severity preset with the configured palette.
    pub fn severity_probe(&self, severity: Severity, message: impl Into<String>) -> Probe {
        Probe::from_severity(severity, message).with_palette(self.palette(severity))
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            emphasis: DEFAULT_EMPHASIS,
            normal: None,
            palettes: BTreeMap::new(),
        }
    }
}

/// Validates `config` and merges it over the built-in defaults.
pub fn resolve(config: &ProbeConfig) -> Result<ResolvedConfig, ConfigError> {
    let mut resolved = ResolvedConfig::default();
    let defaults = &config.defaults;

    if let Some(label) = &defaults.label {
        if label.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "defaults.label must not be blank".to_string(),
            ));
        }
        resolved.label = label.clone();
    }
    if let Some(message) = &defaults.message {
        resolved.message = message.clone();
    }
    if let Some(emphasis) = &defaults.emphasis {
        resolved.emphasis =
            color("defaults.emphasis", emphasis)?.unwrap_or(DEFAULT_EMPHASIS);
    }
    if let Some(normal) = &defaults.normal {
        resolved.normal = color("defaults.normal", normal)?;
    }

    for (key, overrides) in &config.palette {
        let severity =
            Severity::from_name(key).ok_or_else(|| ConfigError::UnknownSeverity(key.clone()))?;
        resolved.palettes.insert(severity, merge(severity, overrides)?);
    }

    Ok(resolved)
}

fn merge(severity: Severity, overrides: &ColorOverride) -> Result<Palette, ConfigError> {
    let mut palette = severity.palette();
    if let Some(emphasis) = &overrides.emphasis {
        let field = format!("palette.{severity}.emphasis");
        palette.emphasis = color(&field, emphasis)?.unwrap_or(palette.emphasis);
    }
    if let Some(normal) = &overrides.normal {
        let field = format!("palette.{severity}.normal");
        palette.normal = color(&field, normal)?.unwrap_or(palette.emphasis);
    }
    Ok(palette)
}

fn color(field: &str, text: &str) -> Result<Option<Rgb>, ConfigError> {
    Rgb::parse_optional(text).map_err(|source| ConfigError::InvalidColor {
        field: field.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DefaultsConfig;

    fn overrides(emphasis: Option<&str>, normal: Option<&str>) -> ColorOverride {
        ColorOverride {
            emphasis: emphasis.map(str::to_string),
            normal: normal.map(str::to_string),
        }
    }

    #[test]
    fn empty_config_matches_builtins() {
        let resolved = resolve(&ProbeConfig::default()).unwrap();
        assert_eq!(resolved, ResolvedConfig::default());
        for severity in Severity::ALL {
            assert_eq!(resolved.palette(severity), severity.palette());
        }
    }

    #[test]
    fn emphasis_override_keeps_builtin_normal() {
        let palette = merge(Severity::Warning, &overrides(Some("1;2;3"), None)).unwrap();
        assert_eq!(palette.emphasis, Rgb::new(1, 2, 3));
        assert_eq!(palette.normal, Rgb::new(240, 120, 240));
    }

    #[test]
    fn empty_normal_follows_emphasis() {
        let palette = merge(Severity::Error, &overrides(Some("1;2;3"), Some(""))).unwrap();
        assert_eq!(palette.normal, Rgb::new(1, 2, 3));
    }

    #[test]
    fn invalid_override_names_field() {
        let err = merge(Severity::Error, &overrides(None, Some("300;0;0"))).unwrap_err();
        assert_eq!(
            format!("{err}"),
            "invalid color for palette.error.normal: invalid color channel '300'"
        );
    }

    #[test]
    fn defaults_apply_to_base_probe() {
        let config = ProbeConfig {
            defaults: DefaultsConfig {
                label: Some("TRACE".to_string()),
                message: Some("hi".to_string()),
                emphasis: Some("10;20;30".to_string()),
                normal: Some(String::new()),
            },
            palette: BTreeMap::new(),
        };
        let resolved = resolve(&config).unwrap();
        let probe = resolved.base_probe(None);
        assert_eq!(probe.label(), "TRACE");
        assert_eq!(probe.message(), "hi");
        assert_eq!(probe.normal(), Rgb::new(10, 20, 30));

        let probe = resolved.base_probe(Some("override".to_string()));
        assert_eq!(probe.message(), "override");
    }

    #[test]
    fn blank_label_rejected() {
        let config = ProbeConfig {
            defaults: DefaultsConfig {
                label: Some("  ".to_string()),
                ..DefaultsConfig::default()
            },
            palette: BTreeMap::new(),
        };
        assert!(matches!(resolve(&config), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn unknown_severity_rejected() {
        let mut palette = BTreeMap::new();
        palette.insert("fatal".to_string(), overrides(Some("1;2;3"), None));
        let err = resolve(&ProbeConfig {
            defaults: DefaultsConfig::default(),
            palette,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSeverity(ref key) if key == "fatal"));
    }

    #[test]
    fn severity_probe_uses_override() {
        let mut palette = BTreeMap::new();
        palette.insert(
            "informational".to_string(),
            overrides(Some("9;9;9"), Some("8;8;8")),
        );
        let resolved = resolve(&ProbeConfig {
            defaults: DefaultsConfig::default(),
            palette,
        })
        .unwrap();
        let probe = resolved.severity_probe(Severity::Informational, "m");
        assert_eq!(probe.emphasis(), Rgb::new(9, 9, 9));
        assert_eq!(probe.normal(), Rgb::new(8, 8, 8));
        assert_eq!(probe.label(), "LOGGS");
    }
}
