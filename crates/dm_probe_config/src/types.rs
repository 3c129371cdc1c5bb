//! Configuration types deserialized from `probe.toml`.
//!
//! Colors are kept as text here and checked by [`resolve`](crate::resolve),
//! so an empty `normal` can mean "same as emphasis".

use serde::Deserialize;
use std::collections::BTreeMap;

/// The top-level configuration parsed from `probe.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    /// Defaults for records emitted with `dm-probe emit`.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Per-severity color overrides, keyed by `informational`, `warning` or `error`.
    #[serde(default)]
    pub palette: BTreeMap<String, ColorOverride>,
}

/// Defaults for the base probe.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Category label.
    #[serde(default)]
    pub label: Option<String>,
    /// Message text.
    #[serde(default)]
    pub message: Option<String>,
    /// Emphasis color as `r;g;b`.
    #[serde(default)]
    pub emphasis: Option<String>,
    /// Normal color as `r;g;b`; empty means the emphasis color.
    #[serde(default)]
    pub normal: Option<String>,
}

/// Replacement colors for one severity.
///
/// An absent field keeps the built-in color. An empty `normal` reuses the
/// (possibly overridden) emphasis color.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorOverride {
    /// Emphasis color as `r;g;b`.
    #[serde(default)]
    pub emphasis: Option<String>,
    /// Normal color as `r;g;b`.
    #[serde(default)]
    pub normal: Option<String>,
}
