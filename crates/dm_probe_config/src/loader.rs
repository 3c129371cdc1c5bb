//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::resolve::{resolve, ResolvedConfig};
use crate::types::ProbeConfig;
use std::path::Path;

/// File name looked up by [`discover_config`].
pub const CONFIG_FILE_NAME: &str = "probe.toml";

/// Loads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<ResolvedConfig, ConfigError> {
    tracing::debug!(path = %path.display(), "loading probe configuration");
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ResolvedConfig, ConfigError> {
    let config: ProbeConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    resolve(&config)
}

/// Loads `<dir>/probe.toml` if it exists, otherwise returns the built-in defaults.
pub fn discover_config(dir: &Path) -> Result<ResolvedConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        load_config(&path)
    } else {
        tracing::debug!(dir = %dir.display(), "no probe.toml found, using defaults");
        Ok(ResolvedConfig::default())
    }
}
