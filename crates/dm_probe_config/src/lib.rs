//! Parsing and validation of `probe.toml` configuration files.
//!
//! This crate reads the optional configuration file and produces a
//! [`ResolvedConfig`] holding the base probe defaults and per-severity palettes.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{discover_config, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::{resolve, ResolvedConfig};
pub use types::*;
