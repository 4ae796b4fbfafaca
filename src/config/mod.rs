//! Configuration module for appjson
//!
//! Resolution order:
//! 1. Environment variables (APPJSON_*)
//! 2. Config file from `--config` or `APPJSON_CONFIG`
//! 3. User config (`<config dir>/appjson/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, resolve_path, ConfigWarning, CONFIG_ENV};
pub use types::{Config, ImagesConfig, PathsConfig, ScaleConfig, ScriptRunner, ScriptsConfig};
