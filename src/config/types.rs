//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::property_keys::APP_JSON_NAMESPACE;
use crate::error::AppJsonResult;

use super::loader::{self, ConfigWarning};

/// Where deploy state lives on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root of per-plugin data directories
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,

    /// Root of the property store
    #[serde(default = "default_property_root")]
    pub property_root: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            property_root: default_property_root(),
        }
    }
}

fn default_data_root() -> PathBuf {
    PathBuf::from("/var/lib/appjson/data")
}

fn default_property_root() -> PathBuf {
    PathBuf::from("/var/lib/appjson/config")
}

/// How lifecycle scripts are executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScriptRunner {
    /// Inside a throwaway container built from the app's image
    #[default]
    Docker,
    /// Directly on the host through the configured shell
    Shell,
}

impl ScriptRunner {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "docker" => Some(ScriptRunner::Docker),
            "shell" => Some(ScriptRunner::Shell),
            _ => None,
        }
    }
}

/// Script execution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptsConfig {
    #[serde(default)]
    pub runner: ScriptRunner,

    #[serde(default = "default_docker_bin")]
    pub docker_bin: PathBuf,

    #[serde(default = "default_shell")]
    pub shell: PathBuf,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            runner: ScriptRunner::default(),
            docker_bin: default_docker_bin(),
            shell: default_shell(),
        }
    }
}

fn default_docker_bin() -> PathBuf {
    PathBuf::from("docker")
}

fn default_shell() -> PathBuf {
    PathBuf::from("/bin/sh")
}

/// Process scaling after release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScaleConfig {
    /// Command receiving `<app> <image> type=quantity...`; unset skips scaling
    #[serde(default)]
    pub command: Option<PathBuf>,
}

/// Image naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesConfig {
    /// Repository prefix for locally built app images
    #[serde(default = "default_repository")]
    pub repository: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
        }
    }
}

fn default_repository() -> String {
    "apps".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub scripts: ScriptsConfig,

    #[serde(default)]
    pub scale: ScaleConfig,

    #[serde(default)]
    pub images: ImagesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AppJsonResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AppJsonResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, `APPJSON_CONFIG`, the user config, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> AppJsonResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (APPJSON_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Directory holding every app's documents and attempt records
    pub fn document_root(&self) -> PathBuf {
        self.paths.data_root.join(APP_JSON_NAMESPACE)
    }
}
