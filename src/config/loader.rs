//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AppJsonError, AppJsonResult};

use super::types::{Config, ScriptRunner};

/// Env var naming an explicit config file
pub const CONFIG_ENV: &str = "APPJSON_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AppJsonResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| AppJsonError::ConfigRead {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AppJsonError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config file to read, if any.
///
/// An explicit path (flag or `APPJSON_CONFIG`) is always returned so a typo
/// surfaces as an error; the user config is only returned when it exists.
pub fn resolve_path(
    explicit: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env(CONFIG_ENV).filter(|p| !p.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("appjson/config.toml"))
        .filter(|path| path.is_file())
}

/// Load from an explicit path, `APPJSON_CONFIG`, the user config, or defaults,
/// then apply environment overrides.
pub fn load_or_default(explicit: Option<&Path>) -> AppJsonResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match resolve_path(explicit, |name| std::env::var(name).ok()) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => {
            debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (APPJSON_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable source.
pub fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    let var = |name: &str| var(name).filter(|v| !v.trim().is_empty());

    if let Some(root) = var("APPJSON_DATA_ROOT") {
        config.paths.data_root = PathBuf::from(root);
    }

    if let Some(root) = var("APPJSON_PROPERTY_ROOT") {
        config.paths.property_root = PathBuf::from(root);
    }

    if let Some(runner) = var("APPJSON_SCRIPT_RUNNER") {
        match ScriptRunner::parse(&runner) {
            Some(runner) => config.scripts.runner = runner,
            None => debug!(value = %runner, "ignoring unknown APPJSON_SCRIPT_RUNNER"),
        }
    }

    if let Some(bin) = var("APPJSON_DOCKER_BIN") {
        config.scripts.docker_bin = PathBuf::from(bin);
    }

    if let Some(repository) = var("APPJSON_IMAGE_REPOSITORY") {
        config.images.repository = repository;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|idx| idx + 1)
}

/// Known table and field names, used to suggest a fix for a typo.
const KNOWN_KEYS: &[&str] = &[
    "paths",
    "data_root",
    "property_root",
    "scripts",
    "runner",
    "docker_bin",
    "shell",
    "scale",
    "command",
    "images",
    "repository",
];

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (*known, edit_distance(unknown, known)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(known, _)| known.to_string())
}

fn edit_distance(from: &str, to: &str) -> usize {
    let to: Vec<char> = to.chars().collect();
    let mut row: Vec<usize> = (0..=to.len()).collect();

    for (i, fc) in from.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, tc) in to.iter().enumerate() {
            let substitution = diagonal + usize::from(fc != *tc);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[to.len()]
}
