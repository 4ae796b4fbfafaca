//! Configured document path value object
//!
//! The path of `app.json` relative to the artifact root (or build directory).

use std::path::{Component, Path};

use crate::error::{AppJsonError, AppJsonResult};

/// Default document file name at the artifact root
pub const DEFAULT_DOCUMENT: &str = "app.json";

/// Relative location of the document inside an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPath(String);

impl DocumentPath {
    /// Parse a configured path. Leading/trailing `/` are trimmed and an empty
    /// value falls back to [`DEFAULT_DOCUMENT`].
    pub fn parse(raw: &str) -> AppJsonResult<Self> {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let escapes = Path::new(trimmed)
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(AppJsonError::InvalidDocumentPath {
                path: raw.to_string(),
                reason: "must stay inside the artifact",
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the artifact-root default location.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_DOCUMENT
    }
}

impl Default for DocumentPath {
    fn default() -> Self {
        Self(DEFAULT_DOCUMENT.to_string())
    }
}

impl std::fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
