//! Staging path resolution
//!
//! Pure path arithmetic for the document lifecycle. Nothing here touches
//! the file system.
//!
//! Per app, inside `<namespace root>/<app>/`:
//!
//! ```text
//! app.json                  canonical (committed) document
//! app.json.<token>          staged document for one attempt
//! app.json.<token>.missing  marker: the attempt found no document
//! ```

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{AppName, AttemptToken, DocumentPath, DEFAULT_DOCUMENT};

/// File name of the canonical document inside an app's data directory
pub const CANONICAL_FILE: &str = "app.json";

const MISSING_SUFFIX: &str = "missing";

/// Root under which every app's document directory lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    root: PathBuf,
}

impl DocumentLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn app_dir(&self, app: &AppName) -> PathBuf {
        self.root.join(app.as_str())
    }

    pub fn canonical(&self, app: &AppName) -> PathBuf {
        self.app_dir(app).join(CANONICAL_FILE)
    }

    pub fn staging(&self, app: &AppName, token: &AttemptToken) -> StagingPaths {
        StagingPaths::new(&self.app_dir(app), token)
    }
}

/// Canonical and attempt-scoped paths for one app and attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingPaths {
    dir: PathBuf,
    canonical: PathBuf,
    attempt: PathBuf,
    missing_marker: PathBuf,
}

impl StagingPaths {
    pub fn new(app_dir: &Path, token: &AttemptToken) -> Self {
        let attempt_name = format!("{CANONICAL_FILE}.{token}");
        Self {
            dir: app_dir.to_path_buf(),
            canonical: app_dir.join(CANONICAL_FILE),
            missing_marker: app_dir.join(format!("{attempt_name}.{MISSING_SUFFIX}")),
            attempt: app_dir.join(attempt_name),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn canonical(&self) -> &Path {
        &self.canonical
    }

    pub fn attempt(&self) -> &Path {
        &self.attempt
    }

    pub fn missing_marker(&self) -> &Path {
        &self.missing_marker
    }

    /// File name prefix shared by every attempt file and marker.
    pub fn staging_prefix() -> String {
        format!("{CANONICAL_FILE}.")
    }
}

/// Where the document may come from for one deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocations {
    /// `<source-root>/<build-dir>/<path>` in an extracted source tree
    pub tree: PathBuf,
    /// `<build-dir>/<path>` inside a container image
    pub image: PathBuf,
    /// `<source-root>/app.json`, where downstream tools expect the document
    pub tree_default: PathBuf,
}

pub fn source_locations(
    source_root: &Path,
    build_dir: &str,
    document: &DocumentPath,
) -> SourceLocations {
    let mut relative = PathBuf::new();
    for segment in build_dir.split('/').filter(|s| !s.is_empty() && *s != ".") {
        relative.push(segment);
    }
    relative.push(document.as_str());

    SourceLocations {
        tree: source_root.join(&relative),
        image: relative,
        tree_default: source_root.join(DEFAULT_DOCUMENT),
    }
}
