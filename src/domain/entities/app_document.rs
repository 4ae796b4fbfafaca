//! App document entity - the parsed subset of `app.json`
//!
//! Only `scripts` and `formation` matter to the engine. Everything else is
//! kept verbatim in the raw text and never interpreted.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::value_objects::LifecyclePhase;

/// Literal emitted when no committed document exists.
pub const EMPTY_DOCUMENT: &str = "{}";

/// Deploy scripts declared by the app
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Scripts {
    #[serde(default)]
    pub dokku: PlatformScripts,
    /// Heroku-style first deploy script
    #[serde(default)]
    pub postdeploy: Option<String>,
    #[serde(default)]
    pub release: Option<String>,
}

/// Platform-scoped scripts under `scripts.dokku`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlatformScripts {
    #[serde(default)]
    pub predeploy: Option<String>,
    #[serde(default)]
    pub postdeploy: Option<String>,
    #[serde(default)]
    pub release: Option<String>,
}

/// Per-process-type formation entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Formation {
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub max_parallel: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct DocumentFields {
    #[serde(default)]
    scripts: Scripts,
    #[serde(default)]
    formation: BTreeMap<String, Formation>,
}

/// A committed configuration document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDocument {
    raw: String,
    scripts: Scripts,
    formation: BTreeMap<String, Formation>,
}

impl AppDocument {
    /// Parse document text. Blank text is treated as `{}`.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let trimmed = raw.trim();
        let text = if trimmed.is_empty() {
            EMPTY_DOCUMENT
        } else {
            trimmed
        };
        let fields: DocumentFields = serde_json::from_str(text)?;
        Ok(Self {
            raw: text.to_string(),
            scripts: fields.scripts,
            formation: fields.formation,
        })
    }

    pub fn empty() -> Self {
        Self {
            raw: EMPTY_DOCUMENT.to_string(),
            scripts: Scripts::default(),
            formation: BTreeMap::new(),
        }
    }

    /// Trimmed document text as committed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn scripts(&self) -> &Scripts {
        &self.scripts
    }

    pub fn formation(&self) -> &BTreeMap<String, Formation> {
        &self.formation
    }

    /// Command declared for a lifecycle phase, if any.
    ///
    /// `release` prefers the platform-scoped entry and falls back to the
    /// top-level one; `heroku.postdeploy` maps to the top-level `postdeploy`.
    pub fn script_for(&self, phase: LifecyclePhase) -> Option<&str> {
        let script = match phase {
            LifecyclePhase::Predeploy => self.scripts.dokku.predeploy.as_deref(),
            LifecyclePhase::Release => self
                .scripts
                .dokku
                .release
                .as_deref()
                .or(self.scripts.release.as_deref()),
            LifecyclePhase::HerokuPostdeploy => self.scripts.postdeploy.as_deref(),
            LifecyclePhase::Postdeploy => self.scripts.dokku.postdeploy.as_deref(),
        };
        script.map(str::trim).filter(|s| !s.is_empty())
    }

    /// How many processes of `process_type` may be deployed in parallel.
    pub fn deploy_parallelism(&self, process_type: &str) -> usize {
        self.formation
            .get(process_type)
            .and_then(|f| f.max_parallel)
            .filter(|&n| n > 0)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(1)
    }
}
