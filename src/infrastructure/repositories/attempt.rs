//! JSON Attempt Repository
//!
//! Implements the AttemptRepository port. One record per app, stored next to
//! the app's documents as `attempt.json`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AttemptRecord, AttemptStage, StageOutcome};
use crate::domain::ports::{AttemptRepository, AttemptStoreError, FileSystem};
use crate::domain::value_objects::{AppName, AttemptToken};
use crate::infrastructure::fs::LocalFs;

const RECORD_FILE: &str = "attempt.json";

/// Attempt records under `<root>/<app>/attempt.json`
#[derive(Debug, Clone)]
pub struct JsonAttemptRepository {
    root: PathBuf,
    fs: LocalFs,
}

impl JsonAttemptRepository {
    /// `root` is the app-json namespace directory inside the data root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn record_path(&self, app: &AppName) -> PathBuf {
        self.root.join(app.as_str()).join(RECORD_FILE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum StageDto {
    Staged,
    Committed,
    PreReleased,
    Released,
    Deployed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AttemptRecordDto {
    token: String,
    stage: StageDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    outcome: Option<StageOutcome>,
    updated_at: DateTime<Utc>,
}

impl From<&AttemptRecord> for AttemptRecordDto {
    fn from(record: &AttemptRecord) -> Self {
        let (stage, outcome) = match record.stage() {
            AttemptStage::Staged(outcome) => (StageDto::Staged, Some(outcome)),
            AttemptStage::Committed => (StageDto::Committed, None),
            AttemptStage::PreReleased => (StageDto::PreReleased, None),
            AttemptStage::Released => (StageDto::Released, None),
            AttemptStage::Deployed => (StageDto::Deployed, None),
        };
        Self {
            token: record.token().to_string(),
            stage,
            outcome,
            updated_at: record.updated_at(),
        }
    }
}

impl AttemptRecordDto {
    fn into_record(self, path: &Path) -> Result<AttemptRecord, AttemptStoreError> {
        let token = AttemptToken::parse(&self.token).map_err(|e| AttemptStoreError::Corrupted {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let stage = match self.stage {
            StageDto::Staged => {
                AttemptStage::Staged(self.outcome.unwrap_or(StageOutcome::Missing))
            }
            StageDto::Committed => AttemptStage::Committed,
            StageDto::PreReleased => AttemptStage::PreReleased,
            StageDto::Released => AttemptStage::Released,
            StageDto::Deployed => AttemptStage::Deployed,
        };
        Ok(AttemptRecord::with_parts(token, stage, self.updated_at))
    }
}

impl AttemptRepository for JsonAttemptRepository {
    fn load(&self, app: &AppName) -> Result<Option<AttemptRecord>, AttemptStoreError> {
        let path = self.record_path(app);
        if !self.fs.exists(&path) {
            return Ok(None);
        }

        let content = self
            .fs
            .read(&path)
            .map_err(|e| AttemptStoreError::Access {
                path: path.clone(),
                message: e.to_string(),
            })?;
        let dto: AttemptRecordDto =
            serde_json::from_str(&content).map_err(|e| AttemptStoreError::Corrupted {
                path: path.clone(),
                message: e.to_string(),
            })?;
        dto.into_record(&path).map(Some)
    }

    fn save(&self, app: &AppName, record: &AttemptRecord) -> Result<(), AttemptStoreError> {
        let path = self.record_path(app);
        let content = serde_json::to_string_pretty(&AttemptRecordDto::from(record)).map_err(
            |e| AttemptStoreError::Access {
                path: path.clone(),
                message: e.to_string(),
            },
        )?;
        self.fs
            .write(&path, &content)
            .map_err(|e| AttemptStoreError::Access {
                path,
                message: e.to_string(),
            })
    }
}
