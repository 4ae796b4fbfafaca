//! Content queries over the committed document

use tracing::debug;

use crate::domain::entities::{AppDocument, EMPTY_DOCUMENT};
use crate::domain::ports::FileSystem;
use crate::domain::services::DocumentLayout;
use crate::domain::value_objects::AppName;
use crate::error::{AppJsonError, AppJsonResult};

pub struct ContentQuery<FS: FileSystem> {
    layout: DocumentLayout,
    file_system: FS,
}

impl<FS: FileSystem> ContentQuery<FS> {
    pub fn new(layout: DocumentLayout, file_system: FS) -> Self {
        Self {
            layout,
            file_system,
        }
    }

    /// Committed document text, or `{}` when there is none.
    pub fn get_content(&self, app: &AppName) -> AppJsonResult<String> {
        let path = self.layout.canonical(app);
        if !self.file_system.exists(&path) {
            debug!(app = %app, "no committed app.json");
            return Ok(EMPTY_DOCUMENT.to_string());
        }

        let content = self.file_system.read(&path).map_err(AppJsonError::Read)?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(EMPTY_DOCUMENT.to_string());
        }
        Ok(trimmed.to_string())
    }

    /// Parsed committed document, if any.
    pub fn committed_document(&self, app: &AppName) -> AppJsonResult<Option<AppDocument>> {
        let path = self.layout.canonical(app);
        if !self.file_system.exists(&path) {
            return Ok(None);
        }
        let content = self.file_system.read(&path).map_err(AppJsonError::Read)?;
        AppDocument::parse(&content)
            .map(Some)
            .map_err(|e| AppJsonError::InvalidDocument {
                file: path,
                message: e.to_string(),
            })
    }

    /// Maximum parallel deploys for `process_type`, at least 1.
    pub fn deploy_parallelism(&self, app: &AppName, process_type: &str) -> AppJsonResult<usize> {
        Ok(self
            .committed_document(app)?
            .map_or(1, |doc| doc.deploy_parallelism(process_type)))
    }
}
