//! Commit Manager
//!
//! Promotes an attempt's staged document to the canonical slot, or clears
//! the canonical document when the attempt recorded that it had none.
//! A second commit of the same attempt finds nothing to do.

use tracing::{debug, info};

use crate::domain::entities::{AppDocument, AttemptStage, CommitOutcome, DocumentState, StageOutcome};
use crate::domain::ports::{AttemptRepository, FileSystem};
use crate::domain::services::DocumentLayout;
use crate::domain::value_objects::{AppName, AttemptToken};
use crate::error::{AppJsonError, AppJsonResult};

use super::ledger::AttemptLedger;

pub struct CommitManager<FS, AR>
where
    FS: FileSystem,
    AR: AttemptRepository,
{
    layout: DocumentLayout,
    file_system: FS,
    ledger: AttemptLedger<AR>,
}

impl<FS, AR> CommitManager<FS, AR>
where
    FS: FileSystem,
    AR: AttemptRepository,
{
    pub fn new(layout: DocumentLayout, file_system: FS, attempts: AR) -> Self {
        Self {
            layout,
            file_system,
            ledger: AttemptLedger::new(attempts),
        }
    }

    pub fn commit(&self, app: &AppName, token: &AttemptToken) -> AppJsonResult<CommitOutcome> {
        let paths = self.layout.staging(app, token);

        let outcome = if self.file_system.exists(paths.attempt()) {
            self.file_system.rename(paths.attempt(), paths.canonical())?;
            CommitOutcome::Promoted
        } else if self.file_system.exists(paths.missing_marker()) {
            // canonical first: a failure here leaves the marker for a retry
            if self.file_system.exists(paths.canonical()) {
                self.file_system.remove(paths.canonical())?;
            }
            self.file_system.remove(paths.missing_marker())?;
            CommitOutcome::Cleared
        } else {
            debug!(app = %app, attempt = %token, "nothing staged");
            return Ok(CommitOutcome::Unchanged);
        };

        self.ledger.complete(app, token, AttemptStage::Committed)?;
        info!(app = %app, attempt = %token, outcome = %outcome, "committed app.json");
        Ok(outcome)
    }

    /// State of the app's document as seen by `token`.
    pub fn inspect(&self, app: &AppName, token: &AttemptToken) -> AppJsonResult<DocumentState> {
        let paths = self.layout.staging(app, token);

        if self.file_system.exists(paths.attempt()) {
            return Ok(DocumentState::Pending(StageOutcome::Staged));
        }
        if self.file_system.exists(paths.missing_marker()) {
            return Ok(DocumentState::Pending(StageOutcome::Missing));
        }
        if !self.file_system.exists(paths.canonical()) {
            return Ok(DocumentState::Absent);
        }

        let content = self
            .file_system
            .read(paths.canonical())
            .map_err(AppJsonError::Read)?;
        let document = AppDocument::parse(&content).map_err(|e| AppJsonError::InvalidDocument {
            file: paths.canonical().to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(DocumentState::Committed(document))
    }
}
