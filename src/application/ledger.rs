//! Attempt Ledger
//!
//! Thin wrapper over the attempt repository that applies the attempt state
//! machine: entry points check they are not running ahead of their attempt,
//! then record their completion.

use tracing::debug;

use crate::domain::entities::{AttemptRecord, AttemptStage, StageOutcome};
use crate::domain::ports::AttemptRepository;
use crate::domain::value_objects::{AppName, AttemptToken};
use crate::error::AppJsonResult;

#[derive(Debug, Clone)]
pub struct AttemptLedger<R: AttemptRepository> {
    repo: R,
}

impl<R: AttemptRepository> AttemptLedger<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Latest record for the app, whichever attempt it belongs to.
    pub fn current(&self, app: &AppName) -> AppJsonResult<Option<AttemptRecord>> {
        Ok(self.repo.load(app)?)
    }

    /// Staging always opens a new attempt.
    pub fn record_staged(
        &self,
        app: &AppName,
        token: &AttemptToken,
        outcome: StageOutcome,
    ) -> AppJsonResult<()> {
        let record = AttemptRecord::new(token.clone(), AttemptStage::Staged(outcome));
        self.repo.save(app, &record)?;
        Ok(())
    }

    /// Fail if `stage` would run before its prerequisite for this attempt.
    ///
    /// Records for other attempts are ignored: phases may run for attempts
    /// that never staged, such as rebuilds.
    pub fn check(&self, app: &AppName, token: &AttemptToken, stage: AttemptStage) -> AppJsonResult<()> {
        match self.repo.load(app)? {
            Some(record) if record.belongs_to(token) => Ok(record.check_ready(stage)?),
            Some(record) => {
                debug!(app = %app, previous = %record.token(), "ledger belongs to another attempt");
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Record that `stage` completed for this attempt.
    pub fn complete(&self, app: &AppName, token: &AttemptToken, stage: AttemptStage) -> AppJsonResult<()> {
        let record = match self.repo.load(app)? {
            Some(mut record) if record.belongs_to(token) => {
                record.advance_to(stage);
                record
            }
            _ => AttemptRecord::new(token.clone(), stage),
        };
        self.repo.save(app, &record)?;
        Ok(())
    }
}
