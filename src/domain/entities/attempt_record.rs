//! Attempt record entity - the per-attempt deploy state machine
//!
//! Each deploy step runs in its own process. The record persists the last
//! step that completed for an attempt so the next entry point can check it
//! is being invoked in order.
//!
//! ```text
//! Staged(Staged | Missing)
//!     ↓ commit
//! Committed
//!     ↓ pre-release
//! PreReleased
//!     ↓ release
//! Released
//!     ↓ post-deploy
//! Deployed
//! ```
//!
//! Retrying a step is always allowed; running a step before its predecessor
//! completed for the same attempt is not.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::entities::StageOutcome;
use crate::domain::value_objects::AttemptToken;

/// Steps of a deployment attempt in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStage {
    Staged(StageOutcome),
    Committed,
    PreReleased,
    Released,
    Deployed,
}

impl AttemptStage {
    pub const fn order(self) -> u8 {
        match self {
            AttemptStage::Staged(_) => 0,
            AttemptStage::Committed => 1,
            AttemptStage::PreReleased => 2,
            AttemptStage::Released => 3,
            AttemptStage::Deployed => 4,
        }
    }

    /// The stage that must have completed before this one may run.
    pub const fn prerequisite(self) -> Option<AttemptStage> {
        match self {
            AttemptStage::Staged(_) => None,
            AttemptStage::Committed => Some(AttemptStage::Staged(StageOutcome::Missing)),
            AttemptStage::PreReleased => Some(AttemptStage::Committed),
            AttemptStage::Released => Some(AttemptStage::PreReleased),
            AttemptStage::Deployed => Some(AttemptStage::Released),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AttemptStage::Staged(_) => "staged",
            AttemptStage::Committed => "committed",
            AttemptStage::PreReleased => "pre-released",
            AttemptStage::Released => "released",
            AttemptStage::Deployed => "deployed",
        }
    }
}

impl std::fmt::Display for AttemptStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptStage::Staged(outcome) => write!(f, "staged ({outcome})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Raised when an entry point runs ahead of its attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("attempt {token} cannot enter {requested} from {current} (expected {required} first)")]
pub struct AttemptTransitionError {
    pub token: String,
    pub current: AttemptStage,
    pub requested: AttemptStage,
    pub required: AttemptStage,
}

/// Last known stage of the most recent attempt for an app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    token: AttemptToken,
    stage: AttemptStage,
    updated_at: DateTime<Utc>,
}

impl AttemptRecord {
    /// A record for an attempt first seen at `stage`.
    pub fn new(token: AttemptToken, stage: AttemptStage) -> Self {
        Self {
            token,
            stage,
            updated_at: Utc::now(),
        }
    }

    /// Rebuild a record loaded from storage.
    pub fn with_parts(token: AttemptToken, stage: AttemptStage, updated_at: DateTime<Utc>) -> Self {
        Self {
            token,
            stage,
            updated_at,
        }
    }

    pub fn token(&self) -> &AttemptToken {
        &self.token
    }

    pub fn stage(&self) -> AttemptStage {
        self.stage
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn belongs_to(&self, token: &AttemptToken) -> bool {
        &self.token == token
    }

    /// Check that `requested` may run now.
    pub fn check_ready(&self, requested: AttemptStage) -> Result<(), AttemptTransitionError> {
        match requested.prerequisite() {
            Some(required) if self.stage.order() < required.order() => {
                Err(AttemptTransitionError {
                    token: self.token.to_string(),
                    current: self.stage,
                    requested,
                    required,
                })
            }
            _ => Ok(()),
        }
    }

    /// Record that `stage` completed. Retries of earlier steps never move
    /// the record backwards.
    pub fn advance_to(&mut self, stage: AttemptStage) {
        if stage.order() >= self.stage.order() {
            self.stage = stage;
        }
        self.updated_at = Utc::now();
    }
}
