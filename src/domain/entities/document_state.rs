//! Document lifecycle states
//!
//! Sentinel files on disk map onto these enums so callers handle every case.

use serde::{Deserialize, Serialize};

use super::AppDocument;

/// What a staging run left behind for its attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageOutcome {
    /// The attempt-scoped document was written
    Staged,
    /// No document exists for this attempt; a missing marker was written
    Missing,
}

/// What a commit did to the canonical document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The staged document replaced the canonical one
    Promoted,
    /// The attempt had no document, so the canonical one was removed
    Cleared,
    /// Nothing was staged for this attempt
    Unchanged,
}

/// Visible state of an app's document from the point of view of one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentState {
    /// Staged for this attempt but not yet committed
    Pending(StageOutcome),
    /// A canonical document is in place
    Committed(AppDocument),
    /// No canonical document and nothing pending
    Absent,
}

impl DocumentState {
    pub fn is_pending(&self) -> bool {
        matches!(self, DocumentState::Pending(_))
    }

    pub fn committed(&self) -> Option<&AppDocument> {
        match self {
            DocumentState::Committed(doc) => Some(doc),
            _ => None,
        }
    }
}

impl std::fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageOutcome::Staged => write!(f, "staged"),
            StageOutcome::Missing => write!(f, "missing"),
        }
    }
}

impl std::fmt::Display for CommitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitOutcome::Promoted => write!(f, "promoted"),
            CommitOutcome::Cleared => write!(f, "cleared"),
            CommitOutcome::Unchanged => write!(f, "unchanged"),
        }
    }
}
