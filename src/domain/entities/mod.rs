//! Domain Entities
//!
//! - `AppDocument` - The parsed subset of a committed `app.json`
//! - `DocumentState` - Staged / committed / absent document states
//! - `AttemptRecord` - Per-attempt deploy state machine

mod app_document;
mod attempt_record;
mod document_state;

pub use app_document::{AppDocument, Formation, PlatformScripts, Scripts, EMPTY_DOCUMENT};
pub use attempt_record::{AttemptRecord, AttemptStage, AttemptTransitionError};
pub use document_state::{CommitOutcome, DocumentState, StageOutcome};
