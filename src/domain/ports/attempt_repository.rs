//! AttemptRepository port - persistence for the attempt state machine

use std::path::PathBuf;

use crate::domain::entities::AttemptRecord;
use crate::domain::value_objects::AppName;

#[derive(Debug, thiserror::Error)]
pub enum AttemptStoreError {
    #[error("unable to access attempt record {}: {message}", path.display())]
    Access { path: PathBuf, message: String },

    #[error(
        "attempt record corrupted: {}\n  → Fix: remove it; the next stage run recreates it\n  → Details: {message}",
        path.display()
    )]
    Corrupted { path: PathBuf, message: String },
}

pub trait AttemptRepository {
    /// Most recent attempt record for the app, if any
    fn load(&self, app: &AppName) -> Result<Option<AttemptRecord>, AttemptStoreError>;

    fn save(&self, app: &AppName, record: &AttemptRecord) -> Result<(), AttemptStoreError>;
}
