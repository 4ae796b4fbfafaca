//! DataDirectory port - per-app data areas
//!
//! The engine keeps its canonical document, staging files and attempt
//! record inside `path(namespace, app)`.

use std::path::PathBuf;

use crate::domain::value_objects::AppName;

pub type DataDirResult<T> = Result<T, DataDirError>;

#[derive(Debug, thiserror::Error)]
#[error("unable to {action} data directory {}: {message}", path.display())]
pub struct DataDirError {
    pub action: &'static str,
    pub path: PathBuf,
    pub message: String,
}

pub trait DataDirectory {
    /// Prepare the namespace root
    fn setup(&self, namespace: &str) -> DataDirResult<()>;

    /// Location of an app's data directory (whether or not it exists)
    fn path(&self, namespace: &str, app: &AppName) -> PathBuf;

    fn create(&self, namespace: &str, app: &AppName) -> DataDirResult<()>;

    /// Copy `old`'s data into `new`, leaving `old` in place
    fn clone_app(&self, namespace: &str, old: &AppName, new: &AppName) -> DataDirResult<()>;

    /// Move `old`'s data into `new` and remove `old`
    fn migrate(&self, namespace: &str, old: &AppName, new: &AppName) -> DataDirResult<()>;

    fn remove(&self, namespace: &str, app: &AppName) -> DataDirResult<()>;
}
