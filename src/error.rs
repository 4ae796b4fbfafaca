//! Error types for appjson
//!
//! Uses `thiserror` for library errors. Each port carries its own error
//! enum; they all fold into [`AppJsonError`] at the use-case boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::AttemptTransitionError;
use crate::domain::ports::{
    ArtifactError, AttemptStoreError, DataDirError, FsError, PropertyError, ScaleError,
    ScriptError,
};

/// Result type alias for appjson operations
pub type AppJsonResult<T> = Result<T, AppJsonError>;

/// Main error type for appjson operations
#[derive(Error, Debug)]
pub enum AppJsonError {
    /// App name failed validation
    #[error("invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: &'static str },

    /// Attempt token failed validation
    #[error("invalid attempt token '{token}': only letters, digits, '-' and '_' are allowed")]
    InvalidAttempt { token: String },

    /// Configured document path is unusable
    #[error("invalid app.json path '{path}': {reason}")]
    InvalidDocumentPath { path: String, reason: &'static str },

    /// Property name not supported by `set`
    #[error("invalid property '{key}' (valid: appjson-path)")]
    InvalidProperty { key: String },

    /// Configuration file could not be read
    #[error("unable to read config {}: {source}", file.display())]
    ConfigRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for the expected schema
    #[error("invalid config {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Committed document is not valid JSON
    #[error("invalid app.json in {}: {message}", file.display())]
    InvalidDocument { file: PathBuf, message: String },

    /// Cleanup of prior attempt files failed
    #[error("unable to clear previous app.json staging files: {0}")]
    Cleanup(#[source] FsError),

    /// Copying the document out of the source tree failed
    #[error("Unable to extract app.json: {0}")]
    Extract(#[source] ArtifactError),

    /// Copying the document to the default location failed
    #[error("Unable to move app.json into place: {0}")]
    Relocate(#[source] ArtifactError),

    /// The committed document exists but could not be read
    #[error("Cannot read app.json file: {0}")]
    Read(#[source] FsError),

    /// Local file system failure
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Property store failure
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// Data directory failure
    #[error(transparent)]
    DataDir(#[from] DataDirError),

    /// Lifecycle script failure
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// Process scale reconciliation failure
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// Attempt ledger persistence failure
    #[error(transparent)]
    AttemptStore(#[from] AttemptStoreError),

    /// An entry point ran before the attempt reached its required stage
    #[error(transparent)]
    AttemptOutOfOrder(#[from] AttemptTransitionError),

    /// One or both teardown steps failed during app deletion
    #[error("unable to remove app-json state: {}", .0.join("; "))]
    Teardown(Vec<String>),
}
