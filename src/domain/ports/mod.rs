//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_source;
pub mod attempt_repository;
pub mod data_directory;
pub mod deploy_query;
pub mod file_system;
pub mod process_scaler;
pub mod property_store;
pub mod script_executor;

pub use artifact_source::{ArtifactError, ArtifactResult, ArtifactSource};
pub use attempt_repository::{AttemptRepository, AttemptStoreError};
pub use data_directory::{DataDirError, DataDirResult, DataDirectory};
pub use deploy_query::DeployQuery;
pub use file_system::{FileSystem, FsError, FsResult};
pub use process_scaler::{ProcessScaler, ScaleError, ScaleResult};
pub use property_store::{PropertyError, PropertyResult, PropertyStore};
pub use script_executor::{ScriptError, ScriptExecutor, ScriptResult};
