//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and data directories
//! - `repositories/` - Property store, attempt records, deploy queries
//! - `adapters/` - Docker image copies, script execution, process scaling
//! - `memory` - In-process port implementations for unit tests

pub mod adapters;
pub mod fs;
#[cfg(test)]
pub mod memory;
pub mod repositories;

// Re-export for convenience
pub use adapters::{CommandScaler, CommandScriptExecutor, DockerImageSource};
pub use fs::{FsDataDirectory, LocalFs};
#[cfg(test)]
pub use memory::{MemoryAttemptRepository, MemoryPropertyStore};
pub use repositories::{FsPropertyStore, JsonAttemptRepository, PropertyDeployQuery};
