//! File System Implementations
//!
//! Concrete implementations of the FileSystem and DataDirectory ports.

mod data_dir;
mod local;

pub use data_dir::FsDataDirectory;
pub use local::LocalFs;
