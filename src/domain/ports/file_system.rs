//! FileSystem port - abstraction over local file I/O
//!
//! Staging, promotion and content reads go through this trait so the
//! use cases can be exercised against a temporary directory.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error on a specific path
    Io { path: PathBuf, source: std::io::Error },
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the path an I/O error happened on.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file system interface
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a regular file exists
    fn exists(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Rename `from` onto `to`, replacing `to` if present
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Copy a file atomically (temp file in the destination dir, then rename)
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Create an empty file, creating parents as needed
    fn touch(&self, path: &Path) -> FsResult<()>;

    /// Files in `dir` whose name starts with `prefix` (missing dir ⇒ empty)
    fn list_prefixed(&self, dir: &Path, prefix: &str) -> FsResult<Vec<PathBuf>>;
}
