//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes and copies go through a temp file in the destination directory
/// followed by a rename, so readers never observe a partially written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
        tmp.write_all(content).map_err(|e| FsError::at(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| FsError::at(tmp.path(), e))?;
        tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.write_bytes(path, content.as_bytes())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::at(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        std::fs::rename(from, to).map_err(|e| FsError::at(from, e))
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        let content = std::fs::read(from).map_err(|e| FsError::at(from, e))?;
        self.write_bytes(to, &content)
    }

    fn touch(&self, path: &Path) -> FsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;
        }
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(|_| ())
            .map_err(|e| FsError::at(path, e))
    }

    fn list_prefixed(&self, dir: &Path, prefix: &str) -> FsResult<Vec<PathBuf>> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(FsError::at(dir, e)),
        };

        let mut matches = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::at(dir, e))?;
            let name = entry.file_name();
            if name.to_string_lossy().starts_with(prefix) {
                matches.push(entry.path());
            }
        }
        matches.sort();
        Ok(matches)
    }
}
