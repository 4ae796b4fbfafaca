//! Filesystem-backed data directories
//!
//! Layout: `<root>/<namespace>/<app>/`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::domain::ports::{DataDirError, DataDirResult, DataDirectory};
use crate::domain::value_objects::AppName;

#[derive(Debug, Clone)]
pub struct FsDataDirectory {
    root: PathBuf,
}

impl FsDataDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn err(action: &'static str, path: &Path, e: impl std::fmt::Display) -> DataDirError {
        DataDirError {
            action,
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    }

    /// Copy every file under `from` into `to`, keeping relative paths.
    fn copy_tree(&self, from: &Path, to: &Path) -> DataDirResult<()> {
        std::fs::create_dir_all(to).map_err(|e| Self::err("create", to, e))?;

        let walker = WalkBuilder::new(from)
            .standard_filters(false)
            .hidden(false)
            .follow_links(false)
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| Self::err("read", from, e))?;
            let path = entry.path();
            let relative = match path.strip_prefix(from) {
                Ok(rel) if !rel.as_os_str().is_empty() => rel,
                _ => continue,
            };
            let target = to.join(relative);

            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if is_dir {
                std::fs::create_dir_all(&target).map_err(|e| Self::err("create", &target, e))?;
            } else {
                std::fs::copy(path, &target).map_err(|e| Self::err("copy", &target, e))?;
            }
        }
        Ok(())
    }
}

impl DataDirectory for FsDataDirectory {
    fn setup(&self, namespace: &str) -> DataDirResult<()> {
        let dir = self.root.join(namespace);
        std::fs::create_dir_all(&dir).map_err(|e| Self::err("set up", &dir, e))
    }

    fn path(&self, namespace: &str, app: &AppName) -> PathBuf {
        self.root.join(namespace).join(app.as_str())
    }

    fn create(&self, namespace: &str, app: &AppName) -> DataDirResult<()> {
        let dir = self.path(namespace, app);
        std::fs::create_dir_all(&dir).map_err(|e| Self::err("create", &dir, e))
    }

    fn clone_app(&self, namespace: &str, old: &AppName, new: &AppName) -> DataDirResult<()> {
        let from = self.path(namespace, old);
        let to = self.path(namespace, new);
        if !from.is_dir() {
            debug!(app = %old, "no data directory to clone");
            return self.create(namespace, new);
        }
        self.copy_tree(&from, &to)
    }

    fn migrate(&self, namespace: &str, old: &AppName, new: &AppName) -> DataDirResult<()> {
        let from = self.path(namespace, old);
        let to = self.path(namespace, new);
        if !from.is_dir() {
            return Ok(());
        }

        if !to.exists() {
            return std::fs::rename(&from, &to).map_err(|e| Self::err("migrate", &from, e));
        }

        self.copy_tree(&from, &to)?;
        std::fs::remove_dir_all(&from).map_err(|e| Self::err("remove", &from, e))
    }

    fn remove(&self, namespace: &str, app: &AppName) -> DataDirResult<()> {
        let dir = self.path(namespace, app);
        match std::fs::remove_dir_all(&dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::err("remove", &dir, e)),
        }
    }
}
