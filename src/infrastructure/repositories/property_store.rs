//! Filesystem Property Store
//!
//! One file per property at `<root>/<namespace>/<app>/<key>`, holding the
//! raw value. Mutations hold an exclusive `fs2` lock on
//! `<root>/<namespace>/.lock` and values are written via temp file + rename.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::domain::ports::{FileSystem, PropertyError, PropertyResult, PropertyStore};
use crate::domain::value_objects::AppName;
use crate::infrastructure::fs::LocalFs;

const LOCK_FILE: &str = ".lock";

#[derive(Debug, Clone)]
pub struct FsPropertyStore {
    root: PathBuf,
    fs: LocalFs,
}

impl FsPropertyStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn app_dir(&self, namespace: &str, app: &AppName) -> PathBuf {
        self.root.join(namespace).join(app.as_str())
    }

    fn namespace_err(
        action: &'static str,
        namespace: &str,
        app: &AppName,
        e: impl std::fmt::Display,
    ) -> PropertyError {
        PropertyError::Namespace {
            action,
            namespace: namespace.to_string(),
            app: app.to_string(),
            message: e.to_string(),
        }
    }

    /// Run `f` while holding the namespace lock.
    fn locked<T>(
        &self,
        namespace: &str,
        app: &AppName,
        f: impl FnOnce() -> PropertyResult<T>,
    ) -> PropertyResult<T> {
        let ns_dir = self.root.join(namespace);
        fs::create_dir_all(&ns_dir).map_err(|e| Self::namespace_err("lock", namespace, app, e))?;

        let lock_file = fs::File::create(ns_dir.join(LOCK_FILE))
            .map_err(|e| Self::namespace_err("lock", namespace, app, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| Self::namespace_err("lock", namespace, app, e))?;

        let result = f();

        // closing the file releases the lock anyway
        if let Err(e) = lock_file.unlock() {
            debug!(namespace, error = %e, "unable to release property lock");
        }
        result
    }

    fn read_dir_values(
        &self,
        namespace: &str,
        app: &AppName,
    ) -> PropertyResult<BTreeMap<String, String>> {
        let dir = self.app_dir(namespace, app);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(Self::namespace_err("list", namespace, app, e)),
        };

        let mut values = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| Self::namespace_err("list", namespace, app, e))?;
            if !entry.path().is_file() {
                continue;
            }
            let key = entry.file_name().to_string_lossy().to_string();
            if key.starts_with('.') {
                continue;
            }
            let value = fs::read_to_string(entry.path())
                .map_err(|e| Self::namespace_err("list", namespace, app, e))?;
            values.insert(key, value);
        }
        Ok(values)
    }
}

impl PropertyStore for FsPropertyStore {
    fn setup(&self, namespace: &str) -> PropertyResult<()> {
        let dir = self.root.join(namespace);
        fs::create_dir_all(&dir).map_err(|e| PropertyError::Namespace {
            action: "set up",
            namespace: namespace.to_string(),
            app: String::new(),
            message: e.to_string(),
        })
    }

    fn get(&self, namespace: &str, app: &AppName, key: &str) -> PropertyResult<Option<String>> {
        let path = self.app_dir(namespace, app).join(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value.trim_end_matches('\n').to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PropertyError::Read {
                namespace: namespace.to_string(),
                app: app.to_string(),
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&self, namespace: &str, app: &AppName, key: &str, value: &str) -> PropertyResult<()> {
        let path = self.app_dir(namespace, app).join(key);
        self.locked(namespace, app, || {
            self.fs.write(&path, value).map_err(|e| PropertyError::Write {
                namespace: namespace.to_string(),
                app: app.to_string(),
                key: key.to_string(),
                message: e.to_string(),
            })
        })
    }

    fn delete(&self, namespace: &str, app: &AppName, key: &str) -> PropertyResult<()> {
        let path = self.app_dir(namespace, app).join(key);
        self.locked(namespace, app, || match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PropertyError::Write {
                namespace: namespace.to_string(),
                app: app.to_string(),
                key: key.to_string(),
                message: e.to_string(),
            }),
        })
    }

    fn destroy(&self, namespace: &str, app: &AppName) -> PropertyResult<()> {
        let dir = self.app_dir(namespace, app);
        self.locked(namespace, app, || match fs::remove_dir_all(&dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::namespace_err("destroy", namespace, app, e)),
        })
    }

    fn clone_app(&self, namespace: &str, old: &AppName, new: &AppName) -> PropertyResult<()> {
        self.locked(namespace, new, || {
            let values = self.read_dir_values(namespace, old)?;
            let target = self.app_dir(namespace, new);
            fs::create_dir_all(&target)
                .map_err(|e| Self::namespace_err("clone", namespace, new, e))?;
            for (key, value) in values {
                self.fs
                    .write(&target.join(&key), &value)
                    .map_err(|e| PropertyError::Write {
                        namespace: namespace.to_string(),
                        app: new.to_string(),
                        key,
                        message: e.to_string(),
                    })?;
            }
            Ok(())
        })
    }

    fn list(&self, namespace: &str, app: &AppName) -> PropertyResult<BTreeMap<String, String>> {
        self.read_dir_values(namespace, app)
    }
}
