//! PropertyStore port - durable key/value storage per (namespace, app)

use std::collections::BTreeMap;

use crate::domain::value_objects::AppName;

/// Result type for property operations
pub type PropertyResult<T> = Result<T, PropertyError>;

#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("unable to read property {namespace}/{app}/{key}: {message}")]
    Read {
        namespace: String,
        app: String,
        key: String,
        message: String,
    },

    #[error("unable to write property {namespace}/{app}/{key}: {message}")]
    Write {
        namespace: String,
        app: String,
        key: String,
        message: String,
    },

    #[error("unable to {action} properties for {namespace}/{app}: {message}")]
    Namespace {
        action: &'static str,
        namespace: String,
        app: String,
        message: String,
    },
}

/// Abstract property store
///
/// Missing keys read as `None`; deleting or destroying something that does
/// not exist is not an error.
pub trait PropertyStore {
    /// Prepare storage for a namespace
    fn setup(&self, namespace: &str) -> PropertyResult<()>;

    fn get(&self, namespace: &str, app: &AppName, key: &str) -> PropertyResult<Option<String>>;

    fn set(&self, namespace: &str, app: &AppName, key: &str, value: &str) -> PropertyResult<()>;

    fn delete(&self, namespace: &str, app: &AppName, key: &str) -> PropertyResult<()>;

    /// Remove every property of `app` in `namespace`
    fn destroy(&self, namespace: &str, app: &AppName) -> PropertyResult<()>;

    /// Copy every property of `old` to `new` within `namespace`
    fn clone_app(&self, namespace: &str, old: &AppName, new: &AppName) -> PropertyResult<()>;

    fn list(&self, namespace: &str, app: &AppName) -> PropertyResult<BTreeMap<String, String>>;
}
