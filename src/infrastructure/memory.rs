//! In-memory port implementations
//!
//! Stand-ins for the file-backed stores in unit tests. Clones share the
//! same underlying storage.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::entities::AttemptRecord;
use crate::domain::ports::{AttemptRepository, AttemptStoreError, PropertyResult, PropertyStore};
use crate::domain::value_objects::AppName;

type PropertyKey = (String, String, String);

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPropertyStore {
    values: Arc<Mutex<BTreeMap<PropertyKey, String>>>,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(namespace: &str, app: &AppName, key: &str) -> PropertyKey {
        (namespace.to_string(), app.to_string(), key.to_string())
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn setup(&self, _namespace: &str) -> PropertyResult<()> {
        Ok(())
    }

    fn get(&self, namespace: &str, app: &AppName, key: &str) -> PropertyResult<Option<String>> {
        Ok(guard(&self.values)
            .get(&Self::key(namespace, app, key))
            .cloned())
    }

    fn set(&self, namespace: &str, app: &AppName, key: &str, value: &str) -> PropertyResult<()> {
        guard(&self.values).insert(Self::key(namespace, app, key), value.to_string());
        Ok(())
    }

    fn delete(&self, namespace: &str, app: &AppName, key: &str) -> PropertyResult<()> {
        guard(&self.values).remove(&Self::key(namespace, app, key));
        Ok(())
    }

    fn destroy(&self, namespace: &str, app: &AppName) -> PropertyResult<()> {
        guard(&self.values).retain(|(ns, a, _), _| !(ns == namespace && a == app.as_str()));
        Ok(())
    }

    fn clone_app(&self, namespace: &str, old: &AppName, new: &AppName) -> PropertyResult<()> {
        let mut values = guard(&self.values);
        let copied: Vec<(PropertyKey, String)> = values
            .iter()
            .filter(|((ns, a, _), _)| ns == namespace && a == old.as_str())
            .map(|((ns, _, k), v)| ((ns.clone(), new.to_string(), k.clone()), v.clone()))
            .collect();
        values.extend(copied);
        Ok(())
    }

    fn list(&self, namespace: &str, app: &AppName) -> PropertyResult<BTreeMap<String, String>> {
        Ok(guard(&self.values)
            .iter()
            .filter(|((ns, a, _), _)| ns == namespace && a == app.as_str())
            .map(|((_, _, k), v)| (k.clone(), v.clone()))
            .collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAttemptRepository {
    records: Arc<Mutex<BTreeMap<String, AttemptRecord>>>,
}

impl MemoryAttemptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttemptRepository for MemoryAttemptRepository {
    fn load(&self, app: &AppName) -> Result<Option<AttemptRecord>, AttemptStoreError> {
        Ok(guard(&self.records).get(app.as_str()).cloned())
    }

    fn save(&self, app: &AppName, record: &AttemptRecord) -> Result<(), AttemptStoreError> {
        guard(&self.records).insert(app.to_string(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str) -> AppName {
        AppName::parse(name).unwrap()
    }

    #[test]
    fn clones_share_storage() {
        let store = MemoryPropertyStore::new();
        let other = store.clone();
        store.set("common", &app("web"), "deployed", "true").unwrap();
        assert_eq!(
            other.get("common", &app("web"), "deployed").unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn destroy_only_touches_one_app() {
        let store = MemoryPropertyStore::new();
        store.set("app-json", &app("a"), "k", "1").unwrap();
        store.set("app-json", &app("b"), "k", "2").unwrap();
        store.set("common", &app("a"), "k", "3").unwrap();

        store.destroy("app-json", &app("a")).unwrap();

        assert!(store.list("app-json", &app("a")).unwrap().is_empty());
        assert_eq!(store.list("app-json", &app("b")).unwrap().len(), 1);
        assert_eq!(store.list("common", &app("a")).unwrap().len(), 1);
    }

    #[test]
    fn clone_app_copies_namespace_values() {
        let store = MemoryPropertyStore::new();
        store.set("app-json", &app("a"), "heroku.postdeploy", "executed").unwrap();

        store.clone_app("app-json", &app("a"), &app("b")).unwrap();

        assert_eq!(
            store.get("app-json", &app("b"), "heroku.postdeploy").unwrap().as_deref(),
            Some("executed")
        );
        assert!(store.get("app-json", &app("a"), "heroku.postdeploy").unwrap().is_some());
    }
}
