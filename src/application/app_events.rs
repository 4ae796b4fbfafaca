//! App event mirroring
//!
//! Keeps app-json properties and data directories in step with the app's
//! own lifecycle: install, create, clone, rename and delete.

use tracing::{info, warn};

use crate::domain::ports::{DataDirectory, PropertyStore};
use crate::domain::value_objects::property_keys::APP_JSON_NAMESPACE;
use crate::domain::value_objects::AppName;
use crate::error::{AppJsonError, AppJsonResult};

pub struct AppEvents<PR, DD>
where
    PR: PropertyStore,
    DD: DataDirectory,
{
    properties: PR,
    data: DD,
}

impl<PR, DD> AppEvents<PR, DD>
where
    PR: PropertyStore,
    DD: DataDirectory,
{
    pub fn new(properties: PR, data: DD) -> Self {
        Self { properties, data }
    }

    /// Prepare the namespace roots.
    pub fn install(&self) -> AppJsonResult<()> {
        self.properties.setup(APP_JSON_NAMESPACE)?;
        self.data.setup(APP_JSON_NAMESPACE)?;
        Ok(())
    }

    pub fn post_create(&self, app: &AppName) -> AppJsonResult<()> {
        self.data.create(APP_JSON_NAMESPACE, app)?;
        Ok(())
    }

    pub fn clone_setup(&self, old: &AppName, new: &AppName) -> AppJsonResult<()> {
        self.properties.clone_app(APP_JSON_NAMESPACE, old, new)?;
        self.data.clone_app(APP_JSON_NAMESPACE, old, new)?;
        info!(from = %old, to = %new, "cloned app-json state");
        Ok(())
    }

    pub fn rename_setup(&self, old: &AppName, new: &AppName) -> AppJsonResult<()> {
        self.properties.clone_app(APP_JSON_NAMESPACE, old, new)?;
        self.properties.destroy(APP_JSON_NAMESPACE, old)?;
        self.data.clone_app(APP_JSON_NAMESPACE, old, new)?;
        Ok(())
    }

    pub fn rename(&self, old: &AppName, new: &AppName) -> AppJsonResult<()> {
        self.data.migrate(APP_JSON_NAMESPACE, old, new)?;
        info!(from = %old, to = %new, "renamed app-json state");
        Ok(())
    }

    /// Remove everything held for the app. Both steps are always attempted.
    pub fn delete(&self, app: &AppName) -> AppJsonResult<()> {
        let mut failures = Vec::new();

        if let Err(e) = self.data.remove(APP_JSON_NAMESPACE, app) {
            warn!(app = %app, error = %e, "unable to remove data directory");
            failures.push(e.to_string());
        }
        if let Err(e) = self.properties.destroy(APP_JSON_NAMESPACE, app) {
            warn!(app = %app, error = %e, "unable to destroy properties");
            failures.push(e.to_string());
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(AppJsonError::Teardown(failures))
        }
    }
}
