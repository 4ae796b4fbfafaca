//! Settings Use Case
//!
//! `set` and `report` for the engine's own properties. Only `appjson-path`
//! is configurable; it may be set per app or globally.

use tracing::info;

use crate::domain::ports::PropertyStore;
use crate::domain::value_objects::property_keys::{APPJSON_PATH_KEY, APP_JSON_NAMESPACE};
use crate::domain::value_objects::{AppName, DocumentPath};
use crate::error::{AppJsonError, AppJsonResult};

/// Effective `appjson-path` values for one app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsReport {
    pub appjson_path: String,
    pub global_appjson_path: String,
    pub computed_appjson_path: String,
}

impl SettingsReport {
    /// `(label, value)` rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 3] {
        [
            ("appjson-path", self.appjson_path.as_str()),
            ("global-appjson-path", self.global_appjson_path.as_str()),
            ("computed-appjson-path", self.computed_appjson_path.as_str()),
        ]
    }
}

pub struct SettingsUseCase<PR: PropertyStore> {
    properties: PR,
}

impl<PR: PropertyStore> SettingsUseCase<PR> {
    pub fn new(properties: PR) -> Self {
        Self { properties }
    }

    /// Set `key` for an app (or [`AppName::global`]). An empty value unsets it.
    pub fn set(&self, app: &AppName, key: &str, value: &str) -> AppJsonResult<()> {
        if key != APPJSON_PATH_KEY {
            return Err(AppJsonError::InvalidProperty {
                key: key.to_string(),
            });
        }

        let value = value.trim();
        if value.is_empty() {
            self.properties.delete(APP_JSON_NAMESPACE, app, key)?;
            info!(app = %app, key, "unset property");
            return Ok(());
        }

        DocumentPath::parse(value)?;
        self.properties.set(APP_JSON_NAMESPACE, app, key, value)?;
        info!(app = %app, key, value, "set property");
        Ok(())
    }

    pub fn report(&self, app: &AppName) -> AppJsonResult<SettingsReport> {
        let read = |app: &AppName| -> AppJsonResult<String> {
            Ok(self
                .properties
                .get(APP_JSON_NAMESPACE, app, APPJSON_PATH_KEY)?
                .map(|v| v.trim().to_string())
                .unwrap_or_default())
        };

        let appjson_path = read(app)?;
        let global_appjson_path = read(&AppName::global())?;
        let configured = if appjson_path.is_empty() {
            &global_appjson_path
        } else {
            &appjson_path
        };
        let computed_appjson_path = DocumentPath::parse(configured)?.to_string();

        Ok(SettingsReport {
            appjson_path,
            global_appjson_path,
            computed_appjson_path,
        })
    }
}
