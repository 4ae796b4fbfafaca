//! Property-backed DeployQuery
//!
//! Reads the settings other deploy components record in the property store.

use crate::domain::ports::{DeployQuery, PropertyResult, PropertyStore};
use crate::domain::value_objects::property_keys::{
    APPJSON_PATH_KEY, APP_JSON_NAMESPACE, BUILDER_NAMESPACE, BUILD_DIR_KEY, COMMON_NAMESPACE,
    DEPLOYED_KEY, GIT_NAMESPACE, SOURCE_IMAGE_KEY,
};
use crate::domain::value_objects::{AppName, ImageRef};

#[derive(Debug, Clone)]
pub struct PropertyDeployQuery<P> {
    properties: P,
}

impl<P: PropertyStore> PropertyDeployQuery<P> {
    pub fn new(properties: P) -> Self {
        Self { properties }
    }

    fn value(&self, namespace: &str, app: &AppName, key: &str) -> PropertyResult<String> {
        Ok(self
            .properties
            .get(namespace, app, key)?
            .map(|v| v.trim().to_string())
            .unwrap_or_default())
    }
}

impl<P: PropertyStore> DeployQuery for PropertyDeployQuery<P> {
    fn source_image(&self, app: &AppName) -> PropertyResult<Option<ImageRef>> {
        let image = self.value(GIT_NAMESPACE, app, SOURCE_IMAGE_KEY)?;
        Ok((!image.is_empty()).then(|| ImageRef::new(image)))
    }

    fn build_dir(&self, app: &AppName) -> PropertyResult<String> {
        self.value(BUILDER_NAMESPACE, app, BUILD_DIR_KEY)
    }

    fn appjson_path(&self, app: &AppName) -> PropertyResult<String> {
        let local = self.value(APP_JSON_NAMESPACE, app, APPJSON_PATH_KEY)?;
        if !local.is_empty() {
            return Ok(local);
        }
        self.value(APP_JSON_NAMESPACE, &AppName::global(), APPJSON_PATH_KEY)
    }

    fn is_deployed(&self, app: &AppName) -> PropertyResult<bool> {
        Ok(self.value(COMMON_NAMESPACE, app, DEPLOYED_KEY)? == "true")
    }
}
