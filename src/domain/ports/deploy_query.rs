//! DeployQuery port - read-only settings owned by other deploy components

use crate::domain::ports::PropertyResult;
use crate::domain::value_objects::{AppName, ImageRef};

pub trait DeployQuery {
    /// Image the app is deployed from, if it is not built from source
    fn source_image(&self, app: &AppName) -> PropertyResult<Option<ImageRef>>;

    /// Build directory inside the source tree or image (empty ⇒ root)
    fn build_dir(&self, app: &AppName) -> PropertyResult<String>;

    /// Configured document path: app value, then global value, then empty
    fn appjson_path(&self, app: &AppName) -> PropertyResult<String>;

    /// Whether the app has completed at least one deploy
    fn is_deployed(&self, app: &AppName) -> PropertyResult<bool>;
}
