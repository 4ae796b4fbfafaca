//! Property namespaces and keys shared with other deploy plugins

/// Namespace owned by this engine (properties and data directory)
pub const APP_JSON_NAMESPACE: &str = "app-json";

/// Execution marker for the first-deploy script
pub const POSTDEPLOY_MARKER_KEY: &str = "heroku.postdeploy";
pub const POSTDEPLOY_MARKER_EXECUTED: &str = "executed";

/// Relative document path override (per app or `--global`)
pub const APPJSON_PATH_KEY: &str = "appjson-path";

/// Deployed flag written by the core deploy flow
pub const COMMON_NAMESPACE: &str = "common";
pub const DEPLOYED_KEY: &str = "deployed";

/// Image an app is deployed from, when not built from source
pub const GIT_NAMESPACE: &str = "git";
pub const SOURCE_IMAGE_KEY: &str = "source-image";

/// Build directory inside the source tree or image
pub const BUILDER_NAMESPACE: &str = "builder";
pub const BUILD_DIR_KEY: &str = "build-dir";
