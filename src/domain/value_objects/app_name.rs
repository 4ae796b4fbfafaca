//! App name value object
//!
//! Application identifiers end up as directory names under both the data
//! root and the property root, so anything that could escape those roots
//! is rejected up front.

use crate::error::{AppJsonError, AppJsonResult};

/// Reserved identifier used for global (non app-scoped) properties.
pub const GLOBAL_APP: &str = "--global";

/// Validated application identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppName(String);

impl AppName {
    /// Parse and validate an app name supplied by a caller.
    pub fn parse(name: &str) -> AppJsonResult<Self> {
        let reject = |reason| {
            Err(AppJsonError::InvalidAppName {
                name: name.to_string(),
                reason,
            })
        };

        if name.is_empty() {
            return reject("must not be empty");
        }
        if name.starts_with('-') || name.starts_with('.') {
            return reject("must not start with '-' or '.'");
        }
        if name.contains(['/', '\\']) {
            return reject("must not contain path separators");
        }
        if name.chars().any(|c| c.is_control() || c.is_whitespace()) {
            return reject("must not contain whitespace or control characters");
        }

        Ok(Self(name.to_string()))
    }

    /// The pseudo-app that holds global property values.
    pub fn global() -> Self {
        Self(GLOBAL_APP.to_string())
    }

    pub fn is_global(&self) -> bool {
        self.0 == GLOBAL_APP
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
