//! Attempt token value object
//!
//! Identifies one deployment invocation. Staging files are suffixed with the
//! token, so concurrent attempts for the same app never share a staging file.

use crate::error::{AppJsonError, AppJsonResult};

/// Token naming a single deployment attempt
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttemptToken(String);

impl AttemptToken {
    /// Parse a caller-supplied token.
    ///
    /// Tokens become file name suffixes, so only `[A-Za-z0-9_-]` is allowed.
    pub fn parse(token: &str) -> AppJsonResult<Self> {
        let valid = !token.is_empty()
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppJsonError::InvalidAttempt {
                token: token.to_string(),
            });
        }
        Ok(Self(token.to_string()))
    }

    /// Token derived from the current process id.
    pub fn from_process() -> Self {
        Self(std::process::id().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AttemptToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
