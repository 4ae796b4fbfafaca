//! Image reference value object

/// Tag used when an image reference carries none.
pub const DEFAULT_TAG: &str = "latest";

/// A container image reference such as `registry:5000/apps/web:42`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Image name for an app deployed from a local repository, e.g. `apps/web:42`.
    pub fn for_app(repository: &str, app: &str, tag: &str) -> Self {
        let repository = repository.trim_end_matches('/');
        if repository.is_empty() {
            Self(format!("{app}:{tag}"))
        } else {
            Self(format!("{repository}/{app}:{tag}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The tag portion of the reference.
    ///
    /// A `:` only separates a tag when it appears after the last `/`, so a
    /// registry port is never mistaken for a tag. Digests are ignored.
    pub fn tag(&self) -> &str {
        let name = self.0.split('@').next().unwrap_or_default();
        let last_slash = name.rfind('/').map_or(0, |i| i + 1);
        match name[last_slash..].rfind(':') {
            Some(i) if last_slash + i + 1 < name.len() => &name[last_slash + i + 1..],
            _ => DEFAULT_TAG,
        }
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
