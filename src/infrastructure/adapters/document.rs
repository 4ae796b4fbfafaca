//! Committed document lookup shared by the command adapters

use crate::domain::entities::AppDocument;
use crate::domain::ports::FileSystem;
use crate::domain::services::DocumentLayout;
use crate::domain::value_objects::AppName;

/// Load the app's committed document.
///
/// A missing file is an empty document; unreadable or invalid JSON is an
/// error message suitable for the adapter's own error type.
pub(crate) fn load_committed<F: FileSystem>(
    fs: &F,
    layout: &DocumentLayout,
    app: &AppName,
) -> Result<AppDocument, String> {
    let path = layout.canonical(app);
    if !fs.exists(&path) {
        return Ok(AppDocument::empty());
    }
    let content = fs.read(&path).map_err(|e| e.to_string())?;
    AppDocument::parse(&content).map_err(|e| format!("invalid {}: {e}", path.display()))
}
