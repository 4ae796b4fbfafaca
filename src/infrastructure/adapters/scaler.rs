//! Command Process Scaler
//!
//! Hands the committed document's formation to an external scale command as
//! `<command> <app> <image> <type>=<quantity>...`.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::entities::AppDocument;
use crate::domain::ports::{ProcessScaler, ScaleError, ScaleResult};
use crate::domain::services::DocumentLayout;
use crate::domain::value_objects::{AppName, ImageRef};
use crate::infrastructure::fs::LocalFs;

use super::document::load_committed;

#[derive(Debug, Clone)]
pub struct CommandScaler {
    command: Option<PathBuf>,
    layout: DocumentLayout,
    fs: LocalFs,
}

impl CommandScaler {
    pub fn new(command: Option<PathBuf>, layout: DocumentLayout) -> Self {
        Self {
            command,
            layout,
            fs: LocalFs::new(),
        }
    }
}

/// `type=quantity` pairs for every process type with an explicit quantity.
fn formation_args(document: &AppDocument) -> Vec<String> {
    document
        .formation()
        .iter()
        .filter_map(|(process_type, formation)| {
            formation
                .quantity
                .map(|quantity| format!("{process_type}={quantity}"))
        })
        .collect()
}

impl ProcessScaler for CommandScaler {
    fn reconcile(&self, app: &AppName, image: &ImageRef) -> ScaleResult<()> {
        let err = |message: String| ScaleError {
            app: app.to_string(),
            message,
        };

        let Some(command) = &self.command else {
            debug!(app = %app, "no scale command configured");
            return Ok(());
        };

        let document = load_committed(&self.fs, &self.layout, app).map_err(err)?;
        let pairs = formation_args(&document);
        if pairs.is_empty() {
            debug!(app = %app, "formation declares no quantities");
            return Ok(());
        }

        info!(app = %app, formation = %pairs.join(" "), "scaling processes");
        let output = Command::new(command)
            .arg(app.as_str())
            .arg(image.as_str())
            .args(&pairs)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| err(format!("unable to run {}: {e}", command.display())))?;

        if !output.status.success() {
            return Err(err(format!(
                "{} exited with {}: {}",
                command.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}
