//! Document Stager
//!
//! Copies the app's document for one attempt into its attempt-scoped slot,
//! or records that the attempt has none:
//!
//! 1. Remove leftovers of earlier attempts (`app.json.*`)
//! 2. Copy from the container image when one is given, otherwise from the
//!    extracted source tree
//! 3. Write the missing marker when nothing could be staged
//! 4. Record the outcome in the attempt ledger
//!
//! The canonical document is never touched here.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::entities::StageOutcome;
use crate::domain::ports::{ArtifactSource, AttemptRepository, DeployQuery, FileSystem};
use crate::domain::services::{source_locations, DocumentLayout, SourceLocations, StagingPaths};
use crate::domain::value_objects::{AppName, AttemptToken, DocumentPath, ImageRef};
use crate::error::{AppJsonError, AppJsonResult};

use super::ledger::AttemptLedger;

/// Stage use case
pub struct DocumentStager<FS, AS, DQ, AR>
where
    FS: FileSystem,
    AS: ArtifactSource,
    DQ: DeployQuery,
    AR: AttemptRepository,
{
    layout: DocumentLayout,
    file_system: FS,
    artifacts: AS,
    query: DQ,
    ledger: AttemptLedger<AR>,
}

impl<FS, AS, DQ, AR> DocumentStager<FS, AS, DQ, AR>
where
    FS: FileSystem,
    AS: ArtifactSource,
    DQ: DeployQuery,
    AR: AttemptRepository,
{
    pub fn new(layout: DocumentLayout, file_system: FS, artifacts: AS, query: DQ, attempts: AR) -> Self {
        Self {
            layout,
            file_system,
            artifacts,
            query,
            ledger: AttemptLedger::new(attempts),
        }
    }

    /// Stage the document for `token`.
    ///
    /// `source_image` selects the image source; `None` or an empty reference
    /// stages from `source_root`.
    pub fn stage(
        &self,
        app: &AppName,
        source_root: &Path,
        source_image: Option<&ImageRef>,
        token: &AttemptToken,
    ) -> AppJsonResult<StageOutcome> {
        let paths = self.layout.staging(app, token);
        self.clear_previous(&paths)?;

        let document = DocumentPath::parse(&self.query.appjson_path(app)?)?;
        let build_dir = self.query.build_dir(app)?;
        let locations = source_locations(source_root, &build_dir, &document);

        let outcome = match source_image.filter(|image| !image.is_empty()) {
            Some(image) => self.stage_from_image(app, image, &locations, &paths)?,
            None => self.stage_from_tree(app, &document, &locations, &paths)?,
        };

        self.ledger.record_staged(app, token, outcome)?;
        info!(app = %app, attempt = %token, outcome = %outcome, "staged app.json");
        Ok(outcome)
    }

    fn clear_previous(&self, paths: &StagingPaths) -> AppJsonResult<()> {
        let leftovers = self
            .file_system
            .list_prefixed(paths.dir(), &StagingPaths::staging_prefix())
            .map_err(AppJsonError::Cleanup)?;
        for file in leftovers {
            debug!(path = %file.display(), "removing previous staging file");
            self.file_system
                .remove(&file)
                .map_err(AppJsonError::Cleanup)?;
        }
        Ok(())
    }

    fn stage_from_tree(
        &self,
        app: &AppName,
        document: &DocumentPath,
        locations: &SourceLocations,
        paths: &StagingPaths,
    ) -> AppJsonResult<StageOutcome> {
        if !self.file_system.exists(&locations.tree) {
            debug!(app = %app, path = %locations.tree.display(), "no app.json in source tree");
            if !document.is_default() && self.file_system.exists(&locations.tree_default) {
                self.file_system.remove(&locations.tree_default)?;
            }
            self.file_system.touch(paths.missing_marker())?;
            return Ok(StageOutcome::Missing);
        }

        self.artifacts
            .copy(&locations.tree, paths.attempt())
            .map_err(AppJsonError::Extract)?;

        if !document.is_default() {
            self.artifacts
                .copy(&locations.tree, &locations.tree_default)
                .map_err(AppJsonError::Relocate)?;
        }
        Ok(StageOutcome::Staged)
    }

    fn stage_from_image(
        &self,
        app: &AppName,
        image: &ImageRef,
        locations: &SourceLocations,
        paths: &StagingPaths,
    ) -> AppJsonResult<StageOutcome> {
        match self
            .artifacts
            .copy_from_image(app, image, &locations.image, paths.attempt())
        {
            Ok(()) => Ok(StageOutcome::Staged),
            Err(e) => {
                debug!(app = %app, image = %image, error = %e, "no app.json in image");
                if self.file_system.exists(paths.attempt()) {
                    if let Err(e) = self.file_system.remove(paths.attempt()) {
                        warn!(path = %paths.attempt().display(), error = %e, "unable to remove partial copy");
                    }
                }
                self.file_system.touch(paths.missing_marker())?;
                Ok(StageOutcome::Missing)
            }
        }
    }
}
