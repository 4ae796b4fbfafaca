//! Port implementations that record calls instead of running processes.

use std::sync::{Arc, Mutex};

use appjson::application::{ContentQuery, DocumentStager, LifecycleRunner};
use appjson::domain::ports::{
    ArtifactError, ArtifactResult, ArtifactSource, FileSystem, ProcessScaler, ScaleResult,
    ScriptError, ScriptExecutor, ScriptResult,
};
use appjson::domain::services::DocumentLayout;
use appjson::domain::value_objects::{AppName, ImageRef, LifecyclePhase};
use appjson::infrastructure::{
    FsPropertyStore, JsonAttemptRepository, LocalFs, PropertyDeployQuery,
};
use appjson::Config;

/// A script that would have run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedScript {
    pub phase: LifecyclePhase,
    pub script: String,
    pub image: String,
}

/// Resolves scripts from the committed document like the real executor,
/// but records them instead of running them.
#[derive(Clone)]
pub struct RecordingExecutor {
    content: Arc<ContentQuery<LocalFs>>,
    calls: Arc<Mutex<Vec<RecordedScript>>>,
}

impl RecordingExecutor {
    pub fn new(config: &Config) -> Self {
        Self {
            content: Arc::new(ContentQuery::new(
                DocumentLayout::new(config.document_root()),
                LocalFs::new(),
            )),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedScript> {
        self.calls.lock().unwrap().clone()
    }

    pub fn phases(&self) -> Vec<LifecyclePhase> {
        self.calls().into_iter().map(|c| c.phase).collect()
    }
}

impl ScriptExecutor for RecordingExecutor {
    fn run(
        &self,
        app: &AppName,
        image: &ImageRef,
        _tag: &str,
        phase: LifecyclePhase,
    ) -> ScriptResult<()> {
        let document = self
            .content
            .committed_document(app)
            .map_err(|e| ScriptError::Resolve {
                app: app.to_string(),
                phase,
                message: e.to_string(),
            })?;
        if let Some(script) = document.as_ref().and_then(|d| d.script_for(phase)) {
            self.calls.lock().unwrap().push(RecordedScript {
                phase,
                script: script.to_string(),
                image: image.to_string(),
            });
        }
        Ok(())
    }
}

/// Scaler that accepts everything
#[derive(Clone, Default)]
pub struct NoopScaler;

impl ProcessScaler for NoopScaler {
    fn reconcile(&self, _app: &AppName, _image: &ImageRef) -> ScaleResult<()> {
        Ok(())
    }
}

pub type RecordingRunner = LifecycleRunner<
    RecordingExecutor,
    NoopScaler,
    PropertyDeployQuery<FsPropertyStore>,
    FsPropertyStore,
    JsonAttemptRepository,
>;

/// Lifecycle runner over the real stores with a recording executor
pub fn recording_runner(config: &Config, executor: &RecordingExecutor) -> RecordingRunner {
    let properties = FsPropertyStore::new(&config.paths.property_root);
    LifecycleRunner::new(
        executor.clone(),
        NoopScaler,
        PropertyDeployQuery::new(properties.clone()),
        properties,
        JsonAttemptRepository::new(config.document_root()),
        config.images.repository.clone(),
    )
}

/// Images as directories: `<root>/<image with '/' and ':' as '_'>/...`
#[derive(Clone)]
pub struct DirectoryImages {
    root: std::path::PathBuf,
}

impl DirectoryImages {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn image_dir(&self, image: &str) -> std::path::PathBuf {
        self.root.join(image.replace(['/', ':'], "_"))
    }

    /// Put a file into an image's working directory
    pub fn add_file(&self, image: &str, relative: &str, content: &str) {
        let path = self.image_dir(image).join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }
}

impl ArtifactSource for DirectoryImages {
    fn copy(&self, from: &std::path::Path, to: &std::path::Path) -> ArtifactResult<()> {
        LocalFs::new().copy(from, to).map_err(|e| ArtifactError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn copy_from_image(
        &self,
        _app: &AppName,
        image: &ImageRef,
        in_path: &std::path::Path,
        out_path: &std::path::Path,
    ) -> ArtifactResult<()> {
        let source = self.image_dir(image.as_str()).join(in_path);
        LocalFs::new()
            .copy(&source, out_path)
            .map_err(|e| ArtifactError::Image {
                image: image.to_string(),
                path: in_path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

pub type DirectoryStager = DocumentStager<
    LocalFs,
    DirectoryImages,
    PropertyDeployQuery<FsPropertyStore>,
    JsonAttemptRepository,
>;

/// Stager over the real stores that reads images from directories
pub fn directory_stager(config: &Config, images: &DirectoryImages) -> DirectoryStager {
    DocumentStager::new(
        DocumentLayout::new(config.document_root()),
        LocalFs::new(),
        images.clone(),
        PropertyDeployQuery::new(FsPropertyStore::new(&config.paths.property_root)),
        JsonAttemptRepository::new(config.document_root()),
    )
}
