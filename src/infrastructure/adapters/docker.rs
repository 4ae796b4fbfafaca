//! Docker Artifact Source
//!
//! Copies the document out of a container image with
//! `docker container create` + `docker container cp`, removing the
//! temporary container afterwards. Local copies go through [`LocalFs`].

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::{debug, warn};

use crate::domain::ports::{ArtifactError, ArtifactResult, ArtifactSource, FileSystem};
use crate::domain::value_objects::{AppName, ImageRef};
use crate::infrastructure::fs::LocalFs;

/// Copies files from local trees and container images
#[derive(Debug, Clone)]
pub struct DockerImageSource {
    docker_bin: PathBuf,
    fs: LocalFs,
}

impl DockerImageSource {
    pub fn new(docker_bin: impl Into<PathBuf>) -> Self {
        Self {
            docker_bin: docker_bin.into(),
            fs: LocalFs::new(),
        }
    }

    fn docker(&self, args: &[&str]) -> Result<Output, String> {
        Command::new(&self.docker_bin)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| format!("unable to run {}: {e}", self.docker_bin.display()))
    }

    fn checked(&self, args: &[&str]) -> Result<String, String> {
        let output = self.docker(args)?;
        if !output.status.success() {
            return Err(format!(
                "docker {} failed: {}",
                args.first().copied().unwrap_or_default(),
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Working directory baked into the image, `/` when unset.
    fn working_dir(&self, image: &ImageRef) -> Result<String, String> {
        let dir = self.checked(&[
            "image",
            "inspect",
            "--format",
            "{{.Config.WorkingDir}}",
            image.as_str(),
        ])?;
        Ok(if dir.is_empty() { "/".to_string() } else { dir })
    }

    fn copy_out(&self, image: &ImageRef, in_path: &Path, out_path: &Path) -> Result<(), String> {
        let source = in_image_path(&self.working_dir(image)?, in_path);
        let container = self.checked(&["container", "create", image.as_str()])?;

        let copied = self.copy_from_container(&container, &source, out_path);

        if let Err(e) = self.checked(&["container", "rm", "--force", container.as_str()]) {
            warn!(container = %container, error = %e, "unable to remove temporary container");
        }
        copied
    }

    fn copy_from_container(
        &self,
        container: &str,
        source: &str,
        out_path: &Path,
    ) -> Result<(), String> {
        let parent = out_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;

        // docker cp into a scratch dir beside the destination, then rename
        let scratch = tempfile::tempdir_in(parent).map_err(|e| e.to_string())?;
        let scratch_file = scratch.path().join("document");
        let scratch_arg = scratch_file.to_string_lossy();
        let from = format!("{container}:{source}");

        self.checked(&["container", "cp", from.as_str(), scratch_arg.as_ref()])?;
        if !scratch_file.is_file() {
            return Err(format!("{source} is not a regular file"));
        }
        self.fs
            .rename(&scratch_file, out_path)
            .map_err(|e| e.to_string())
    }
}

impl Default for DockerImageSource {
    fn default() -> Self {
        Self::new("docker")
    }
}

/// Absolute path of `in_path` inside an image whose working dir is `workdir`.
fn in_image_path(workdir: &str, in_path: &Path) -> String {
    let relative = in_path.to_string_lossy();
    if relative.starts_with('/') {
        return relative.to_string();
    }
    format!("{}/{}", workdir.trim_end_matches('/'), relative)
}

impl ArtifactSource for DockerImageSource {
    fn copy(&self, from: &Path, to: &Path) -> ArtifactResult<()> {
        self.fs.copy(from, to).map_err(|e| ArtifactError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn copy_from_image(
        &self,
        app: &AppName,
        image: &ImageRef,
        in_path: &Path,
        out_path: &Path,
    ) -> ArtifactResult<()> {
        debug!(app = %app, image = %image, path = %in_path.display(), "copying from image");
        self.copy_out(image, in_path, out_path)
            .map_err(|message| ArtifactError::Image {
                image: image.to_string(),
                path: in_path.to_path_buf(),
                message,
            })
    }
}
