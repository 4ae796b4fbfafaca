//! ArtifactSource port - copies the document out of a source tree or image

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{AppName, ImageRef};

pub type ArtifactResult<T> = Result<T, ArtifactError>;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("unable to copy {} to {}: {message}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },

    #[error("unable to copy {} out of image {image}: {message}", path.display())]
    Image {
        image: String,
        path: PathBuf,
        message: String,
    },
}

pub trait ArtifactSource {
    /// Copy a file on the local file system
    fn copy(&self, from: &Path, to: &Path) -> ArtifactResult<()>;

    /// Copy `in_path` (relative to the image's working directory) out of
    /// `image` into `out_path`
    fn copy_from_image(
        &self,
        app: &AppName,
        image: &ImageRef,
        in_path: &Path,
        out_path: &Path,
    ) -> ArtifactResult<()>;
}
