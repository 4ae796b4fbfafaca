//! ProcessScaler port - applies the document's formation after release

use crate::domain::value_objects::{AppName, ImageRef};

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, thiserror::Error)]
#[error("unable to scale processes for {app}: {message}")]
pub struct ScaleError {
    pub app: String,
    pub message: String,
}

pub trait ProcessScaler {
    fn reconcile(&self, app: &AppName, image: &ImageRef) -> ScaleResult<()>;
}
