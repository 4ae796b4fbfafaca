//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod app_name;
mod attempt;
mod document_path;
mod image;
mod lifecycle_phase;
pub mod property_keys;

pub use app_name::{AppName, GLOBAL_APP};
pub use attempt::AttemptToken;
pub use document_path::{DocumentPath, DEFAULT_DOCUMENT};
pub use image::{ImageRef, DEFAULT_TAG};
pub use lifecycle_phase::LifecyclePhase;
