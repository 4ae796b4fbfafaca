//! appjson - app.json deploy lifecycle for container-based app platforms
//!
//! Extracts an app's `app.json` from its source tree or built image, stages
//! it per deployment attempt, promotes it on success, and runs the lifecycle
//! scripts it declares (`predeploy`, `release`, `postdeploy`) at the right
//! points of a deploy.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::value_objects::{AppName, AttemptToken, ImageRef};
pub use error::{AppJsonError, AppJsonResult};
