//! Command-backed adapters
//!
//! Ports whose work happens in external processes: image copies, lifecycle
//! scripts and process scaling.

mod docker;
mod document;
mod scaler;
mod script_runner;

pub use docker::DockerImageSource;
pub use scaler::CommandScaler;
pub use script_runner::CommandScriptExecutor;
