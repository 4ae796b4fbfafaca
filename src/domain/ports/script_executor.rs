//! ScriptExecutor port - runs one lifecycle hook for an app

use crate::domain::value_objects::{AppName, ImageRef, LifecyclePhase};

pub type ScriptResult<T> = Result<T, ScriptError>;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The script ran and exited non-zero (or was killed)
    #[error("{phase} script failed for {app} (exit code {code}): {stderr}")]
    Failed {
        app: String,
        phase: LifecyclePhase,
        code: i32,
        stderr: String,
    },

    /// The script could not be started
    #[error("unable to start {phase} script for {app}: {message}")]
    Spawn {
        app: String,
        phase: LifecyclePhase,
        message: String,
    },

    /// The script's error stream could not be relayed
    #[error("lost {phase} script output for {app}: {message}")]
    Output {
        app: String,
        phase: LifecyclePhase,
        message: String,
    },

    /// The script definition could not be loaded
    #[error("unable to resolve {phase} script for {app}: {message}")]
    Resolve {
        app: String,
        phase: LifecyclePhase,
        message: String,
    },
}

/// Executes the script registered for a phase.
///
/// An app that declares no script for the phase is a successful no-op.
pub trait ScriptExecutor {
    fn run(
        &self,
        app: &AppName,
        image: &ImageRef,
        tag: &str,
        phase: LifecyclePhase,
    ) -> ScriptResult<()>;
}
