//! Command Script Executor
//!
//! Looks up the phase's script in the committed document and runs it, either
//! through the host shell or inside a throwaway container of the app image.
//! The script sees `APP`, `IMAGE`, `TAG` and `PHASE` in its environment.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::config::{ScriptRunner, ScriptsConfig};
use crate::domain::ports::{ScriptError, ScriptExecutor, ScriptResult};
use crate::domain::services::DocumentLayout;
use crate::domain::value_objects::{AppName, ImageRef, LifecyclePhase};
use crate::infrastructure::fs::LocalFs;

use super::document::load_committed;

/// Container label identifying script containers
const PHASE_LABEL: &str = "com.appjson.phase";

#[derive(Debug, Clone)]
pub struct CommandScriptExecutor {
    runner: ScriptRunner,
    docker_bin: PathBuf,
    shell: PathBuf,
    layout: DocumentLayout,
    fs: LocalFs,
}

impl CommandScriptExecutor {
    pub fn new(config: &ScriptsConfig, layout: DocumentLayout) -> Self {
        Self {
            runner: config.runner,
            docker_bin: config.docker_bin.clone(),
            shell: config.shell.clone(),
            layout,
            fs: LocalFs::new(),
        }
    }

    fn command(
        &self,
        app: &AppName,
        image: &ImageRef,
        tag: &str,
        phase: LifecyclePhase,
        script: &str,
    ) -> Command {
        let env = [
            ("APP", app.as_str()),
            ("IMAGE", image.as_str()),
            ("TAG", tag),
            ("PHASE", phase.as_str()),
        ];

        match self.runner {
            ScriptRunner::Shell => {
                let mut cmd = Command::new(&self.shell);
                cmd.arg("-c").arg(script).envs(env);
                cmd
            }
            ScriptRunner::Docker => {
                let mut cmd = Command::new(&self.docker_bin);
                cmd.args(["container", "run", "--rm", "--label"])
                    .arg(format!("{PHASE_LABEL}={phase}"));
                for (key, value) in env {
                    cmd.arg("--env").arg(format!("{key}={value}"));
                }
                cmd.arg(image.as_str()).args(["/bin/sh", "-c", script]);
                cmd
            }
        }
    }
}

impl ScriptExecutor for CommandScriptExecutor {
    fn run(
        &self,
        app: &AppName,
        image: &ImageRef,
        tag: &str,
        phase: LifecyclePhase,
    ) -> ScriptResult<()> {
        let document =
            load_committed(&self.fs, &self.layout, app).map_err(|message| ScriptError::Resolve {
                app: app.to_string(),
                phase,
                message,
            })?;

        let Some(script) = document.script_for(phase) else {
            debug!(app = %app, phase = %phase, "no script declared");
            return Ok(());
        };

        info!(app = %app, phase = %phase, image = %image, "running script");
        let mut child = self
            .command(app, image, tag, phase, script)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ScriptError::Spawn {
                app: app.to_string(),
                phase,
                message: e.to_string(),
            })?;

        let relayed = match child.stderr.take() {
            Some(stderr) => relay_stderr(stderr, &mut io::stderr().lock()),
            None => Ok(String::new()),
        };
        // an unread pipe would block the script; stop it before reaping
        if relayed.is_err() {
            if let Err(e) = child.kill() {
                debug!(app = %app, phase = %phase, error = %e, "script already exited");
            }
        }
        let status = child.wait().map_err(|e| ScriptError::Spawn {
            app: app.to_string(),
            phase,
            message: e.to_string(),
        })?;
        let stderr = relayed.map_err(|e| ScriptError::Output {
            app: app.to_string(),
            phase,
            message: e.to_string(),
        })?;

        if !status.success() {
            return Err(ScriptError::Failed {
                app: app.to_string(),
                phase,
                code: status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Copies the script's stderr through line by line and keeps a copy for the
/// failure message.
fn relay_stderr(source: impl Read, sink: &mut impl Write) -> io::Result<String> {
    let mut reader = BufReader::new(source);
    let mut captured = String::new();
    let mut line = Vec::new();

    while reader.read_until(b'\n', &mut line)? > 0 {
        sink.write_all(&line)?;
        sink.flush()?;
        captured.push_str(&String::from_utf8_lossy(&line));
        line.clear();
    }
    Ok(captured)
}
