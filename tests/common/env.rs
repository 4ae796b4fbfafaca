//! Test environment builder for isolated appjson testing.
//!
//! Provides `TestEnv` - a temp directory holding the data root, property
//! root, app source trees and a config file pointing at them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use appjson::config::ScriptRunner;
use appjson::domain::ports::PropertyStore;
use appjson::infrastructure::FsPropertyStore;
use appjson::{AppName, Config};

/// Result of running an appjson CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated appjson installation in a temp directory.
pub struct TestEnv {
    pub root: TempDir,
    pub config: Config,
    appjson_bin: PathBuf,
}

impl TestEnv {
    /// Shell script runner, no scale command.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = Config::default();
        config.paths.data_root = root.path().join("data");
        config.paths.property_root = root.path().join("config");
        config.scripts.runner = ScriptRunner::Shell;
        config.scripts.shell = PathBuf::from("/bin/sh");

        let env = Self {
            root,
            config,
            appjson_bin: PathBuf::from(env!("CARGO_BIN_EXE_appjson")),
        };
        env.write_config();
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn config_path(&self) -> PathBuf {
        self.path("appjson.toml")
    }

    fn write_config(&self) {
        let content = toml::to_string(&self.config).expect("Failed to serialize config");
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Extracted source tree for an app
    pub fn source_dir(&self, app: &str) -> PathBuf {
        let dir = self.path(&format!("src/{app}"));
        std::fs::create_dir_all(&dir).expect("Failed to create source dir");
        dir
    }

    pub fn write_source_file(&self, app: &str, relative: &str, content: &str) {
        let full_path = self.source_dir(app).join(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Path inside the app's data directory
    pub fn data_path(&self, app: &str, file: &str) -> PathBuf {
        self.config.document_root().join(app).join(file)
    }

    pub fn committed_document(&self, app: &str) -> Option<String> {
        std::fs::read_to_string(self.data_path(app, "app.json")).ok()
    }

    pub fn properties(&self) -> FsPropertyStore {
        FsPropertyStore::new(&self.config.paths.property_root)
    }

    /// Set a property owned by another component (e.g. `common/deployed`)
    pub fn set_property(&self, namespace: &str, app: &str, key: &str, value: &str) {
        let app = AppName::parse(app).expect("valid app name");
        self.properties()
            .set(namespace, &app, key, value)
            .expect("Failed to set property");
    }

    pub fn property(&self, namespace: &str, app: &str, key: &str) -> Option<String> {
        let app = AppName::parse(app).expect("valid app name");
        self.properties()
            .get(namespace, &app, key)
            .expect("Failed to read property")
    }

    /// Run the appjson binary against this environment's config
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.appjson_bin);
        cmd.current_dir(self.root.path())
            .arg("--config")
            .arg(self.config_path())
            .args(args);

        for key in [
            "APPJSON_CONFIG",
            "APPJSON_ATTEMPT",
            "APPJSON_DATA_ROOT",
            "APPJSON_PROPERTY_ROOT",
            "APPJSON_SCRIPT_RUNNER",
            "APPJSON_DOCKER_BIN",
            "APPJSON_IMAGE_REPOSITORY",
            "RUST_LOG",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute appjson");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Read a file, or an empty string when absent
pub fn read_or_empty(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}
