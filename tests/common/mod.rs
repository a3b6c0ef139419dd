//! Shared testing harness for laravels CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated host project for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated host project with the skeleton directories the
    /// tool expects (`config/`, `storage/`).
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("config")).expect("Failed to create config directory");
        fs::create_dir_all(work_dir.join("storage")).expect("Failed to create storage directory");
        let work_dir = work_dir.canonicalize().expect("Failed to canonicalize work directory");

        Self { root, work_dir }
    }

    /// Path to the host project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `laravels` binary within
    /// the host project, with a fixed runtime-engine version.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("laravels").expect("Failed to locate laravels binary");
        cmd.current_dir(&self.work_dir).env("LARAVELS_SWOOLE_VERSION", "4.8.13");
        cmd
    }

    /// Write the user-authored configuration override file.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("config/laravels.toml"), content)
            .expect("Failed to write laravels.toml");
    }

    /// Write a composer manifest marking the host as Lumen.
    pub fn mark_as_lumen(&self) {
        fs::write(
            self.work_dir.join("composer.json"),
            r#"{"require": {"laravel/lumen-framework": "^8.0"}}"#,
        )
        .expect("Failed to write composer.json");
    }

    /// Path to the persisted configuration artifact.
    pub fn artifact_path(&self) -> PathBuf {
        self.work_dir.join("storage/laravels.json")
    }

    /// Parse the persisted configuration artifact.
    pub fn read_artifact(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.artifact_path()).expect("Failed to read artifact");
        serde_json::from_str(&content).expect("Artifact should be valid JSON")
    }

    /// Path to the published config template.
    pub fn template_path(&self) -> PathBuf {
        self.work_dir.join("config/laravels.php")
    }
}
