use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The fixed "today" every harness command runs with: Saturday 1 June 2024.
pub const TODAY: &str = "20240601";

/// Test harness for running CLI commands against a temporary database
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// A `scheduler` command isolated from the caller's configuration
    pub fn raw_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("scheduler").expect("Failed to find scheduler binary");
        cmd.current_dir(self.temp_dir.path())
            .env("SCHEDULER_DATABASE_PATH", &self.db_path)
            .env_remove("SCHEDULER_DATE_FORMAT")
            .env_remove("SCHEDULER_SEARCH_LIMIT")
            .env_remove("SCHEDULER_LOG_LEVEL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Like [`Self::raw_command`], pinned to [`TODAY`]
    pub fn command(&self) -> Command {
        let mut cmd = self.raw_command();
        cmd.arg("--today").arg(TODAY);
        cmd
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Runs a `--json` command and parses its stdout
    pub fn run_json(&self, args: &[&str]) -> Value {
        let output = self.run_success(args).get_output().stdout.clone();
        serde_json::from_slice(&output).expect("Command did not print valid JSON")
    }

    /// All stored tasks, in list order
    pub fn tasks(&self) -> Vec<Value> {
        self.run_json(&["list", "--json"])["tasks"]
            .as_array()
            .cloned()
            .unwrap_or_default()
    }
}
