//! Shared test infrastructure for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Catalog used by the CLI tests: one enum per accepted input shape.
pub const CATALOG_JSON: &str = r#"{
  "schema_version": 1,
  "enums": {
    "statuses": [
      {"key": "submitted", "value": 1, "label": "Submitted", "icon": "fa fa-check"},
      {"key": "accepted", "value": 2, "label": "Accepted", "icon": "fa fa-check-circle"},
      {"key": "completed", "value": 31, "label": "All Done Yo", "icon": "fa fa-check-square", "finished": true}
    ],
    "days": ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    "days_abbr": {"su": "Sunday", "mo": "Monday", "tu": "Tuesday"}
  }
}"#;

/// Temporary directory holding a catalog file.
pub struct CatalogFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Default for CatalogFixture {
    fn default() -> Self {
        Self::with_contents(CATALOG_JSON)
    }
}

impl CatalogFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, contents.as_bytes()).expect("write catalog");
        Self { _dir: dir, path }
    }
}

/// Result of one `senum` invocation.
#[derive(Debug)]
pub struct RunResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).expect("stdout is JSON")
    }
}

pub fn run_senum(args: &[&str], catalog: &Path) -> RunResult {
    let bin = env!("CARGO_BIN_EXE_senum");
    let output: Output = Command::new(bin)
        .args(args)
        .arg("--catalog")
        .arg(catalog)
        .env_remove("RUST_LOG")
        .output()
        .expect("run senum");
    RunResult {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
