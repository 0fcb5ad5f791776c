//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the fieldkit binary
pub fn fieldkit_bin() -> String {
    std::env::var("CARGO_BIN_EXE_fieldkit").unwrap_or_else(|_| "target/debug/fieldkit".to_string())
}

/// Creates a Command with an isolated config directory.
/// Pass the same directory to several commands to share configuration.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(fieldkit_bin());
    cmd.env("FIELDKIT_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command against a fresh, empty config directory.
pub fn run_isolated(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, temp_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Runs a command against `config_dir`.
pub fn run_with_config(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Writes `config.toml` into `config_dir`.
pub fn write_config(config_dir: &Path, content: &str) {
    fs::create_dir_all(config_dir).expect("Failed to create config dir");
    fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
}

/// Creates a file of `size` bytes named `name` inside `dir`.
pub fn sized_file(dir: &Path, name: &str, size: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, vec![b'x'; size]).expect("Failed to write test file");
    path
}

/// Stdout trimmed of the trailing newline.
pub fn stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

/// Stdout parsed as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}

/// Asserts the exit code, showing stderr on failure.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}
