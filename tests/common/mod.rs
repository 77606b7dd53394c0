// Shared test helpers for integration tests. Not every test binary uses
// every helper.
#![allow(dead_code)]
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes a suite file with the given content into the temp dir and
/// returns its full path.
pub fn write_suite(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write suite file");
    path
}

/// A suite whose first block fails (non-zero exit) and whose second block
/// passes. Used to verify that one failure never blocks later blocks.
pub const FAILURE_ISOLATION_SUITE: &str = "\
sh> exit 1
<<<

sh> echo ok
<<< ok
";

/// Writes a Harness.toml into the temp dir and returns its path.
pub fn write_config(temp_dir: &TempDir, content: &str) -> PathBuf {
    let path = temp_dir.path().join("Harness.toml");
    fs::write(&path, content).expect("Failed to write Harness.toml");
    path
}
