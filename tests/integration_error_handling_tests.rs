//! # Error Handling Integration Tests / 错误处理集成测试
//!
//! Verifies the error taxonomy at the process boundary: only an unreadable
//! suite or config is fatal; every per-block failure is isolated, reported
//! and followed by the next block.
//!
//! 在进程边界验证错误分类：只有不可读的套件或配置是致命的；
//! 每个块级失败都会被隔离、报告，然后继续执行下一个块。

#![cfg(unix)]

mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn runner() -> Command {
    let mut cmd = Command::cargo_bin("block-runner").unwrap();
    cmd.arg("--lang").arg("en");
    cmd
}

#[test]
fn test_unreadable_suite_aborts_before_execution() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.in");

    let mut cmd = runner();
    cmd.arg("run").arg(&missing);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read test suite"))
        // Nothing was executed: no step banner appears.
        .stdout(predicate::str::contains("--- Running:").not());
}

#[test]
fn test_invalid_config_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = common::write_config(&temp_dir, "strict = not-a-bool\n");
    let suite = common::write_suite(&temp_dir, "a.in", "sh> echo hi\n<<< hi\n");

    let mut cmd = runner();
    cmd.arg("run")
        .arg(&suite)
        .arg("--config")
        .arg(&config_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_config_defaults_apply_to_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = common::write_config(&temp_dir, "interpreter = \"sh\"\n");
    let suite = common::write_suite(&temp_dir, "a.in", "py> echo from-config\n<<< from-config\n");

    let mut cmd = runner();
    cmd.arg("run")
        .arg(&suite)
        .arg("--config")
        .arg(&config_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ALL BLOCKS MATCHED"));
}

/// With no positional suite, the run falls back to the `suite` path from
/// the conventional `Harness.toml` in the working directory.
///
/// 没有位置参数时，运行会回退到工作目录中约定的
/// `Harness.toml` 里的 `suite` 路径。
#[test]
fn test_config_suite_is_used_when_no_positional_is_given() {
    let temp_dir = TempDir::new().unwrap();
    common::write_config(&temp_dir, "suite = \"from-config.in\"\n");
    common::write_suite(&temp_dir, "from-config.in", "sh> echo hi\n<<< hi\n");

    let mut cmd = runner();
    cmd.current_dir(temp_dir.path()).arg("run");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("from-config.in"))
        .stdout(predicate::str::contains("ALL BLOCKS MATCHED"));
}

/// A positional suite still wins over the `suite` configured in
/// `Harness.toml`.
///
/// 位置参数指定的套件仍然优先于 `Harness.toml` 中配置的 `suite`。
#[test]
fn test_positional_suite_overrides_config_suite() {
    let temp_dir = TempDir::new().unwrap();
    common::write_config(&temp_dir, "suite = \"from-config.in\"\n");
    common::write_suite(&temp_dir, "from-config.in", "sh> echo config\n<<< config\n");
    common::write_suite(&temp_dir, "from-cli.in", "sh> echo cli\n<<< cli\n");

    let mut cmd = runner();
    cmd.current_dir(temp_dir.path()).arg("run").arg("from-cli.in");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("from-cli.in"))
        .stdout(predicate::str::contains("ALL BLOCKS MATCHED"));
}

#[test]
fn test_spawn_failure_is_reported_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let suite = common::write_suite(
        &temp_dir,
        "a.in",
        "py> whatever\n<<<\n\nsh> echo fine\n<<< fine\n",
    );

    let mut cmd = runner();
    cmd.arg("run")
        .arg(&suite)
        .arg("--interpreter")
        .arg("this_interpreter_definitely_does_not_exist_12345");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("1 passed"))
        .stdout(predicate::str::contains("1 failed"))
        .stdout(predicate::str::contains("Spawn Error"));
}

#[test]
fn test_failure_details_include_expected_and_got() {
    let temp_dir = TempDir::new().unwrap();
    let suite = common::write_suite(&temp_dir, "a.in", common::FAILURE_ISOLATION_SUITE);

    let mut cmd = runner();
    cmd.arg("run").arg(&suite);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAILURE DETAILS"))
        .stdout(predicate::str::contains("Expected:"))
        .stdout(predicate::str::contains("Got:"));
}

#[test]
fn test_timeout_flag_fails_hung_block() {
    let temp_dir = TempDir::new().unwrap();
    let suite = common::write_suite(
        &temp_dir,
        "a.in",
        "sh> sleep 10\n<<<\n\nsh> echo next\n<<< next\n",
    );

    let mut cmd = runner();
    cmd.arg("run").arg(&suite).arg("--timeout-secs").arg("1");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("timed out"))
        .stdout(predicate::str::contains("1 passed"))
        .stdout(predicate::str::contains("1 failed"));
}
