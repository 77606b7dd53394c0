//! # CLI Integration Tests / CLI 集成测试
//!
//! End-to-end tests that run the `block-runner` binary against fixture
//! suite files and assert on exit codes and console output. Script blocks
//! are executed with `--interpreter sh` so the tests do not depend on a
//! Python installation.
//!
//! 端到端测试：针对夹具套件文件运行 `block-runner` 二进制文件，
//! 并断言退出码和控制台输出。脚本块通过 `--interpreter sh` 执行，
//! 因此测试不依赖 Python 安装。

#![cfg(unix)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn runner() -> Command {
    let mut cmd = Command::cargo_bin("block-runner").unwrap();
    cmd.arg("--lang").arg("en");
    cmd
}

/// Runs the full smoke suite and asserts overall success, the per-block
/// MATCH lines, and the final tally.
///
/// 运行完整冒烟套件，断言总体成功、每块的 MATCH 行以及最终计数。
#[test]
fn test_successful_run() {
    let mut cmd = runner();
    cmd.arg("run")
        .arg("tests/fixtures/success.in")
        .arg("--interpreter")
        .arg("sh");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ALL BLOCKS MATCHED"))
        .stdout(predicate::str::contains("3 passed"))
        .stdout(predicate::str::contains("0 failed"));
}

/// A mismatching block must fail the run and print both the expected and
/// the actual raw values.
///
/// 不匹配的块必须使运行失败，并打印期望值和实际原始值。
#[test]
fn test_mismatch_fails_the_run() {
    let mut cmd = runner();
    cmd.arg("run").arg("tests/fixtures/mismatch.in");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("MISMATCH"))
        .stdout(predicate::str::contains("goodbye"))
        .stdout(predicate::str::contains("hello"));
}

/// One failed block must not stop the next one: the summary reports one
/// failure and one pass, and the process exits non-zero.
///
/// 一个失败的块不能阻止下一个块：摘要报告一个失败和一个通过，
/// 进程以非零退出。
#[test]
fn test_failure_isolation_via_cli() {
    let mut cmd = runner();
    cmd.arg("run").arg("tests/fixtures/failure_isolation.in");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("1 passed"))
        .stdout(predicate::str::contains("1 failed"))
        .stdout(predicate::str::contains("Step 2"));
}

#[test]
fn test_lenient_run_skips_stray_lines() {
    let mut cmd = runner();
    cmd.arg("run").arg("tests/fixtures/strict.in");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Parsed 1 block(s)"));
}

#[test]
fn test_strict_run_rejects_stray_lines() {
    let mut cmd = runner();
    cmd.arg("run").arg("tests/fixtures/strict.in").arg("--strict");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized line"));
}

#[test]
fn test_suite_with_no_blocks_succeeds() {
    let mut cmd = runner();
    cmd.arg("run").arg("tests/fixtures/empty.in");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no runnable blocks"));
}

#[test]
fn test_missing_suite_file_is_fatal() {
    let mut cmd = runner();
    cmd.arg("run").arg("tests/fixtures/definitely-missing.in");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read test suite"));
}

#[test]
fn test_html_report_is_written() {
    let temp_dir = tempfile::tempdir().unwrap();
    let report_path = temp_dir.path().join("report.html");

    let mut cmd = runner();
    cmd.arg("run")
        .arg("tests/fixtures/failure_isolation.in")
        .arg("--html")
        .arg(&report_path);

    cmd.assert().failure();

    let html = std::fs::read_to_string(&report_path).unwrap();
    assert!(html.contains("Suite Execution Report"));
    assert!(html.contains("status-Matched"));
    assert!(html.contains("status-Mismatched"));
}

#[test]
fn test_json_report_is_written() {
    let temp_dir = tempfile::tempdir().unwrap();
    let report_path = temp_dir.path().join("report.json");

    let mut cmd = runner();
    cmd.arg("run")
        .arg("tests/fixtures/failure_isolation.in")
        .arg("--json")
        .arg(&report_path);

    cmd.assert().failure();

    let raw = std::fs::read_to_string(&report_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(report["summary"]["passed"], 1);
    assert_eq!(report["summary"]["failed"], 1);
    assert_eq!(report["results"].as_array().unwrap().len(), 2);
}

/// The zh-CN locale changes the console messages without affecting the
/// exit code logic.
///
/// zh-CN 语言环境会改变控制台消息，但不影响退出码逻辑。
#[test]
fn test_localized_output() {
    let mut cmd = Command::cargo_bin("block-runner").unwrap();
    cmd.arg("--lang")
        .arg("zh-CN")
        .arg("run")
        .arg("tests/fixtures/mismatch.in");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("不匹配"));
}

#[test]
fn test_init_non_interactive_creates_sample_suite() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = runner();
    cmd.current_dir(temp_dir.path()).arg("init").arg("--non-interactive");
    cmd.assert().success();

    let suite_path = temp_dir.path().join("UnitTest/init-test.in");
    let content = std::fs::read_to_string(&suite_path).unwrap();
    assert!(content.contains("sh> echo hello"));
    assert!(content.contains("py>"));
    assert!(content.contains("<<<"));
}

/// The sample suite written by `init` must itself pass when run with a
/// shell interpreter substituted for the script blocks.
///
/// `init` 写出的示例套件在用 shell 解释器替代脚本块时必须自身通过解析。
#[test]
fn test_init_sample_suite_parses_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = runner();
    cmd.current_dir(temp_dir.path()).arg("init").arg("--non-interactive");
    cmd.assert().success();

    let suite_path = temp_dir.path().join("UnitTest/init-test.in");
    let content = std::fs::read_to_string(&suite_path).unwrap();
    let blocks = block_runner::core::parser::parse_str(&content, false).unwrap();
    assert_eq!(blocks.len(), 4);
}
