//! # Block Execution Engine Module / 块执行引擎模块
//!
//! This module runs parsed blocks strictly sequentially, in file order.
//! Both block kinds share one execution strategy: spawn a subordinate
//! process, capture its streams, and compare normalized stdout against the
//! block's expectation. Every failure is converted into a `BlockResult`;
//! the engine itself never fails and never skips a block.
//!
//! 此模块按文件顺序严格串行地运行已解析的块。
//! 两种块共享同一执行策略：派生子进程、捕获其输出流，
//! 并将规范化后的 stdout 与块的期望值比较。
//! 所有失败都会转换为 `BlockResult`；引擎本身不会失败，也不会跳过任何块。

use colored::*;
use std::io::Write;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

use crate::{
    core::{
        config,
        models::{Block, BlockKind, BlockResult, FailureReason, Outcome},
        normalize::normalize,
    },
    infra::{command, t},
};

/// Knobs the engine needs for one suite run.
/// 引擎在一次套件运行中需要的参数。
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Interpreter command for script blocks, shlex-split before spawning.
    /// 脚本块的解释器命令，启动前进行 shlex 拆分。
    pub interpreter: String,
    /// Optional per-block timeout. `None` means a hung block hangs the run.
    /// 可选的单块超时。`None` 表示挂起的块会使整个运行挂起。
    pub timeout: Option<Duration>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            interpreter: config::default_interpreter(),
            timeout: None,
        }
    }
}

/// Runs every block in order, one at a time, each to completion before the
/// next begins. Failure isolation: one block's failure never prevents the
/// execution of subsequent blocks.
///
/// 按顺序逐个运行所有块，每个块执行完毕后才开始下一个。
/// 失败隔离：一个块的失败绝不会阻止后续块的执行。
pub async fn run_suite(blocks: &[Block], options: &RunOptions) -> Vec<BlockResult> {
    let mut results = Vec::with_capacity(blocks.len());
    for (idx, block) in blocks.iter().enumerate() {
        results.push(run_block(block, idx + 1, options).await);
    }
    results
}

/// Executes a single block and checks its output against the expectation.
/// 执行单个块并将其输出与期望值比较。
pub async fn run_block(block: &Block, step: usize, options: &RunOptions) -> BlockResult {
    println!("{}", t!("run.step_banner", step = step).blue());
    match block.kind {
        BlockKind::Shell => {
            println!("{} {}", t!("run.command_prefix").blue(), block.payload);
        }
        BlockKind::Script => {
            println!("{}", t!("run.code_prefix").blue());
            println!("{}", block.payload);
        }
    }

    let start = Instant::now();
    let execution_future = execute(block, options);

    let outcome = if let Some(timeout) = options.timeout {
        match tokio::time::timeout(timeout, execution_future).await {
            Ok(outcome) => outcome,
            Err(_) => {
                println!(
                    "{}",
                    t!("run.step_timeout", step = step, timeout = timeout.as_secs()).red()
                );
                println!("{}", "-".repeat(40));
                return BlockResult::Mismatched {
                    step,
                    block: block.clone(),
                    stdout: String::new(),
                    stderr: String::new(),
                    reason: FailureReason::Timeout,
                    duration: timeout,
                    detail: Some(t!("run.timeout_message").to_string()),
                };
            }
        }
    } else {
        execution_future.await
    };
    let duration = start.elapsed();

    if outcome.ok() {
        println!("{}", t!("run.step_ok").green());
    } else {
        println!("{}", t!("run.step_failed").red());
        if let Some(detail) = &outcome.detail {
            println!("{}", t!("run.error_detail", detail = detail).red());
        }
    }
    if !outcome.stdout.is_empty() {
        println!("{}", t!("run.stdout_header"));
        print!("{}", outcome.stdout);
    }
    if !outcome.stderr.is_empty() {
        println!("{}", t!("run.stderr_header"));
        print!("{}", outcome.stderr);
    }

    // An execution failure is a hard failure regardless of output: text
    // alignment alone never counts as a match.
    // 执行失败是硬性失败，与输出无关：仅文本一致绝不算匹配。
    let matched = outcome.ok() && normalize(&outcome.stdout) == normalize(&block.expected);

    let result = if matched {
        println!("{}", t!("run.match_ok").green());
        BlockResult::Matched {
            step,
            block: block.clone(),
            stdout: outcome.stdout,
            duration,
        }
    } else {
        println!("{}", t!("run.mismatch").red());
        println!("  {} {:?}", t!("run.expected_label"), block.expected);
        println!("  {} {:?}", t!("run.got_label"), outcome.stdout);
        BlockResult::Mismatched {
            step,
            block: block.clone(),
            stdout: outcome.stdout,
            stderr: outcome.stderr,
            reason: outcome.reason.unwrap_or(FailureReason::Mismatch),
            duration,
            detail: outcome.detail,
        }
    };
    println!("{}", "-".repeat(40));
    result
}

/// Dispatches to the execution strategy for the block's kind.
async fn execute(block: &Block, options: &RunOptions) -> Outcome {
    match block.kind {
        BlockKind::Shell => execute_shell(&block.payload).await,
        BlockKind::Script => execute_script(&block.payload, &options.interpreter).await,
    }
}

/// Runs a shell command line through the system shell and captures its
/// streams. `ok` is determined solely by the exit status.
/// 通过系统 shell 运行一条命令并捕获其输出流。
/// `ok` 仅由退出状态决定。
async fn execute_shell(payload: &str) -> Outcome {
    let mut cmd = if cfg!(windows) {
        let mut cmd = tokio::process::Command::new("cmd");
        cmd.arg("/C").arg(payload);
        cmd
    } else {
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c").arg(payload);
        cmd
    };
    cmd.kill_on_drop(true);

    let captured = command::spawn_and_capture(cmd).await;
    match captured.status {
        Ok(status) if status.success() => Outcome::success(captured.stdout, captured.stderr),
        Ok(status) => Outcome::failed(
            FailureReason::NonZeroExit,
            t!("run.exit_code", code = status).to_string(),
            captured.stdout,
            captured.stderr,
        ),
        Err(e) => Outcome::failed(
            FailureReason::Spawn,
            e.to_string(),
            captured.stdout,
            captured.stderr,
        ),
    }
}

/// Runs a script snippet in a fresh interpreter process. The snippet is
/// written to a temporary file that lives exactly as long as the execution,
/// so each block starts from an isolated, empty interpreter state. Partial
/// stdout printed before an interpreter error is retained.
///
/// 在全新的解释器进程中运行脚本片段。片段被写入一个
/// 生命周期与执行完全一致的临时文件，因此每个块都从隔离的、
/// 空白的解释器状态开始。解释器出错前打印的部分 stdout 会被保留。
async fn execute_script(code: &str, interpreter: &str) -> Outcome {
    let script_file = match write_snippet(code) {
        Ok(file) => file,
        Err(e) => {
            return Outcome::failed(
                FailureReason::Spawn,
                e.to_string(),
                String::new(),
                String::new(),
            );
        }
    };

    let parts = match shlex::split(interpreter) {
        Some(parts) if !parts.is_empty() => parts,
        _ => {
            return Outcome::failed(
                FailureReason::Spawn,
                t!("run.interpreter_empty").to_string(),
                String::new(),
                String::new(),
            );
        }
    };

    let mut cmd = tokio::process::Command::new(&parts[0]);
    cmd.args(&parts[1..])
        .arg(script_file.path())
        .kill_on_drop(true);

    let captured = command::spawn_and_capture(cmd).await;
    // `script_file` is still alive here; it is removed when it drops.
    match captured.status {
        Ok(status) if status.success() => Outcome::success(captured.stdout, captured.stderr),
        Ok(status) => Outcome::failed(
            FailureReason::Script,
            t!("run.exit_code", code = status).to_string(),
            captured.stdout,
            captured.stderr,
        ),
        Err(e) => Outcome::failed(
            FailureReason::Spawn,
            e.to_string(),
            captured.stdout,
            captured.stderr,
        ),
    }
}

/// Writes a snippet to a named temporary file the interpreter can open.
fn write_snippet(code: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("block-runner-")
        .suffix(".py")
        .tempfile()?;
    file.write_all(code.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;
    Ok(file)
}
