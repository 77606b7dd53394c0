//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the block
//! runner. It includes the parsed block records, per-execution outcomes,
//! failure reasons and the terminal per-block results.
//!
//! 此模块定义了整个块运行器中使用的核心数据结构。
//! 它包括解析出的块记录、单次执行结果、失败原因和每个块的最终结果。

use crate::infra::t;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The kind of a parsed block, which selects the execution strategy.
/// 已解析块的类型，决定执行策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// A single shell command line, run through the system shell.
    /// 单行 shell 命令，通过系统 shell 运行。
    Shell,
    /// A multi-line script snippet, handed to an external interpreter.
    /// 多行脚本片段，交给外部解释器执行。
    Script,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Shell => write!(f, "shell"),
            BlockKind::Script => write!(f, "script"),
        }
    }
}

/// One parsed unit of a suite file: a payload to execute and the literal
/// text its captured output must match after normalization. Blocks are
/// created once per parse pass and never mutated afterwards.
///
/// 套件文件中的一个解析单元：要执行的内容以及其捕获输出在规范化后
/// 必须匹配的字面文本。块在解析时创建一次，之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Which execution strategy this block uses / 该块使用的执行策略
    pub kind: BlockKind,
    /// The command line (shell) or joined de-indented code (script).
    /// 命令行（shell）或合并且去缩进后的代码（script）。
    pub payload: String,
    /// The expected stdout, possibly empty. / 期望的标准输出，可能为空。
    pub expected: String,
    /// 1-based line number of the opening marker, for diagnostics only.
    /// 起始标记所在的行号（从 1 开始），仅用于诊断。
    pub line: usize,
}

impl Block {
    pub fn shell(payload: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Shell,
            payload: payload.into(),
            expected: expected.into(),
            line: 0,
        }
    }

    pub fn script(payload: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Script,
            payload: payload.into(),
            expected: expected.into(),
            line: 0,
        }
    }
}

/// Enumerates the possible reasons a block did not match.
/// This helps in categorizing errors for reporting.
/// 枚举块不匹配的可能原因。
/// 这有助于对错误进行分类，以便报告。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum FailureReason {
    /// The subordinate process could not be started at all.
    /// 子进程根本无法启动。
    Spawn,
    /// The shell command ran but returned a non-zero exit status.
    /// shell 命令已运行，但返回了非零退出状态。
    NonZeroExit,
    /// The interpreter reported an error while running the snippet.
    /// 解释器在运行脚本片段时报告了错误。
    Script,
    /// Execution succeeded but the normalized output differs from expected.
    /// 执行成功，但规范化后的输出与期望不同。
    Mismatch,
    /// The block exceeded the configured (opt-in) timeout.
    /// 块超过了（可选启用的）超时时间。
    Timeout,
}

/// The raw result of executing one block, before the expectation is checked.
/// `reason` is `None` when the execution itself succeeded.
///
/// 执行一个块的原始结果，尚未与期望值比较。
/// 当执行本身成功时 `reason` 为 `None`。
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    /// Why execution failed, if it did / 执行失败的原因（如果失败）
    pub reason: Option<FailureReason>,
    /// Captured standard output, the only stream that is compared.
    /// 捕获的标准输出，唯一参与比较的流。
    pub stdout: String,
    /// Captured standard error, displayed but never compared.
    /// 捕获的标准错误，仅显示，不参与比较。
    pub stderr: String,
    /// A human-readable error description (spawn failure, exit status) that
    /// is reported for diagnostics but excluded from the comparison.
    /// 人类可读的错误描述（启动失败、退出状态），仅用于诊断，不参与比较。
    pub detail: Option<String>,
}

impl Outcome {
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            reason: None,
            stdout,
            stderr,
            detail: None,
        }
    }

    pub fn failed(reason: FailureReason, detail: String, stdout: String, stderr: String) -> Self {
        Self {
            reason: Some(reason),
            stdout,
            stderr,
            detail: Some(detail),
        }
    }

    /// Whether the execution itself succeeded (exit status 0, no spawn error).
    /// 执行本身是否成功（退出状态为 0，且没有启动错误）。
    pub fn ok(&self) -> bool {
        self.reason.is_none()
    }
}

/// Represents the final, terminal result of a single block execution.
/// A block either matched its expectation or it did not; there are no
/// retries and results are only aggregated into counters afterwards.
///
/// 表示单个块执行的最终结果。
/// 一个块要么与期望匹配，要么不匹配；没有重试，
/// 结果之后只会被聚合为计数器。
#[derive(Debug, Clone, Serialize)]
pub enum BlockResult {
    /// Execution succeeded and the normalized output matched.
    /// 执行成功且规范化后的输出匹配。
    Matched {
        /// 1-based position of the block in the suite / 块在套件中的位置（从 1 开始）
        step: usize,
        /// The block that was executed / 被执行的块
        block: Block,
        /// Raw captured stdout / 原始捕获的标准输出
        stdout: String,
        /// Wall-clock execution time / 执行耗时
        duration: Duration,
    },
    /// Execution failed, or the output did not match the expectation.
    /// 执行失败，或输出与期望不匹配。
    Mismatched {
        step: usize,
        block: Block,
        /// Raw captured stdout (partial output is preserved on failure).
        /// 原始捕获的标准输出（失败时保留部分输出）。
        stdout: String,
        /// Raw captured stderr, displayed for debugging only.
        /// 原始捕获的标准错误，仅用于调试显示。
        stderr: String,
        /// The specific reason for the failure / 失败的具体原因
        reason: FailureReason,
        duration: Duration,
        /// Error description from the executor, if any / 执行器的错误描述（如有）
        detail: Option<String>,
    },
}

impl BlockResult {
    /// Checks if the block failed to match for any reason.
    pub fn is_failure(&self) -> bool {
        matches!(self, BlockResult::Mismatched { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            BlockResult::Mismatched { reason, .. } if *reason == FailureReason::Timeout
        )
    }

    /// Gets the 1-based step number of the block.
    /// 获取块的步骤编号（从 1 开始）。
    pub fn step(&self) -> usize {
        match self {
            BlockResult::Matched { step, .. } => *step,
            BlockResult::Mismatched { step, .. } => *step,
        }
    }

    /// Gets the block that produced this result.
    pub fn block(&self) -> &Block {
        match self {
            BlockResult::Matched { block, .. } => block,
            BlockResult::Mismatched { block, .. } => block,
        }
    }

    /// Gets the raw captured stdout of the block.
    /// 获取块的原始捕获标准输出。
    pub fn stdout(&self) -> &str {
        match self {
            BlockResult::Matched { stdout, .. } => stdout,
            BlockResult::Mismatched { stdout, .. } => stdout,
        }
    }

    /// Gets the wall-clock duration of the block execution.
    /// 获取块执行的耗时。
    pub fn duration(&self) -> Duration {
        match self {
            BlockResult::Matched { duration, .. } => *duration,
            BlockResult::Mismatched { duration, .. } => *duration,
        }
    }

    /// Gets the appropriate CSS class for the block status.
    pub fn status_class(&self) -> &str {
        match self {
            BlockResult::Matched { .. } => "status-Matched",
            BlockResult::Mismatched { reason, .. } => {
                if *reason == FailureReason::Timeout {
                    "status-Timeout"
                } else {
                    "status-Mismatched"
                }
            }
        }
    }

    /// Gets the status of the block result as a string for display.
    /// 以字符串形式获取块结果的状态以供显示。
    pub fn status_str(&self, locale: &str) -> String {
        match self {
            BlockResult::Matched { .. } => {
                t!("report.status_matched", locale = locale).to_string()
            }
            BlockResult::Mismatched { reason, .. } => match reason {
                FailureReason::Spawn => {
                    t!("report.status_spawn_error", locale = locale).to_string()
                }
                FailureReason::NonZeroExit => {
                    t!("report.status_command_failed", locale = locale).to_string()
                }
                FailureReason::Script => {
                    t!("report.status_script_error", locale = locale).to_string()
                }
                FailureReason::Mismatch => {
                    t!("report.status_mismatch", locale = locale).to_string()
                }
                FailureReason::Timeout => {
                    t!("report.status_timeout", locale = locale).to_string()
                }
            },
        }
    }
}

/// Running pass/fail tally over a whole suite execution.
/// 整个套件执行过程中的通过/失败计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_results(results: &[BlockResult]) -> Self {
        let failed = results.iter().filter(|r| r.is_failure()).count();
        Self {
            passed: results.len() - failed,
            failed,
        }
    }

    /// True iff every block in the suite matched.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
