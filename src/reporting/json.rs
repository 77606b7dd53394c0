//! # JSON Reporting Module / JSON 报告模块
//!
//! Writes a machine-readable summary of a suite run, suitable for CI
//! pipelines that want to post-process results without scraping the
//! console output.
//!
//! 写入套件运行的机器可读摘要，
//! 适合希望在不抓取控制台输出的情况下后处理结果的 CI 流水线。

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::models::{BlockResult, RunSummary};

/// The top-level JSON document for one suite run.
/// 一次套件运行的顶级 JSON 文档。
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// UTC timestamp of report generation / 报告生成的 UTC 时间戳
    pub generated_at: DateTime<Utc>,
    /// The suite file that was executed / 被执行的套件文件
    pub suite: String,
    /// Aggregated pass/fail counters / 聚合的通过/失败计数
    pub summary: RunSummary,
    /// The full per-block results, in file order / 按文件顺序的完整逐块结果
    pub results: &'a [BlockResult],
}

/// Serializes the results of a run to a pretty-printed JSON file.
/// 将一次运行的结果序列化为带缩进的 JSON 文件。
pub fn write_json_report(results: &[BlockResult], suite: &Path, output_path: &Path) -> Result<()> {
    let report = JsonReport {
        generated_at: Utc::now(),
        suite: suite.display().to_string(),
        summary: RunSummary::from_results(results),
        results,
    };
    let rendered = serde_json::to_string_pretty(&report)?;
    fs::write(output_path, rendered)?;
    Ok(())
}
