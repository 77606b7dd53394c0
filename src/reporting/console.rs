//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the final suite summary and, for blocks that did not
//! match, a detailed per-failure section with the raw expected and actual
//! values for debugging.
//!
//! 此模块打印最终的套件摘要，并为不匹配的块打印详细的失败信息，
//! 包括用于调试的原始期望值和实际值。

use colored::*;

use crate::core::models::{BlockResult, RunSummary};
use crate::infra::t;

/// Prints a formatted summary of all block results, one table row per
/// block, followed by the final passed/failed tally.
///
/// 打印所有块结果的格式化摘要，每个块一行，
/// 最后是通过/失败的总计数。
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   - Matched          | Step 1   |      0.01s
///   - Output Mismatch  | Step 2   |      0.02s
///
/// 1 passed, 1 failed
/// ```
pub fn print_summary(results: &[BlockResult], locale: &str) {
    println!("\n{}", t!("report.summary_banner", locale = locale).bold());

    for result in results {
        let status_str = result.status_str(locale);
        let status_colored = if result.is_failure() {
            status_str.red()
        } else {
            status_str.green()
        };
        let name = t!("report.step_label", locale = locale, step = result.step());
        let duration_str = format!("{:.2?}", result.duration());

        println!("  - {:<18} | {:<8} | {:>10}", status_colored, name, duration_str);
    }

    let summary = RunSummary::from_results(results);
    println!(
        "\n{}, {}",
        t!("report.passed_count", locale = locale, count = summary.passed).green(),
        t!("report.failed_count", locale = locale, count = summary.failed).red()
    );
}

/// Prints detailed information for every block that failed to match: the
/// payload that ran, the raw (pre-normalization) expected and actual
/// values, and any stderr or error description captured along the way.
///
/// 为每个未匹配的块打印详细信息：运行的内容、
/// 原始（规范化前的）期望值和实际值，
/// 以及过程中捕获的 stderr 或错误描述。
pub fn print_failure_details(failures: &[&BlockResult], locale: &str) {
    if failures.is_empty() {
        return;
    }

    println!("\n{}", t!("report.failure_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, result) in failures.iter().enumerate() {
        let step_label = t!("report.step_label", locale = locale, step = result.step());
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failures.len(),
            t!("report.header_failure", locale = locale).red(),
            step_label.cyan()
        );

        if let BlockResult::Mismatched {
            block,
            stdout,
            stderr,
            detail,
            ..
        } = result
        {
            println!("\n{}", t!("report.payload_label", locale = locale).yellow());
            println!("{}", block.payload);
            println!("  {} {:?}", t!("run.expected_label", locale = locale), block.expected);
            println!("  {} {:?}", t!("run.got_label", locale = locale), stdout);
            if let Some(detail) = detail {
                println!("{}", t!("run.error_detail", locale = locale, detail = detail).red());
            }
            if !stderr.is_empty() {
                println!("{}", t!("run.stderr_header", locale = locale));
                print!("{}", stderr);
            }
            println!("{}", "-".repeat(80));
        }
    }
}

/// Gets the error output from a block result for display.
///
/// 获取块结果的错误输出以供显示。
pub fn get_error_output_from_result(result: &BlockResult, locale: &str) -> String {
    match result {
        BlockResult::Mismatched {
            stdout,
            stderr,
            detail,
            ..
        } => {
            let mut sections = Vec::new();
            if let Some(detail) = detail {
                sections.push(detail.clone());
            }
            if !stdout.is_empty() {
                sections.push(stdout.clone());
            }
            if !stderr.is_empty() {
                sections.push(stderr.clone());
            }
            if sections.is_empty() {
                t!("report.no_error_output", locale = locale).to_string()
            } else {
                sections.join("\n")
            }
        }
        _ => t!("report.no_error_output", locale = locale).to_string(),
    }
}
