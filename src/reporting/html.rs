//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders a self-contained HTML page from a finished suite
//! run: summary cards, a results table, and the captured output of every
//! block that failed to match.
//!
//! 此模块将完成的套件运行渲染为独立的 HTML 页面：
//! 摘要卡片、结果表格，以及每个未匹配块的捕获输出。

use anyhow::Result;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;

use crate::core::models::{BlockResult, RunSummary};
use crate::infra::t;
use crate::reporting::console::get_error_output_from_result;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem auto; max-width: 60rem; color: #222; }
h1 { border-bottom: 2px solid #ddd; padding-bottom: 0.5rem; }
.generated { color: #888; font-size: 0.85rem; }
.summary-container { display: flex; gap: 1rem; margin: 1rem 0; }
.summary-item { border: 1px solid #ddd; border-radius: 6px; padding: 0.75rem 1.5rem; text-align: center; }
.summary-item .count { display: block; font-size: 1.6rem; font-weight: bold; }
.passed-text { color: #2e7d32; }
.failed-text { color: #c62828; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 0.5rem 0.75rem; text-align: left; }
.status-Matched { color: #2e7d32; }
.status-Mismatched { color: #c62828; }
.status-Timeout { color: #e65100; }
pre.output-content { background: #f7f7f7; padding: 0.5rem; overflow-x: auto; white-space: pre-wrap; }
"#;

/// Generates a comprehensive HTML report from block results.
///
/// 从块结果生成综合的 HTML 报告。
///
/// # Errors / 错误
/// This function will return an error if the output file cannot be written
/// to the specified path.
///
/// 如果无法将输出文件写入指定路径，此函数会返回错误。
pub fn generate_html_report(
    results: &[BlockResult],
    output_path: &Path,
    locale: &str,
) -> Result<()> {
    let summary = RunSummary::from_results(results);
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let markup: Markup = html! {
        (DOCTYPE)
        html {
            head {
                title { (t!("html_report.title", locale = locale)) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header", locale = locale)) }
                p class="generated" {
                    (t!("html_report.generated_at", locale = locale, time = generated_at))
                }
                div class="summary-container" {
                    div class="summary-item" {
                        span class="count" { (results.len()) }
                        span class="label" { (t!("html_report.summary.total", locale = locale)) }
                    }
                    div class="summary-item" {
                        span class="count passed-text" { (summary.passed) }
                        span class="label" { (t!("html_report.summary.passed", locale = locale)) }
                    }
                    div class="summary-item" {
                        span class="count failed-text" { (summary.failed) }
                        span class="label" { (t!("html_report.summary.failed", locale = locale)) }
                    }
                }
                table {
                    thead {
                        tr {
                            th { (t!("html_report.table.header.step", locale = locale)) }
                            th { (t!("html_report.table.header.kind", locale = locale)) }
                            th { (t!("html_report.table.header.status", locale = locale)) }
                            th { (t!("html_report.table.header.duration", locale = locale)) }
                            th { (t!("html_report.table.header.output", locale = locale)) }
                        }
                    }
                    tbody {
                        @for result in results {
                            tr {
                                td { (result.step()) }
                                td { (result.block().kind) }
                                td class=(result.status_class()) { (result.status_str(locale)) }
                                td { (format!("{:.2}s", result.duration().as_secs_f64())) }
                                td {
                                    @if result.is_failure() {
                                        pre class="output-content" {
                                            (get_error_output_from_result(result, locale))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    fs::write(output_path, markup.into_string())?;
    Ok(())
}
