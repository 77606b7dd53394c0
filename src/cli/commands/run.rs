// src/cli/commands/run.rs

use anyhow::Result;
use colored::*;
use std::{path::PathBuf, time::Duration};

use crate::{
    core::{
        config::HarnessConfig,
        execution::{self, RunOptions},
        models::BlockResult,
        parser,
    },
    infra::{self, t},
    reporting,
};

/// Drives one complete suite run: load config, parse the suite, execute
/// every block in order, render reports, and fail iff any block mismatched.
///
/// 驱动一次完整的套件运行：加载配置、解析套件、按顺序执行每个块、
/// 生成报告，并在存在不匹配的块时返回失败。
#[allow(clippy::too_many_arguments)]
pub async fn execute(
    suite: Option<PathBuf>,
    config: Option<PathBuf>,
    strict: bool,
    interpreter: Option<String>,
    timeout_secs: Option<u64>,
    html: Option<PathBuf>,
    json: Option<PathBuf>,
    lang: Option<String>,
) -> Result<()> {
    let config = HarnessConfig::load(config.as_deref())?;
    // An explicit --lang wins over the config file's language.
    let locale = lang.unwrap_or_else(|| config.language.clone());
    rust_i18n::set_locale(&locale);

    // A suite given on the command line wins; otherwise the config's
    // `suite` (defaulting to `UnitTest/init-test.in`) is run.
    let suite = suite.unwrap_or_else(|| config.suite.clone());
    let suite_path = infra::fs::resolve_suite_path(&suite)?;
    println!(
        "{}",
        t!("run.loading_suite", locale = &locale, path = suite_path.display())
    );

    let strict = strict || config.strict;
    if strict {
        println!("{}", t!("run.strict_mode", locale = &locale).cyan());
    }

    let blocks = parser::parse_suite(&suite_path, strict)?;
    println!(
        "{}",
        t!("run.parsed_blocks", locale = &locale, count = blocks.len()).cyan()
    );
    if blocks.is_empty() {
        println!("{}", t!("run.no_blocks", locale = &locale).yellow());
        return Ok(());
    }

    let options = RunOptions {
        interpreter: interpreter.unwrap_or(config.interpreter),
        timeout: timeout_secs
            .or(config.timeout_secs)
            .map(Duration::from_secs),
    };

    let results = execution::run_suite(&blocks, &options).await;

    reporting::console::print_summary(&results, &locale);

    if let Some(report_path) = &html {
        println!(
            "\n{}",
            t!("run.html_report_generating", locale = &locale, path = report_path.display())
        );
        if let Err(e) = reporting::html::generate_html_report(&results, report_path, &locale) {
            eprintln!("{} {}", t!("run.html_report_failed", locale = &locale).red(), e);
        }
    }
    if let Some(report_path) = &json {
        println!(
            "\n{}",
            t!("run.json_report_generating", locale = &locale, path = report_path.display())
        );
        if let Err(e) = reporting::json::write_json_report(&results, &suite_path, report_path) {
            eprintln!("{} {}", t!("run.json_report_failed", locale = &locale).red(), e);
        }
    }

    let failures: Vec<&BlockResult> = results.iter().filter(|r| r.is_failure()).collect();
    if !failures.is_empty() {
        reporting::console::print_failure_details(&failures, &locale);
        anyhow::bail!(t!("run.suite_failed", locale = &locale, count = failures.len()));
    }

    println!("\n{}", t!("run.all_matched", locale = &locale).green().bold());
    Ok(())
}
