//! # Suite Initialization Module / 套件初始化模块
//!
//! This module creates a starter suite file (and optionally a
//! `Harness.toml`) through a small interactive wizard, so a new project can
//! see a working block of each kind before writing its own.
//!
//! 此模块通过一个小型交互式向导创建入门套件文件
//! （可选生成 `Harness.toml`），让新项目在编写自己的套件之前
//! 先看到每种块的可用示例。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

use crate::core::config::HarnessConfig;
use crate::infra::t;

/// A minimal working suite: one block of each kind, plus a stray comment
/// line that the lenient parser skips and a DEBUG trace that normalization
/// removes. Script continuation lines are fully de-indented on parse, so
/// the sample deliberately avoids nested indentation.
///
/// 一个最小可用套件：每种块各一个，外加一条宽容解析器会跳过的
/// 零散注释行和一条规范化会移除的 DEBUG 跟踪。
/// 脚本续行在解析时会被完全去缩进，因此示例有意避免嵌套缩进。
const SAMPLE_SUITE: &str = r#"This line is not a marker; the lenient parser skips it.

sh> echo hello
<<< hello

sh> printf 'DEBUG: noisy trace\nhello again\n'
<<< hello again

py> print(40 + 2)
<<< 42

py>
    x = 6 * 7
    print(x)
<<< 42
"#;

/// Runs the wizard to generate a starter suite file.
///
/// In non-interactive mode the default paths are used and existing files
/// are overwritten without prompting.
///
/// 运行向导以生成入门套件文件。
/// 在非交互模式下使用默认路径，且覆盖现有文件时不会提示。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let theme = ColorfulTheme::default();
    let default_config = HarnessConfig::default();

    if !non_interactive {
        println!("\n{}", t!("init.wizard_welcome", locale = language).cyan().bold());
        println!("{}", t!("init.wizard_description", locale = language));
    }

    let suite_path = if non_interactive {
        default_config.suite.display().to_string()
    } else {
        Input::with_theme(&theme)
            .with_prompt(t!("init.suite_path_prompt", locale = language).to_string())
            .default(default_config.suite.display().to_string())
            .interact_text()
            .context(t!("init.user_input_failed", locale = language).to_string())?
    };
    let suite_path = Path::new(&suite_path);

    if suite_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(
                t!("init.overwrite_prompt", locale = language, path = suite_path.display())
                    .to_string(),
            )
            .default(false)
            .interact()
            .context(t!("init.user_input_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    write_sample_suite(suite_path, language)?;

    if non_interactive {
        return Ok(());
    }

    let write_config = Confirm::with_theme(&theme)
        .with_prompt(t!("init.write_config_prompt", locale = language).to_string())
        .default(false)
        .interact()
        .context(t!("init.user_input_failed", locale = language).to_string())?;

    if write_config {
        let interpreter: String = Input::with_theme(&theme)
            .with_prompt(t!("init.interpreter_prompt", locale = language).to_string())
            .default(default_config.interpreter.clone())
            .interact_text()
            .context(t!("init.user_input_failed", locale = language).to_string())?;

        let config = HarnessConfig {
            language: language.to_string(),
            interpreter,
            suite: suite_path.to_path_buf(),
            ..default_config
        };
        write_config_file(Path::new("Harness.toml"), &config, language)?;
    }

    println!("{}", t!("init.usage_hint", locale = language));
    Ok(())
}

fn write_sample_suite(path: &Path, language: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| t!("init.write_failed", locale = language, path = parent.display()))?;
        }
    }
    fs::write(path, SAMPLE_SUITE)
        .with_context(|| t!("init.write_failed", locale = language, path = path.display()))?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init.success_created", locale = language, path = path.display()).bold()
    );
    Ok(())
}

fn write_config_file(path: &Path, config: &HarnessConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context(t!("init.serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string)
        .with_context(|| t!("init.write_failed", locale = language, path = path.display()))?;

    println!(
        "{} {}",
        "✔".green(),
        t!("init.success_created", locale = language, path = path.display()).bold()
    );
    Ok(())
}
