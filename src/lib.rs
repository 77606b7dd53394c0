//! # Block Runner Library / Block Runner 库
//!
//! This library provides the core functionality for the Block Runner tool,
//! a declarative test harness driven by plain-text suite files.
//!
//! 此库为 Block Runner 工具提供核心功能，
//! 这是一个由纯文本套件文件驱动的声明式测试夹具。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, suite parser and the block execution engine
//! - `infra` - Infrastructure services like process capture and file system helpers
//! - `reporting` - Console, HTML and JSON result reporting
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、套件解析器和块执行引擎
//! - `infra` - 基础设施服务，如进程捕获和文件系统辅助
//! - `reporting` - 控制台、HTML 和 JSON 结果报告
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use crate::core::models;
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::normalize;
pub use crate::core::parser;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
