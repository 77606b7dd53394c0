//! # Reporting Module / 报告模块
//!
//! This module handles the presentation of suite results:
//! console summaries, HTML reports and machine-readable JSON summaries.
//!
//! 此模块负责套件结果的呈现：
//! 控制台摘要、HTML 报告和机器可读的 JSON 摘要。

pub mod console;
pub mod html;
pub mod json;
