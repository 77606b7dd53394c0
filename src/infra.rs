//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Block Runner,
//! including subprocess capture, file system helpers and i18n support.
//!
//! 此模块为 Block Runner 提供基础设施服务，
//! 包括子进程捕获、文件系统辅助和国际化支持。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
