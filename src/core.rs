//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Block Runner,
//! including data models, configuration, the suite parser, output
//! normalization and the block execution engine.
//!
//! 此模块包含 Block Runner 的核心功能，
//! 包括数据模型、配置、套件解析器、输出规范化和块执行逻辑。

pub mod models;
pub mod config;
pub mod parser;
pub mod normalize;
pub mod execution;

// Re-exports
pub use models::{Block, BlockKind, BlockResult, RunSummary};
pub use config::HarnessConfig;
pub use execution::run_suite;
pub use parser::parse_suite;
