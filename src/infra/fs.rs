use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Expands `~` and environment variables in a user-supplied suite path.
/// 展开用户提供的套件路径中的 `~` 和环境变量。
pub fn resolve_suite_path(raw: &Path) -> Result<PathBuf> {
    let raw_str = raw.to_string_lossy();
    let expanded = shellexpand::full(raw_str.as_ref())
        .with_context(|| format!("Failed to expand suite path: {raw_str}"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Reads a suite file to a string. This is the only fatal I/O of a run:
/// everything after a successful read is isolated per block.
/// 将套件文件读取为字符串。这是一次运行中唯一致命的 I/O：
/// 成功读取之后的一切都按块隔离。
pub fn read_suite(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| t!("error.suite_read_failed", path = path.display()))
}
