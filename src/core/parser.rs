//! # Suite Parser Module / 套件解析器模块
//!
//! This module turns a plain-text suite file into an ordered list of typed
//! blocks. The scanner walks the physical lines exactly once, forward only,
//! and never backtracks; blocks come out in the order their markers appear.
//!
//! 此模块将纯文本套件文件转换为有序的类型化块列表。
//! 扫描器对物理行只进行一次正向扫描，绝不回溯；
//! 块按其标记出现的顺序产出。

use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::core::models::{Block, BlockKind};
use crate::infra::t;

/// Marker opening a shell command block. / 开启 shell 命令块的标记。
pub const SHELL_MARKER: &str = "sh>";
/// Marker opening a script snippet block. / 开启脚本片段块的标记。
pub const SCRIPT_MARKER: &str = "py>";
/// Marker carrying the expected output of the preceding block.
/// 携带前一个块期望输出的标记。
pub const EXPECTED_MARKER: &str = "<<<";

/// Parses a suite file into an ordered list of blocks.
/// A missing or unreadable file is the only fatal error of the whole run.
///
/// 将套件文件解析为有序的块列表。
/// 文件缺失或不可读是整个运行中唯一的致命错误。
pub fn parse_suite(path: &Path, strict: bool) -> Result<Vec<Block>> {
    let content = crate::infra::fs::read_suite(path)?;
    parse_str(&content, strict).with_context(|| format!("while parsing {}", path.display()))
}

/// Parses suite text into blocks. With `strict` set, any non-blank line that
/// is neither a marker nor part of a block aborts with its line number;
/// otherwise such lines are skipped, so comments and stray text are allowed.
///
/// 将套件文本解析为块。设置 `strict` 时，任何既不是标记也不属于某个块的
/// 非空行都会带着行号中止解析；否则这些行会被跳过，
/// 因此允许注释和零散文本。
pub fn parse_str(input: &str, strict: bool) -> Result<Vec<Block>> {
    let lines: Vec<&str> = input.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        let stripped = line.trim_start();

        if let Some(rest) = stripped.strip_prefix(SHELL_MARKER) {
            let marker_line = i + 1;
            let payload = rest.trim_start().to_string();
            i += 1;
            let expected = take_expected(&lines, &mut i);
            blocks.push(Block {
                kind: BlockKind::Shell,
                payload,
                expected,
                line: marker_line,
            });
            continue;
        }

        if let Some(rest) = stripped.strip_prefix(SCRIPT_MARKER) {
            let marker_line = i + 1;
            let mut code_lines = Vec::new();
            let inline = rest.trim_start();
            if !inline.is_empty() {
                code_lines.push(inline.to_string());
            }
            i += 1;
            // Both the inline and the block-indented layout accept the same
            // continuation lines: indented, fully de-indented on collection.
            // 内联布局和块缩进布局接受相同的续行：有缩进，收集时完全去缩进。
            while i < lines.len() && is_continuation(lines[i]) {
                code_lines.push(lines[i].trim_start().to_string());
                i += 1;
            }
            let expected = take_expected(&lines, &mut i);
            blocks.push(Block {
                kind: BlockKind::Script,
                payload: code_lines.join("\n"),
                expected,
                line: marker_line,
            });
            continue;
        }

        if strict {
            bail!(t!("error.unrecognized_line", line = i + 1, content = line));
        }
        // Unknown line: deliberate forgiving-parser policy, skip it.
        // 未知行：有意的宽容解析策略，跳过。
        i += 1;
    }

    Ok(blocks)
}

/// A continuation line starts with a run of four spaces or a single tab.
/// The two styles may be mixed inside one run; each line is tested
/// independently and no normalization between them takes place.
/// 续行以四个空格或一个制表符开头。两种风格可以在同一段中混用；
/// 每行独立判断，彼此之间不做规范化。
fn is_continuation(line: &str) -> bool {
    line.starts_with("    ") || line.starts_with('\t')
}

/// Consumes blank lines and then, if the next line carries the expected
/// marker, its trimmed remainder. A non-marker line is left unconsumed and
/// the expected output defaults to the empty string.
/// 跳过空行后，如果下一行带有期望标记，取其去除空白后的剩余部分。
/// 非标记行不会被消费，期望输出默认为空字符串。
fn take_expected(lines: &[&str], i: &mut usize) -> String {
    while *i < lines.len() && lines[*i].trim().is_empty() {
        *i += 1;
    }
    if *i < lines.len() {
        if let Some(rest) = lines[*i].trim_start().strip_prefix(EXPECTED_MARKER) {
            *i += 1;
            return rest.trim_start().to_string();
        }
    }
    String::new()
}
