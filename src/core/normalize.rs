//! # Output Normalization Module / 输出规范化模块
//!
//! Before a block's captured output is compared against its expectation,
//! both sides pass through the same normalization: debug-trace lines (and
//! their indented continuation lines) are dropped and the trailing newline
//! is stripped. This lets verbose harnesses emit `DEBUG:` traces without
//! breaking the comparison.
//!
//! 在将块捕获的输出与期望值比较之前，双方都经过相同的规范化：
//! 调试跟踪行（及其缩进的续行）会被移除，并去掉末尾的换行。
//! 这使得冗长的输出可以包含 `DEBUG:` 跟踪而不破坏比较。

/// Prefix identifying a debug-trace line. / 标识调试跟踪行的前缀。
pub const DEBUG_MARKER: &str = "DEBUG:";

/// Normalizes text for comparison. The transformation is idempotent:
/// normalizing an already-normalized string is a no-op.
///
/// 规范化用于比较的文本。该变换是幂等的：
/// 对已规范化的字符串再次规范化不会有任何变化。
pub fn normalize(s: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut in_debug = false;

    for line in s.lines() {
        if line.trim_start().starts_with(DEBUG_MARKER) {
            in_debug = true;
            continue;
        }
        if in_debug && (line.starts_with(' ') || line.starts_with('\t')) {
            // Wrapped continuation of the debug trace above.
            // 上方调试跟踪的换行续行。
            continue;
        }
        in_debug = false;
        kept.push(line);
    }

    let joined = kept.join("\n");
    joined.trim_end_matches('\n').to_string()
}
