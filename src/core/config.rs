use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Harness-wide defaults, loaded from an optional `Harness.toml`.
/// Command-line flags always take precedence over these values.
/// 夹具级默认值，从可选的 `Harness.toml` 加载。
/// 命令行标志始终优先于这些值。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HarnessConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// The interpreter command used for script blocks. May contain arguments
    /// (e.g. "python3 -u"); it is shlex-split before spawning.
    /// 用于脚本块的解释器命令。可以包含参数（例如 "python3 -u"）；
    /// 在启动前会进行 shlex 拆分。
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// If `true`, unrecognized non-blank lines in a suite file abort parsing
    /// instead of being silently skipped.
    /// 如果为 `true`，套件文件中无法识别的非空行会中止解析，而不是被静默跳过。
    #[serde(default)]
    pub strict: bool,

    /// Optional per-block timeout in seconds. There is deliberately no
    /// default timeout: a non-terminating block hangs the run.
    /// 可选的单块超时时间（秒）。特意不设置默认超时：
    /// 不会终止的块将使整个运行挂起。
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// The suite file to run when none is given on the command line.
    /// 命令行未指定时要运行的套件文件。
    #[serde(default = "default_suite")]
    pub suite: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            interpreter: default_interpreter(),
            strict: false,
            timeout_secs: None,
            suite: default_suite(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

pub(crate) fn default_interpreter() -> String {
    if cfg!(windows) {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}

fn default_suite() -> PathBuf {
    PathBuf::from("UnitTest/init-test.in")
}

impl HarnessConfig {
    /// Loads the configuration. An explicitly given path must exist and
    /// parse; the conventional `Harness.toml` is only read when present,
    /// otherwise the built-in defaults are used.
    ///
    /// 加载配置。显式给定的路径必须存在且可解析；
    /// 约定的 `Harness.toml` 仅在存在时读取，否则使用内置默认值。
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = match explicit_path {
            Some(path) => path,
            None => {
                let conventional = Path::new("Harness.toml");
                if !conventional.exists() {
                    return Ok(Self::default());
                }
                conventional
            }
        };

        let content = fs::read_to_string(path)
            .with_context(|| t!("error.config_read_failed", path = path.display()))?;
        let config: HarnessConfig = toml::from_str(&content)
            .with_context(|| t!("error.config_parse_failed", path = path.display()))?;
        Ok(config)
    }
}
