// ============================================================================
// LangSync - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 控制台日志输出和诊断日志初始化
// 边界:
//   - ✅ 控制台日志格式化输出
//   - ✅ tracing 订阅器初始化
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//
// ============================================================================

use tracing_subscriber::EnvFilter;

use super::colors::Colors;
use super::constants::{APP_TAG, LOG_ENV};

/// 简单的日志工具
pub struct Logger;

impl Logger {
    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::info(APP_TAG), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::warn("[WARN]"), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Colors::error("[ERROR]"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::success(APP_TAG), msg.as_ref());
    }

    /// 初始化诊断日志；`LANGSYNC_LOG` 优先于 verbose 开关
    pub fn init_tracing(verbose: bool) {
        let default_level = if verbose { "langsync=debug" } else { "warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
