// ============================================================================
// LangSync - 核心错误类型
// ============================================================================
//
// 文件: src/core/error.rs
// 职责: 监听和生成过程中的错误定义
// 边界:
//   - ✅ 监听注册错误
//   - ✅ 生成命令错误
//   - ❌ 不应包含错误处理策略
//
// ============================================================================

use std::time::Duration;
use thiserror::Error;

/// 监听器构建/注册错误
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("invalid watch pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("file watcher error: {0}")]
    Notify(#[from] notify::Error),
}

/// 生成命令错误（非零退出码不属于错误，见 `RegenerationOutcome`）
#[derive(Debug, Error)]
pub enum RegenerationError {
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed waiting for '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{command}' timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },
}
