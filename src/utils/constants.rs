// ============================================================================
// LangSync - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 日志前缀
pub const APP_TAG: &str = "[LANGSYNC]";

/// 诊断日志过滤环境变量
pub const LOG_ENV: &str = "LANGSYNC_LOG";

/// 界面图标
pub mod icons {
    /// 语言图标
    pub const LOCALE: &str = "●";
    /// 当前语言图标
    pub const CURRENT: &str = "◉";
}

/// 加载 spinner 字符
pub mod spinner_chars {
    pub const BASE: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
}
