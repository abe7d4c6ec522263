// ============================================================================
// LangSync - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 对外暴露翻译访问器与语言文件监听器
// 边界:
//   - ✅ 模块声明
//   - ✅ 常用类型重导出
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod i18n;

pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{ChangeWatcher, CommandRegenerator, Translator, WatchConfig};
pub use crate::models::{LocaleProps, Replacements, TextDirection, TranslationTable};
