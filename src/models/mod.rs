// ============================================================================
// LangSync - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型子模块导出
// 边界:
//   - ✅ 数据结构子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod config;
pub mod locale;
pub mod outcome;
pub mod replacements;
pub mod table;

pub use config::{Config, RuntimeArgs};
pub use locale::{LocaleDescriptor, LocaleMeta, LocaleProps, TextDirection};
pub use outcome::RegenerationOutcome;
pub use replacements::{ReplacementValue, Replacements};
pub use table::{LocaleEntries, TableError, TranslationTable};
