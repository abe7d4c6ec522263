// ============================================================================
// LangSync - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心业务逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

pub mod debouncer;
pub mod error;
pub mod matcher;
pub mod placeholder;
pub mod regenerator;
pub mod reload;
pub mod surface;
pub mod translator;
pub mod watcher;

// 重新导出常用类型
pub use debouncer::{DebounceAction, Debouncer};
pub use error::{RegenerationError, WatchError};
pub use matcher::PatternSet;
pub use regenerator::{CommandRegenerator, Regenerator};
pub use reload::{
    BroadcastReloadChannel, HttpReloadChannel, LogReloadChannel, ReloadChannel, ReloadMessage,
    ReloadTarget,
};
pub use surface::{FileEvent, FileEventKind, NotifySurface, WatchSurface};
pub use translator::Translator;
pub use watcher::{ChangeWatcher, WatchConfig};
