// ============================================================================
// LangSync - 文件监听注册
// ============================================================================
//
// 文件: src/core/surface.rs
// 职责: 把文件系统事件转换为新增/修改/删除事件并投递给监听器
// 边界:
//   - ✅ 文件事件类型定义
//   - ✅ 监听注册抽象
//   - ✅ 基于 notify 的递归监听实现
//   - ❌ 不包含路径过滤逻辑
//   - ❌ 不包含防抖逻辑
//
// ============================================================================

use notify::event::{EventKind, ModifyKind};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::UnboundedSender;

use crate::core::error::WatchError;

/// 文件事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEventKind {
    Added,
    Changed,
    Removed,
}

impl fmt::Display for FileEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileEventKind::Added => write!(f, "add"),
            FileEventKind::Changed => write!(f, "change"),
            FileEventKind::Removed => write!(f, "unlink"),
        }
    }
}

/// 一次文件事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
    pub kind: FileEventKind,
    pub path: PathBuf,
}

impl FileEvent {
    pub fn new(kind: FileEventKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// notify 事件转换；访问和仅元数据变化的事件被忽略
    pub fn from_notify(event: &notify::Event) -> Vec<FileEvent> {
        let kind = match event.kind {
            EventKind::Create(_) => FileEventKind::Added,
            EventKind::Modify(ModifyKind::Metadata(_)) => return Vec::new(),
            EventKind::Modify(_) => FileEventKind::Changed,
            EventKind::Remove(_) => FileEventKind::Removed,
            EventKind::Access(_) | EventKind::Any | EventKind::Other => return Vec::new(),
        };

        event
            .paths
            .iter()
            .map(|path| FileEvent::new(kind, path.clone()))
            .collect()
    }
}

/// 文件监听注册面
pub trait WatchSurface {
    /// 监听 `root` 下的所有变化，把事件发送给 `sender`
    fn subscribe(&mut self, root: &Path, sender: UnboundedSender<FileEvent>)
        -> Result<(), WatchError>;
}

/// 基于 notify 的递归监听；drop 时释放订阅
#[derive(Default)]
pub struct NotifySurface {
    watcher: Option<RecommendedWatcher>,
}

impl NotifySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_subscribed(&self) -> bool {
        self.watcher.is_some()
    }
}

impl WatchSurface for NotifySurface {
    fn subscribe(
        &mut self,
        root: &Path,
        sender: UnboundedSender<FileEvent>,
    ) -> Result<(), WatchError> {
        let mut watcher =
            notify::recommended_watcher(move |result: notify::Result<notify::Event>| {
                match result {
                    Ok(event) => {
                        for file_event in FileEvent::from_notify(&event) {
                            // 接收端关闭说明监听循环已结束
                            if sender.send(file_event).is_err() {
                                return;
                            }
                        }
                    }
                    Err(err) => tracing::warn!(error = %err, "file watcher error"),
                }
            })?;
        watcher.watch(root, RecursiveMode::Recursive)?;
        self.watcher = Some(watcher);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, MetadataKind, RemoveKind};

    fn event(kind: EventKind, path: &str) -> notify::Event {
        notify::Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn maps_notify_kinds() {
        let added = FileEvent::from_notify(&event(EventKind::Create(CreateKind::File), "/a.php"));
        assert_eq!(added, vec![FileEvent::new(FileEventKind::Added, "/a.php")]);

        let changed = FileEvent::from_notify(&event(
            EventKind::Modify(ModifyKind::Data(DataChange::Content)),
            "/a.php",
        ));
        assert_eq!(changed[0].kind, FileEventKind::Changed);

        let removed = FileEvent::from_notify(&event(EventKind::Remove(RemoveKind::File), "/a.php"));
        assert_eq!(removed[0].kind, FileEventKind::Removed);
    }

    #[test]
    fn ignores_access_and_metadata_events() {
        assert!(FileEvent::from_notify(&event(EventKind::Access(AccessKind::Any), "/a.php")).is_empty());
        assert!(FileEvent::from_notify(&event(
            EventKind::Modify(ModifyKind::Metadata(MetadataKind::Permissions)),
            "/a.php"
        ))
        .is_empty());
    }
}
