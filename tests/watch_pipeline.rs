#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use langsync::core::{
    BroadcastReloadChannel, FileEvent, FileEventKind, ReloadMessage, WatchError, WatchSurface,
};
use langsync::{ChangeWatcher, WatchConfig};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Default)]
struct ScriptedSurface {
    sender: Option<UnboundedSender<FileEvent>>,
}

impl WatchSurface for ScriptedSurface {
    fn subscribe(
        &mut self,
        _root: &Path,
        sender: UnboundedSender<FileEvent>,
    ) -> Result<(), WatchError> {
        self.sender = Some(sender);
        Ok(())
    }
}

impl ScriptedSurface {
    fn changed(&self, path: PathBuf) {
        if let Some(sender) = &self.sender {
            sender
                .send(FileEvent::new(FileEventKind::Changed, path))
                .unwrap();
        }
    }
}

fn watch_config(root: &Path) -> WatchConfig {
    WatchConfig {
        root: root.to_path_buf(),
        patterns: vec!["lang/**/*.php".to_string()],
        command: "echo run >> runs.log".to_string(),
        quiet_period: Duration::from_millis(50),
        debug: false,
        timeout: Some(Duration::from_secs(10)),
    }
}

fn runs(root: &Path) -> usize {
    std::fs::read_to_string(root.join("runs.log"))
        .map(|content| content.lines().count())
        .unwrap_or(0)
}

#[tokio::test]
async fn startup_and_debounced_change_each_run_the_command() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let mut watcher = ChangeWatcher::for_command(watch_config(root)).unwrap();
    watcher.startup().unwrap().await.unwrap();
    assert_eq!(runs(root), 1);

    let mut surface = ScriptedSurface::default();
    let channel = BroadcastReloadChannel::new(8);
    let mut reloads = channel.subscribe();
    let handle = watcher.attach(&mut surface, channel).unwrap();

    for _ in 0..3 {
        surface.changed(root.join("lang/en/messages.php"));
    }
    surface.changed(root.join("src/app.ts"));

    let message = tokio::time::timeout(Duration::from_secs(5), reloads.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(message, ReloadMessage::full_reload());
    assert_eq!(runs(root), 2);

    drop(surface);
    handle.await.unwrap();
}

#[tokio::test]
async fn failing_command_does_not_reload() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let mut config = watch_config(root);
    config.command = "echo run >> runs.log; exit 2".to_string();
    let watcher = ChangeWatcher::for_command(config).unwrap();
    let mut surface = ScriptedSurface::default();
    let channel = BroadcastReloadChannel::new(8);
    let mut reloads = channel.subscribe();
    let handle = watcher.attach(&mut surface, channel).unwrap();

    surface.changed(root.join("lang/ar/auth.php"));
    tokio::time::sleep(Duration::from_millis(800)).await;

    assert_eq!(runs(root), 1);
    assert!(reloads.try_recv().is_err());

    drop(surface);
    handle.await.unwrap();
}
