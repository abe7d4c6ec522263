// ============================================================================
// LangSync - CLI Watch 命令
// ============================================================================
//
// 文件: src/cli/watch.rs
// 职责: 语言文件监听命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 组装执行器、监听面和刷新通道
//   - ✅ 等待 Ctrl-C 后释放监听
//   - ❌ 不应包含防抖逻辑
//   - ❌ 不应包含命令执行细节
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;

use crate::core::{ChangeWatcher, NotifySurface, ReloadTarget, WatchConfig};
use crate::models::config::{Config, RuntimeArgs};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 监听语言文件并在变化后重新生成
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// 生成命令（覆盖配置文件）
    #[arg(long)]
    pub command: Option<String>,

    /// 监听的 glob 模式，可重复指定
    #[arg(short = 'p', long = "pattern")]
    pub patterns: Vec<String>,

    /// 防抖静默期（毫秒）
    #[arg(long)]
    pub debounce: Option<u64>,

    /// 输出生成命令的 stdout/stderr
    #[arg(long)]
    pub debug: bool,

    /// 开发服务器刷新地址
    #[arg(long)]
    pub reload_url: Option<String>,

    /// 跳过启动时的首次生成
    #[arg(long)]
    pub no_startup: bool,
}

impl WatchArgs {
    fn runtime_args(&self) -> RuntimeArgs {
        RuntimeArgs {
            command: self.command.clone(),
            patterns: Some(self.patterns.clone()),
            debounce: self.debounce,
            debug: if self.debug { Some(true) } else { None },
            reload_url: self.reload_url.clone(),
            ..Default::default()
        }
    }
}

pub async fn handle_watch(args: WatchArgs) -> Result<()> {
    let mut config = Config::current();
    config.apply_runtime_args(args.runtime_args());

    let mut watch_config = WatchConfig::from_config(&config);
    if !watch_config.root.exists() {
        anyhow::bail!(tf!("error.root_not_exist", path = watch_config.root.display()));
    }
    // notify 上报规范化路径
    watch_config.root = watch_config
        .root
        .canonicalize()
        .with_context(|| tf!("error.root_not_exist", path = watch_config.root.display()))?;

    Logger::info(tf!(
        "watch.start",
        command = &watch_config.command,
        debounce = watch_config.quiet_period.as_millis()
    ));
    for pattern in &watch_config.patterns {
        Logger::info(tf!("watch.pattern", pattern = pattern));
    }

    let mut watcher = ChangeWatcher::for_command(watch_config)?;

    if !args.no_startup {
        // 首次生成在后台完成，与监听循环共享运行锁
        let _ = watcher.startup();
    }

    let channel = ReloadTarget::from_url(&config.dev_server.reload_url);
    if let ReloadTarget::Http(http) = &channel {
        Logger::info(tf!("watch.reload_target", url = http.url()));
    }

    let mut surface = NotifySurface::new();
    let handle = watcher.attach(&mut surface, channel)?;

    tokio::signal::ctrl_c()
        .await
        .context(t!("error.signal_failed"))?;

    Logger::info(t!("watch.stopping"));
    drop(surface);
    handle.await?;
    Logger::success(t!("watch.stopped"));

    Ok(())
}
