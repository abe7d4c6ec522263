// ============================================================================
// LangSync - 语言文件变更监听器
// ============================================================================
//
// 文件: src/core/watcher.rs
// 职责: 启动时生成一次，之后在语言文件变化时防抖生成并通知刷新
// 边界:
//   - ✅ 启动钩子（只执行一次）
//   - ✅ 挂接钩子（注册监听 + 事件循环）
//   - ✅ 防抖、单实例运行、失败后继续监听
//   - ❌ 不包含命令执行细节
//   - ❌ 不包含 CLI 参数处理
//
// ============================================================================

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::core::debouncer::{DebounceAction, Debouncer};
use crate::core::error::{RegenerationError, WatchError};
use crate::core::matcher::PatternSet;
use crate::core::regenerator::{CommandRegenerator, Regenerator};
use crate::core::reload::ReloadChannel;
use crate::core::surface::{FileEvent, WatchSurface};
use crate::models::config::Config;
use crate::models::outcome::RegenerationOutcome;
use crate::{t, tf};
use crate::utils::logger::Logger;

type RunResult = Result<RegenerationOutcome, RegenerationError>;
type InFlight = Pin<Box<dyn Future<Output = RunResult> + Send>>;

/// 监听配置，构建后不再变化
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// 项目根目录（命令工作目录、模式基准目录）
    pub root: PathBuf,
    /// glob 模式
    pub patterns: Vec<String>,
    /// 生成命令
    pub command: String,
    /// 静默期
    pub quiet_period: Duration,
    /// 是否输出命令输出
    pub debug: bool,
    /// 命令超时
    pub timeout: Option<Duration>,
}

impl WatchConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            root: config.root_dir(),
            patterns: config.watch.patterns.clone(),
            command: config.watch.command.clone(),
            quiet_period: config.debounce_duration(),
            debug: config.watch.debug,
            timeout: config.timeout_duration(),
        }
    }
}

/// 语言文件变更监听器
///
/// 执行 shell 命令时用 [`ChangeWatcher::for_command`] 构建，
/// 命令、超时和调试开关都取自同一份 [`WatchConfig`]。
pub struct ChangeWatcher<R: Regenerator> {
    config: WatchConfig,
    matcher: PatternSet,
    regenerator: Arc<R>,
    debouncer: Debouncer,
    /// 启动任务与事件循环共享，保证同一时刻只有一个生成命令
    run_lock: Arc<Mutex<()>>,
    started: bool,
}

impl ChangeWatcher<CommandRegenerator> {
    /// 按配置中的命令构建监听器
    pub fn for_command(config: WatchConfig) -> Result<Self, WatchError> {
        let regenerator = CommandRegenerator::new(&config.command, &config.root)
            .with_debug(config.debug)
            .with_timeout(config.timeout);
        Self::new(config, regenerator)
    }

    pub fn regenerator(&self) -> &CommandRegenerator {
        &self.regenerator
    }
}

impl<R: Regenerator> ChangeWatcher<R> {
    pub fn new(config: WatchConfig, regenerator: R) -> Result<Self, WatchError> {
        let matcher = PatternSet::new(config.root.clone(), &config.patterns)?;
        let debouncer = Debouncer::new(config.quiet_period);
        Ok(Self {
            config,
            matcher,
            regenerator: Arc::new(regenerator),
            debouncer,
            run_lock: Arc::new(Mutex::new(())),
            started: false,
        })
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// 启动钩子：首次调用时后台执行一次生成，之后调用返回 None
    pub fn startup(&mut self) -> Option<JoinHandle<()>> {
        if self.started {
            return None;
        }
        self.started = true;

        let run = self.begin_run();
        let debug = self.config.debug;
        Some(tokio::spawn(async move {
            let result = run.await;
            report(&result, debug);
        }))
    }

    /// 挂接钩子：注册文件监听并在后台运行事件循环
    ///
    /// 事件源关闭（监听面被释放）后循环结束。
    pub fn attach<S, C>(self, surface: &mut S, channel: C) -> Result<JoinHandle<()>, WatchError>
    where
        S: WatchSurface,
        C: ReloadChannel,
    {
        let (sender, receiver) = mpsc::unbounded_channel();
        surface.subscribe(&self.config.root, sender)?;

        Logger::info(tf!(
            "watch.attached",
            count = self.matcher.len(),
            root = self.config.root.display()
        ));

        Ok(tokio::spawn(self.run(receiver, channel)))
    }

    /// 事件循环
    pub async fn run<C: ReloadChannel>(
        mut self,
        mut events: mpsc::UnboundedReceiver<FileEvent>,
        channel: C,
    ) {
        let mut in_flight: Option<InFlight> = None;

        loop {
            let deadline = self.debouncer.deadline();

            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else { break };
                    self.handle_event(&event);
                }
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if self.debouncer.poll() == DebounceAction::Fire {
                        in_flight = Some(self.begin_run());
                    }
                }
                result = async {
                    match in_flight.as_mut() {
                        Some(run) => run.await,
                        None => std::future::pending().await,
                    }
                }, if in_flight.is_some() => {
                    in_flight = None;
                    self.debouncer.finish_run();
                    self.complete_run(result, &channel).await;
                }
            }
        }

        if let Some(run) = in_flight {
            let result = run.await;
            self.debouncer.finish_run();
            self.complete_run(result, &channel).await;
        }
        tracing::debug!("change watcher stopped");
    }

    fn handle_event(&mut self, event: &FileEvent) {
        if !self.matcher.matches(&event.path) {
            return;
        }
        if self.config.debug {
            Logger::info(tf!(
                "watch.file_event",
                kind = event.kind,
                path = event.path.display()
            ));
        }
        self.debouncer.record_event();
    }

    /// 等待运行锁后执行生成
    fn begin_run(&self) -> InFlight {
        let regenerator = Arc::clone(&self.regenerator);
        let run_lock = Arc::clone(&self.run_lock);
        Box::pin(async move {
            let _guard = run_lock.lock_owned().await;
            regenerator.regenerate().await
        })
    }

    async fn complete_run<C: ReloadChannel>(&self, result: RunResult, channel: &C) {
        if !report(&result, self.config.debug) {
            return;
        }
        if let Err(err) = channel.send_full_reload().await {
            Logger::warn(tf!("watch.reload_failed", error = format!("{:#}", err)));
        }
    }
}

/// 输出生成结果，返回是否成功
///
/// 命令输出只在调试模式下由执行器打印，这里只给提示。
fn report(result: &RunResult, debug: bool) -> bool {
    match result {
        Ok(outcome) if outcome.success => {
            Logger::success(tf!(
                "regenerate.success",
                seconds = format!("{:.2}", outcome.duration.as_secs_f64())
            ));
            true
        }
        Ok(outcome) => {
            Logger::warn(tf!("regenerate.failed", code = outcome.exit_code_label()));
            if !debug {
                Logger::info(t!("regenerate.debug_hint"));
            }
            false
        }
        Err(err) => {
            Logger::warn(tf!("regenerate.error", error = err));
            false
        }
    }
}
