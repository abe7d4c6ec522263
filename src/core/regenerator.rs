// ============================================================================
// LangSync - 翻译生成命令执行器
// ============================================================================
//
// 文件: src/core/regenerator.rs
// 职责: 执行外部翻译生成命令
// 边界:
//   - ✅ 通过系统 shell 执行命令
//   - ✅ 输出捕获和调试日志
//   - ✅ 可选超时
//   - ✅ 跨平台 shell 选择
//   - ❌ 不包含防抖调度逻辑
//   - ❌ 不包含刷新通知逻辑
//
// ============================================================================

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

use crate::core::error::RegenerationError;
use crate::models::outcome::RegenerationOutcome;
use crate::tf;
use crate::utils::logger::Logger;

/// 重新生成翻译资源的执行者
pub trait Regenerator: Send + Sync + 'static {
    fn regenerate(
        &self,
    ) -> impl Future<Output = Result<RegenerationOutcome, RegenerationError>> + Send;
}

/// 在项目根目录中执行配置的 shell 命令
#[derive(Debug, Clone)]
pub struct CommandRegenerator {
    command: String,
    root: PathBuf,
    debug: bool,
    timeout: Option<Duration>,
}

impl CommandRegenerator {
    pub fn new(command: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            root: root.into(),
            debug: false,
            timeout: None,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    fn build_command(&self) -> Command {
        let mut command = if cfg!(windows) {
            let mut command = Command::new("cmd");
            command.arg("/C").arg(&self.command);
            command
        } else {
            let mut command = Command::new("sh");
            command.arg("-c").arg(&self.command);
            command
        };

        command
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

impl Regenerator for CommandRegenerator {
    async fn regenerate(&self) -> Result<RegenerationOutcome, RegenerationError> {
        let start_time = Instant::now();

        if self.debug {
            Logger::info(tf!("regenerate.command_run", command = &self.command));
        }

        let child = self
            .build_command()
            .spawn()
            .map_err(|source| RegenerationError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, child.wait_with_output())
                .await
                .map_err(|_| RegenerationError::Timeout {
                    command: self.command.clone(),
                    timeout,
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|source| RegenerationError::Wait {
            command: self.command.clone(),
            source,
        })?;

        let duration = start_time.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        // 调试模式下输出命令输出
        if self.debug {
            if !stdout.trim().is_empty() {
                Logger::info(tf!("regenerate.command_stdout", output = stdout.trim_end()));
            }
            if !stderr.trim().is_empty() {
                Logger::warn(tf!("regenerate.command_stderr", output = stderr.trim_end()));
            }
        }

        let outcome = if output.status.success() {
            RegenerationOutcome::success(stdout, stderr, duration)
        } else {
            RegenerationOutcome::failure(output.status.code(), stdout, stderr, duration)
        };

        Ok(outcome)
    }
}
