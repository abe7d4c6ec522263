// ============================================================================
// LangSync - 客户端刷新通知
// ============================================================================
//
// 文件: src/core/reload.rs
// 职责: 向开发服务器/已连接客户端发送整页刷新指令
// 边界:
//   - ✅ 刷新通道抽象
//   - ✅ HTTP / 进程内广播 / 日志三种通道
//   - ❌ 不包含局部热更新
//   - ❌ 不包含防抖调度逻辑
//
// ============================================================================

use anyhow::{Context, Result};
use serde::Serialize;
use std::future::Future;
use tokio::sync::broadcast;

use crate::t;
use crate::utils::logger::Logger;

/// 发送给客户端的刷新指令
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ReloadMessage {
    FullReload { path: String },
}

impl ReloadMessage {
    pub fn full_reload() -> Self {
        ReloadMessage::FullReload {
            path: "*".to_string(),
        }
    }
}

/// 客户端通知通道
pub trait ReloadChannel: Send + Sync + 'static {
    fn send_full_reload(&self) -> impl Future<Output = Result<()>> + Send;
}

/// 通过 HTTP POST 通知开发服务器
#[derive(Debug, Clone)]
pub struct HttpReloadChannel {
    client: reqwest::Client,
    url: String,
}

impl HttpReloadChannel {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReloadChannel for HttpReloadChannel {
    async fn send_full_reload(&self) -> Result<()> {
        self.client
            .post(&self.url)
            .json(&ReloadMessage::full_reload())
            .send()
            .await
            .with_context(|| format!("failed to reach dev server at {}", self.url))?
            .error_for_status()
            .with_context(|| format!("dev server at {} rejected reload", self.url))?;
        Ok(())
    }
}

/// 进程内广播通道，供嵌入式宿主订阅
#[derive(Debug, Clone)]
pub struct BroadcastReloadChannel {
    sender: broadcast::Sender<ReloadMessage>,
}

impl BroadcastReloadChannel {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReloadMessage> {
        self.sender.subscribe()
    }
}

impl ReloadChannel for BroadcastReloadChannel {
    async fn send_full_reload(&self) -> Result<()> {
        // 没有订阅者不算失败
        let _ = self.sender.send(ReloadMessage::full_reload());
        Ok(())
    }
}

/// 未配置开发服务器时只打印日志
#[derive(Debug, Clone, Default)]
pub struct LogReloadChannel;

impl ReloadChannel for LogReloadChannel {
    async fn send_full_reload(&self) -> Result<()> {
        Logger::info(t!("reload.logged"));
        Ok(())
    }
}

/// CLI 使用的通道选择
#[derive(Debug, Clone)]
pub enum ReloadTarget {
    Http(HttpReloadChannel),
    Log(LogReloadChannel),
}

impl ReloadTarget {
    /// 地址为空时退化为日志通道
    pub fn from_url(url: &str) -> Self {
        if url.trim().is_empty() {
            ReloadTarget::Log(LogReloadChannel)
        } else {
            ReloadTarget::Http(HttpReloadChannel::new(url.trim()))
        }
    }
}

impl ReloadChannel for ReloadTarget {
    async fn send_full_reload(&self) -> Result<()> {
        match self {
            ReloadTarget::Http(channel) => channel.send_full_reload().await,
            ReloadTarget::Log(channel) => channel.send_full_reload().await,
        }
    }
}
