// ============================================================================
// LangSync - Spinner 加载动画组件
// ============================================================================
//
// 文件: src/utils/spinner.rs
// 职责: 一次性生成命令期间的加载动画
// 边界:
//   - ✅ 加载动画显示和控制
//   - ✅ 非终端输出时静默
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::utils::constants::spinner_chars;

/// Spinner 加载动画组件
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// 创建并立即启动 Spinner
    pub fn start(message: String) -> Self {
        let bar = if atty::is(atty::Stream::Stdout) {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&spinner_chars::BASE);
        bar.set_style(style);
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// 停止并清除动画
    pub fn stop(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
