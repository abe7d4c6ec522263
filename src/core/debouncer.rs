// ============================================================================
// LangSync - 防抖状态机
// ============================================================================
//
// 文件: src/core/debouncer.rs
// 职责: 合并文件事件突发，静默期结束后触发一次生成
// 边界:
//   - ✅ 单一可重置截止时间
//   - ✅ 生成进行中的忙标记
//   - ✅ 运行期间事件合并为一次重跑
//   - ❌ 不应包含定时器/异步调度
//   - ❌ 不应包含命令执行逻辑
//
// ============================================================================

use std::time::Duration;
use tokio::time::Instant;

/// 轮询结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceAction {
    /// 无待处理事件，或生成正在进行
    Idle,
    /// 仍在静默期内
    Wait(Duration),
    /// 静默期已满，应开始生成
    Fire,
}

#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    last_event: Option<Instant>,
    running: bool,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            last_event: None,
            running: false,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn record_event(&mut self) {
        self.record_event_at(Instant::now())
    }

    /// 记录一次命中事件并重置截止时间
    pub fn record_event_at(&mut self, now: Instant) {
        self.last_event = Some(now);
    }

    /// 下一次触发时间；生成进行中时为 None
    pub fn deadline(&self) -> Option<Instant> {
        if self.running {
            return None;
        }
        self.last_event.map(|last| last + self.quiet_period)
    }

    pub fn poll(&mut self) -> DebounceAction {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> DebounceAction {
        if self.running {
            return DebounceAction::Idle;
        }
        let Some(last) = self.last_event else {
            return DebounceAction::Idle;
        };

        let elapsed = now.saturating_duration_since(last);
        if elapsed >= self.quiet_period {
            self.last_event = None;
            self.running = true;
            return DebounceAction::Fire;
        }

        DebounceAction::Wait(self.quiet_period - elapsed)
    }

    /// 生成结束；运行期间到达的事件会重新布置截止时间
    pub fn finish_run(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_pending(&self) -> bool {
        self.last_event.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(300);

    #[test]
    fn burst_fires_once_after_last_event() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);

        for i in 0..5 {
            let at = start + Duration::from_millis(50 * i);
            debouncer.record_event_at(at);
            assert!(matches!(debouncer.poll_at(at), DebounceAction::Wait(_)));
        }

        let last = start + Duration::from_millis(200);
        assert_eq!(debouncer.deadline(), Some(last + QUIET));
        assert_eq!(
            debouncer.poll_at(last + Duration::from_millis(299)),
            DebounceAction::Wait(Duration::from_millis(1))
        );
        assert_eq!(debouncer.poll_at(last + QUIET), DebounceAction::Fire);
        assert_eq!(debouncer.poll_at(last + QUIET * 4), DebounceAction::Idle);
    }

    #[test]
    fn idle_without_events() {
        let mut debouncer = Debouncer::new(QUIET);
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.poll(), DebounceAction::Idle);
    }

    #[test]
    fn events_during_run_coalesce_into_one_rerun() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);
        debouncer.record_event_at(start);
        assert_eq!(debouncer.poll_at(start + QUIET), DebounceAction::Fire);
        assert!(debouncer.is_running());

        // 运行中：事件只记录，不触发
        for i in 1..=3 {
            debouncer.record_event_at(start + QUIET + Duration::from_millis(100 * i));
        }
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.poll_at(start + QUIET * 10), DebounceAction::Idle);

        debouncer.finish_run();
        let last = start + QUIET + Duration::from_millis(300);
        assert_eq!(debouncer.deadline(), Some(last + QUIET));
        assert_eq!(debouncer.poll_at(start + QUIET * 10), DebounceAction::Fire);
        debouncer.finish_run();
        assert!(!debouncer.has_pending());
    }
}
