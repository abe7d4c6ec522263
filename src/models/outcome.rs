// ============================================================================
// LangSync - 重新生成结果数据模型
// ============================================================================
//
// 文件: src/models/outcome.rs
// 职责: 生成命令执行结果的数据结构定义
// 边界:
//   - ✅ 执行结果数据结构定义
//   - ✅ 成功 / 失败结果构建
//   - ❌ 不应包含命令执行逻辑
//   - ❌ 不应包含防抖调度逻辑
//
// ============================================================================

use std::time::Duration;

/// 一次生成命令的执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerationOutcome {
    /// 退出状态码（被信号终止时为 None）
    pub exit_code: Option<i32>,
    /// 标准输出
    pub stdout: String,
    /// 标准错误输出
    pub stderr: String,
    /// 执行时长
    pub duration: Duration,
    /// 是否成功
    pub success: bool,
}

impl RegenerationOutcome {
    /// 创建成功结果
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self { exit_code: Some(0), stdout, stderr, duration, success: true }
    }

    /// 创建失败结果
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self { exit_code, stdout, stderr, duration, success: false }
    }

    /// 退出码的展示文本
    pub fn exit_code_label(&self) -> String {
        match self.exit_code {
            Some(code) => code.to_string(),
            None => "signal".to_string(),
        }
    }
}
