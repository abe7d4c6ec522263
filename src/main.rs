// ============================================================================
// LangSync - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 启动 CLI 并统一处理退出码
// 边界:
//   - ✅ 异步运行时启动
//   - ✅ 顶层错误输出
//   - ❌ 不应包含命令逻辑
//
// ============================================================================

use langsync::utils::logger::Logger;

#[tokio::main]
async fn main() {
    if let Err(e) = langsync::cli::run_cli().await {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
