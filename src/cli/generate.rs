// ============================================================================
// LangSync - CLI Generate 命令
// ============================================================================
//
// 文件: src/cli/generate.rs
// 职责: 单次执行翻译生成命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 加载动画和结果输出
//   - ❌ 不应包含命令执行细节
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::{CommandRegenerator, Regenerator};
use crate::models::config::{Config, RuntimeArgs};
use crate::tf;
use crate::utils::logger::Logger;
use crate::utils::spinner::Spinner;

/// 执行一次翻译生成
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// 生成命令（覆盖配置文件）
    #[arg(long)]
    pub command: Option<String>,

    /// 输出生成命令的 stdout/stderr
    #[arg(long)]
    pub debug: bool,

    /// 超时时间（秒，0 表示不限制）
    #[arg(long)]
    pub timeout: Option<u64>,
}

pub async fn handle_generate(args: GenerateArgs) -> Result<()> {
    let mut config = Config::current();
    config.apply_runtime_args(RuntimeArgs {
        command: args.command,
        debug: if args.debug { Some(true) } else { None },
        timeout: args.timeout,
        ..Default::default()
    });

    let root = config.root_dir();
    if !root.exists() {
        anyhow::bail!(tf!("error.root_not_exist", path = root.display()));
    }

    let regenerator = CommandRegenerator::new(&config.watch.command, &root)
        .with_debug(config.watch.debug)
        .with_timeout(config.timeout_duration());

    let spinner = Spinner::start(tf!("generate.running", command = regenerator.command()));
    let result = regenerator.regenerate().await;
    spinner.stop();

    match result {
        Ok(outcome) if outcome.success => {
            Logger::success(tf!(
                "regenerate.success",
                seconds = format!("{:.2}", outcome.duration.as_secs_f64())
            ));
            Ok(())
        }
        Ok(outcome) => {
            if !config.watch.debug && !outcome.stderr.trim().is_empty() {
                Logger::error(outcome.stderr.trim_end());
            }
            anyhow::bail!(tf!("regenerate.failed", code = outcome.exit_code_label()))
        }
        Err(err) => anyhow::bail!(tf!("regenerate.error", error = err)),
    }
}
