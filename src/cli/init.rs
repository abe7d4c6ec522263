// ============================================================================
// LangSync - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 处理配置文件初始化命令
// 边界:
//   - ✅ 初始化命令参数解析
//   - ✅ 默认配置文件生成
//   - ✅ 配置文件存在性检查
//   - ❌ 不应包含配置文件格式定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::models::config::{Config, CONFIG_FILE_NAME};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 初始化命令参数
#[derive(Debug, Args)]
pub struct InitArgs {
    /// 配置文件路径
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub output: PathBuf,

    /// 强制覆盖已存在的配置文件
    #[arg(short, long)]
    pub force: bool,
}

/// 处理初始化命令
pub fn handle_init(args: InitArgs) -> Result<()> {
    Logger::info(t!("init.start"));

    // 检查配置文件是否已存在
    if args.output.exists() && !args.force {
        Logger::warn(tf!("init.config_exists", path = args.output.display()));
        Logger::info(t!("init.use_force_hint"));
        return Ok(());
    }

    // 生成默认配置文件
    match Config::create_default_config_file(&args.output) {
        Ok(_) => {
            Logger::success(tf!("init.config_created", path = args.output.display()));
            Logger::info(t!("init.next_steps"));
        }
        Err(e) => {
            Logger::error(tf!("init.create_failed", error = e));
            return Err(e);
        }
    }

    Ok(())
}
