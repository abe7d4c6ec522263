// ============================================================================
// LangSync - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 全局参数解析和配置合并
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod generate;
pub mod init;
pub mod locales;
pub mod lookup;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::config::{Config, RuntimeArgs};
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use generate::{handle_generate, GenerateArgs};
use init::{handle_init, InitArgs};
use locales::{handle_locales, LocalesArgs};
use lookup::{handle_lookup, LookupArgs};
use watch::{handle_watch, WatchArgs};

/// LangSync - translation lookup and language-file watcher
#[derive(Debug, Parser)]
#[command(name = "langsync")]
#[command(about = "Translation lookup and language-file watcher for frontend dev servers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (en_us, zh_cn)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Configuration file (defaults to ./langsync.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Project root directory
    #[arg(short = 'C', long, global = true)]
    pub root: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Regenerate translations on language-file changes and reload clients
    Watch(WatchArgs),
    /// Run the regeneration command once
    Generate(GenerateArgs),
    /// Look up a translation key
    Lookup(LookupArgs),
    /// List available locales
    Locales(LocalesArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    Config::initialize(cli.config.as_deref())?;
    // Merge runtime args to global config
    Config::merge_runtime_args(build_runtime_args(&cli))?;

    Colors::configure(Config::get_colored());
    Logger::init_tracing(Config::get_verbose());

    match cli.command {
        Commands::Watch(args) => handle_watch(args).await,
        Commands::Generate(args) => handle_generate(args).await,
        Commands::Lookup(args) => handle_lookup(args),
        Commands::Locales(args) => handle_locales(args),
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from global CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        root: cli.root.clone(),
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        language: cli.language.clone(),
        ..Default::default()
    }
}
