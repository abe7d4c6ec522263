// ============================================================================
// LangSync - CLI Locales 命令
// ============================================================================
//
// 文件: src/cli/locales.rs
// 职责: 列出可用语言及其翻译加载情况
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 页面语言数据解析（页面 JSON 或配置文件）
//   - ✅ 可用语言列表输出
//   - ❌ 不应包含翻译查找逻辑
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::Translator;
use crate::models::config::Config;
use crate::models::locale::LocaleProps;
use crate::models::table::TranslationTable;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 列出可用语言
#[derive(Debug, Args)]
pub struct LocalesArgs {
    /// 页面语言数据 JSON（{ current, dir, available }）
    #[arg(long)]
    pub page: Option<PathBuf>,

    /// 当前语言（覆盖配置文件）
    #[arg(long)]
    pub locale: Option<String>,

    /// 翻译表 JSON 路径（覆盖配置文件）
    #[arg(long)]
    pub table: Option<PathBuf>,
}

/// 确定页面语言数据：页面 JSON 优先，否则由配置文件构建
pub fn resolve_props(
    page: Option<&Path>,
    locale: Option<&str>,
    config: &Config,
) -> Result<LocaleProps> {
    let mut props = match page {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| tf!("error.read_page", path = path.display()))?;
            LocaleProps::from_json_str(&content)
                .with_context(|| tf!("error.parse_page", path = path.display()))?
        }
        None => LocaleProps::for_locale(config.translations.locale.clone())
            .with_available(config.locales.clone()),
    };

    if let Some(locale) = locale {
        props.current = locale.to_string();
    }
    // 页面数据未给出方向时，使用元数据中的方向
    if page.is_none() || locale.is_some() {
        if let Some(meta) = props.available.get(&props.current) {
            props.dir = meta.dir;
        }
    }

    Ok(props)
}

pub fn handle_locales(args: LocalesArgs) -> Result<()> {
    let config = Config::current();
    let props = resolve_props(args.page.as_deref(), args.locale.as_deref(), &config)?;

    let table_path = args.table.unwrap_or_else(|| config.table_path());
    let table = if table_path.exists() {
        TranslationTable::load(&table_path)?
    } else {
        Logger::warn(tf!("locales.table_missing", path = table_path.display()));
        TranslationTable::new()
    };

    let translator = Translator::new(Arc::new(table.clone()), Some(props));
    let codes = translator.available_locales();
    if codes.is_empty() {
        Logger::info(t!("locales.none"));
        return Ok(());
    }

    Logger::info(tf!("locales.header", count = codes.len()));
    let metadata = translator.available_metadata();
    for code in codes {
        let Some(meta) = metadata.and_then(|available| available.get(code)) else {
            continue;
        };
        let marker = if code == translator.locale() {
            icons::CURRENT
        } else {
            icons::LOCALE
        };
        let status = if table.has_locale(code) {
            Colors::success(&t!("locales.loaded"))
        } else {
            Colors::warn(&t!("locales.not_loaded"))
        };
        println!(
            "  {} {} {} {} {} {}",
            marker,
            Colors::bold(code),
            meta.flag,
            meta.label,
            Colors::muted(meta.dir.as_str()),
            status
        );
    }

    Ok(())
}
