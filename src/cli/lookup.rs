// ============================================================================
// LangSync - CLI Lookup 命令
// ============================================================================
//
// 文件: src/cli/lookup.rs
// 职责: 在生成的翻译表中查找键的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 占位符参数解析 (name=value)
//   - ✅ 调用翻译访问器并输出结果
//   - ❌ 不应包含查找/替换实现
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::locales::resolve_props;
use crate::core::Translator;
use crate::models::config::Config;
use crate::models::replacements::{ReplacementValue, Replacements};
use crate::models::table::TranslationTable;
use crate::tf;

/// 查找翻译
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// 翻译键（如 auth.failed）
    pub key: String,

    /// 使用的语言（覆盖配置文件）
    #[arg(long)]
    pub locale: Option<String>,

    /// 页面语言数据 JSON（{ current, dir, available }）
    #[arg(long)]
    pub page: Option<PathBuf>,

    /// 翻译表 JSON 路径（覆盖配置文件）
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// 占位符取值，格式 name=value，可重复指定
    #[arg(short = 'r', long = "replace", value_parser = parse_replacement)]
    pub replacements: Vec<(String, String)>,

    /// 键不存在时使用的回退文本
    #[arg(short = 'f', long)]
    pub fallback: Option<String>,

    /// 以复数形式查找并注入 count
    #[arg(short = 'n', long, value_parser = parse_count)]
    pub count: Option<ReplacementValue>,

    /// 只检查键是否存在
    #[arg(long)]
    pub exists: bool,
}

fn parse_replacement(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected name=value, got '{}'", raw)),
    }
}

fn parse_count(raw: &str) -> Result<ReplacementValue, String> {
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(ReplacementValue::Integer(value));
    }
    raw.parse::<f64>()
        .map(ReplacementValue::Float)
        .map_err(|_| format!("'{}' is not a number", raw))
}

/// 按参数解析查找结果
pub fn resolve(args: &LookupArgs, translator: &Translator) -> String {
    if args.exists {
        return translator.exists(&args.key).to_string();
    }

    let replacements: Replacements = args.replacements.iter().cloned().collect();
    match &args.count {
        Some(count) => translator.pluralize(&args.key, count.clone(), Some(&replacements)),
        None => translator.lookup(&args.key, Some(&replacements), args.fallback.as_deref()),
    }
}

pub fn handle_lookup(args: LookupArgs) -> Result<()> {
    let config = Config::current();
    let table_path = args.table.clone().unwrap_or_else(|| config.table_path());
    let table = TranslationTable::load(&table_path)
        .with_context(|| tf!("lookup.table_failed", path = table_path.display()))?;
    let props = resolve_props(args.page.as_deref(), args.locale.as_deref(), &config)?;

    let translator = Translator::new(Arc::new(table), Some(props));
    println!("{}", resolve(&args, &translator));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::models::locale::LocaleProps;
    use clap::Parser;

    fn parse(argv: &[&str]) -> LookupArgs {
        let mut full = vec!["langsync", "lookup"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Lookup(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    fn translator() -> Translator {
        let table = TranslationTable::new().with_locale(
            "en",
            [
                ("greeting", "Hello :name!"),
                ("user.items", ":name has :count items"),
            ],
        );
        Translator::new(Arc::new(table), Some(LocaleProps::for_locale("en")))
    }

    #[test]
    fn lookup_with_replacements_and_fallback() {
        let translator = translator();
        assert_eq!(
            resolve(&parse(&["greeting", "-r", "name=John"]), &translator),
            "Hello John!"
        );
        assert_eq!(
            resolve(&parse(&["missing", "-f", "Hi {name}", "-r", "name=Bo"]), &translator),
            "Hi Bo"
        );
        assert_eq!(resolve(&parse(&["missing"]), &translator), "missing");
    }

    #[test]
    fn count_switches_to_pluralize() {
        let translator = translator();
        let args = parse(&["user.items", "-n", "3", "-r", "name=Alice", "-r", "count=9"]);
        assert_eq!(resolve(&args, &translator), "Alice has 3 items");
    }

    #[test]
    fn exists_prints_boolean() {
        let translator = translator();
        assert_eq!(resolve(&parse(&["greeting", "--exists"]), &translator), "true");
        assert_eq!(
            resolve(&parse(&["nope", "--exists", "-f", "x"]), &translator),
            "false"
        );
    }

    #[test]
    fn replacement_and_count_parsers() {
        assert_eq!(
            parse_replacement("name=a=b").unwrap(),
            ("name".to_string(), "a=b".to_string())
        );
        assert!(parse_replacement("=x").is_err());
        assert!(parse_replacement("novalue").is_err());
        assert_eq!(parse_count("0").unwrap(), ReplacementValue::Integer(0));
        assert_eq!(parse_count("2.5").unwrap(), ReplacementValue::Float(2.5));
        assert!(parse_count("many").is_err());
    }
}
