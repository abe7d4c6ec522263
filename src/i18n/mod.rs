// ============================================================================
// LangSync - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: CLI 自身提示信息的翻译
// 边界:
//   - ✅ 内置翻译表初始化
//   - ✅ 翻译宏定义和实现
//   - ✅ 按配置切换界面语言
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含查找/替换实现（复用 core::translator）
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

use std::sync::{Arc, OnceLock};

use crate::core::translator::Translator;
use crate::models::config::Config;
use crate::models::locale::LocaleProps;
use crate::models::replacements::Replacements;
use crate::models::table::TranslationTable;

/// 默认界面语言
pub const DEFAULT_LANGUAGE: &str = "en_us";

/// 内置翻译表
fn catalog() -> &'static Arc<TranslationTable> {
    static CATALOG: OnceLock<Arc<TranslationTable>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Arc::new(
            TranslationTable::new()
                .with_locale("en_us", en_us::TRANSLATIONS.iter().copied())
                .with_locale("zh_cn", zh_cn::TRANSLATIONS.iter().copied()),
        )
    })
}

/// 当前界面语言；未知语言回退到英文
fn current_language() -> String {
    match Config::get_language() {
        Ok(language) if catalog().has_locale(&language) => language,
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

/// 获取翻译文本，键不存在时返回键本身
pub fn translate(key: &str, replacements: Option<&Replacements>) -> String {
    let translator = Translator::new(
        Arc::clone(catalog()),
        Some(LocaleProps::for_locale(current_language())),
    );
    translator.lookup(key, replacements, None)
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::translate($key, None)
    };
}

/// 带命名参数的翻译宏: `tf!("watch.pattern", pattern = p)`
#[macro_export]
macro_rules! tf {
    ($key:expr, $($name:ident = $value:expr),+ $(,)?) => {{
        let replacements = $crate::models::replacements::Replacements::new()
            $(.with(stringify!($name), format!("{}", $value)))+;
        $crate::i18n::translate($key, Some(&replacements))
    }};
}
