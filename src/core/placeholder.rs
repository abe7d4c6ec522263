// ============================================================================
// LangSync - 占位符替换
// ============================================================================
//
// 文件: src/core/placeholder.rs
// 职责: 在模板中替换 `:name` 和 `{name}` 两种占位符
// 边界:
//   - ✅ 两种占位符语法的扫描和替换
//   - ✅ 单次扫描，替换值不再被二次扫描
//   - ❌ 不应包含翻译键查找逻辑
//   - ❌ 不应包含复数分支选择
//
// ============================================================================

use regex::{Captures, Regex};
use std::borrow::Cow;

use crate::models::replacements::Replacements;

/// 名称之后的字符若仍属于标识符，则 `:name` 不成立
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// 由替换集合中的名称构建扫描模式，长名称优先
///
/// 第 1 组为 `:name`，第 2 组为 `{name}`。
fn build_pattern(names: &[&str]) -> Result<Regex, regex::Error> {
    let brace = r"\{([^{}]+)\}";
    if names.is_empty() {
        return Regex::new(brace);
    }
    let alternation = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(":({})|{}", alternation, brace))
}

/// 在 `matched` 的前缀中找出满足边界条件的最长名称
///
/// `rest` 是整个匹配之后的模板剩余部分。
fn resolve_colon(
    names: &[&str],
    matched: &str,
    rest: &str,
    replacements: &Replacements,
) -> Option<String> {
    names
        .iter()
        .filter(|name| matched.starts_with(**name))
        .find_map(|name| {
            let tail = &matched[name.len()..];
            let next = tail.chars().next().or_else(|| rest.chars().next());
            if next.is_some_and(is_identifier_char) {
                return None;
            }
            let value = replacements.get(name)?;
            Some(format!("{}{}", value, tail))
        })
}

/// 替换模板中的占位符，未知占位符原样保留
pub fn substitute<'a>(template: &'a str, replacements: &Replacements) -> Cow<'a, str> {
    if replacements.is_empty() {
        return Cow::Borrowed(template);
    }

    let mut names: Vec<&str> = replacements
        .iter()
        .map(|(name, _)| name)
        .filter(|name| !name.is_empty())
        .collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()));

    let pattern = match build_pattern(&names) {
        Ok(pattern) => pattern,
        Err(err) => {
            tracing::warn!(error = %err, "placeholder pattern could not be built");
            return Cow::Borrowed(template);
        }
    };

    pattern.replace_all(template, |caps: &Captures<'_>| {
        let whole = caps.get(0).map(|m| (m.as_str(), m.end()));
        let Some((whole, end)) = whole else {
            return String::new();
        };

        if let Some(name) = caps.get(2) {
            return match replacements.get(name.as_str()) {
                Some(value) => value.to_string(),
                None => whole.to_string(),
            };
        }

        match caps.get(1) {
            Some(matched) => {
                resolve_colon(&names, matched.as_str(), &template[end..], replacements)
                    .unwrap_or_else(|| whole.to_string())
            }
            None => whole.to_string(),
        }
    })
}
