// ============================================================================
// LangSync - 语言环境数据模型
// ============================================================================
//
// 文件: src/models/locale.rs
// 职责: 当前语言、文字方向和可用语言元数据定义
// 边界:
//   - ✅ 语言描述符定义
//   - ✅ 页面语言数据 (current / dir / available) 反序列化
//   - ✅ 缺省值 (en / ltr / 空列表)
//   - ❌ 不应包含翻译查找逻辑
//   - ❌ 不应包含文件读取逻辑
//
// ============================================================================

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 未提供语言数据时使用的语言代码
pub const DEFAULT_LOCALE: &str = "en";

/// 文字方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// 从左到右
    #[default]
    Ltr,
    /// 从右到左
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 当前语言描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDescriptor {
    pub code: String,
    pub direction: TextDirection,
}

impl Default for LocaleDescriptor {
    fn default() -> Self {
        Self {
            code: DEFAULT_LOCALE.to_string(),
            direction: TextDirection::Ltr,
        }
    }
}

/// 可用语言的展示元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleMeta {
    /// 显示名称
    #[serde(default)]
    pub label: String,
    /// 国旗字符
    #[serde(default, alias = "flagGlyph", alias = "flag_glyph")]
    pub flag: String,
    /// 文字方向
    #[serde(default)]
    pub dir: TextDirection,
}

/// 宿主页面每次渲染提供的语言数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleProps {
    /// 当前语言代码
    #[serde(default = "default_locale_code")]
    pub current: String,
    /// 当前文字方向
    #[serde(default)]
    pub dir: TextDirection,
    /// 可用语言（保持声明顺序）
    #[serde(default)]
    pub available: IndexMap<String, LocaleMeta>,
}

fn default_locale_code() -> String {
    DEFAULT_LOCALE.to_string()
}

impl LocaleProps {
    /// 只指定语言代码，方向为 ltr，无可用语言元数据
    pub fn for_locale(code: impl Into<String>) -> Self {
        Self {
            current: code.into(),
            dir: TextDirection::Ltr,
            available: IndexMap::new(),
        }
    }

    pub fn with_direction(mut self, dir: TextDirection) -> Self {
        self.dir = dir;
        self
    }

    pub fn with_available(mut self, available: IndexMap<String, LocaleMeta>) -> Self {
        self.available = available;
        self
    }

    /// 从 JSON 页面数据解析
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn descriptor(&self) -> LocaleDescriptor {
        LocaleDescriptor {
            code: self.current.clone(),
            direction: self.dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_props_and_keeps_available_order() {
        let props = LocaleProps::from_json_str(
            r#"{
                "current": "ar",
                "dir": "rtl",
                "available": {
                    "en": { "label": "English", "flag": "🇬🇧", "dir": "ltr" },
                    "ar": { "label": "العربية", "flagGlyph": "🇸🇦", "dir": "rtl" },
                    "de": { "label": "Deutsch", "flag": "🇩🇪" }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(props.current, "ar");
        assert_eq!(props.dir, TextDirection::Rtl);
        let codes: Vec<_> = props.available.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["en", "ar", "de"]);
        assert_eq!(props.available["ar"].flag, "🇸🇦");
        assert_eq!(props.available["de"].dir, TextDirection::Ltr);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let props = LocaleProps::from_json_str("{}").unwrap();
        assert_eq!(props.descriptor(), LocaleDescriptor::default());
        assert!(props.available.is_empty());
    }
}
