// ============================================================================
// LangSync - 翻译表数据模型
// ============================================================================
//
// 文件: src/models/table.rs
// 职责: 语言代码 -> (点分键 -> 模板) 的只读翻译表
// 边界:
//   - ✅ 翻译表结构定义
//   - ✅ 从生成器输出的 JSON 文件加载
//   - ✅ 嵌套对象展开为点分键
//   - ❌ 不应包含占位符替换逻辑
//   - ❌ 不应包含当前语言选择逻辑
//
// ============================================================================

use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// 单个语言的扁平翻译条目
pub type LocaleEntries = HashMap<String, String>;

/// 翻译表加载错误
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read translation table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse translation table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid translation table: {0}")]
    InvalidShape(String),
}

/// 翻译表，启动时构建一次，之后只读
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    locales: HashMap<String, Arc<LocaleEntries>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加（或替换）一个语言的条目
    pub fn insert_locale(&mut self, code: impl Into<String>, entries: LocaleEntries) {
        self.locales.insert(code.into(), Arc::new(entries));
    }

    /// 链式添加语言条目，便于构建静态表
    pub fn with_locale<K, V, I>(mut self, code: impl Into<String>, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.insert_locale(code, entries);
        self
    }

    /// 读取生成器输出的 JSON 文件
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// 解析 `{ "<locale>": { "<key>": "<template>" | { ... } } }`
    pub fn from_json_str(content: &str) -> Result<Self, TableError> {
        let root: Value = serde_json::from_str(content)?;
        let Value::Object(locales) = root else {
            return Err(TableError::InvalidShape(
                "top level must be an object keyed by locale".to_string(),
            ));
        };

        let mut table = Self::new();
        for (code, value) in locales {
            let Value::Object(_) = value else {
                return Err(TableError::InvalidShape(format!(
                    "locale '{}' must map to an object",
                    code
                )));
            };
            let mut entries = LocaleEntries::new();
            flatten_into(&mut entries, None, &value);
            table.insert_locale(code, entries);
        }
        Ok(table)
    }

    /// 获取某个语言的条目（缺失时返回 None）
    pub fn locale(&self, code: &str) -> Option<Arc<LocaleEntries>> {
        self.locales.get(code).cloned()
    }

    pub fn has_locale(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// 已加载的语言代码（排序后）
    pub fn locale_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

fn flatten_into(entries: &mut LocaleEntries, prefix: Option<&str>, value: &Value) {
    let join = |segment: &str| match prefix {
        Some(prefix) => format!("{}.{}", prefix, segment),
        None => segment.to_string(),
    };

    match value {
        Value::Object(map) => {
            for (segment, child) in map {
                flatten_into(entries, Some(&join(segment)), child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(entries, Some(&join(&index.to_string())), child);
            }
        }
        Value::Null => {}
        Value::String(text) => {
            if let Some(key) = prefix {
                entries.insert(key.to_string(), text.clone());
            }
        }
        Value::Number(_) | Value::Bool(_) => {
            if let Some(key) = prefix {
                entries.insert(key.to_string(), value.to_string());
            }
        }
    }
}
