// ============================================================================
// LangSync - 占位符替换集合
// ============================================================================
//
// 文件: src/models/replacements.rs
// 职责: 单次翻译调用的占位符取值定义
// 边界:
//   - ✅ 替换值类型 (文本 / 数字) 定义
//   - ✅ 替换集合构建
//   - ❌ 不应包含模板扫描逻辑
//
// ============================================================================

use indexmap::IndexMap;
use std::fmt;

/// 占位符取值
#[derive(Debug, Clone, PartialEq)]
pub enum ReplacementValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for ReplacementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementValue::Text(text) => write!(f, "{}", text),
            ReplacementValue::Integer(value) => write!(f, "{}", value),
            ReplacementValue::Float(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for ReplacementValue {
    fn from(value: &str) -> Self {
        ReplacementValue::Text(value.to_string())
    }
}

impl From<String> for ReplacementValue {
    fn from(value: String) -> Self {
        ReplacementValue::Text(value)
    }
}

impl From<&String> for ReplacementValue {
    fn from(value: &String) -> Self {
        ReplacementValue::Text(value.clone())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ReplacementValue {
                fn from(value: $ty) -> Self {
                    ReplacementValue::Integer(value as i64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

/// 超出 i64 范围的无符号整数按浮点数保存
macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ReplacementValue {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(value) => ReplacementValue::Integer(value),
                        Err(_) => ReplacementValue::Float(value as f64),
                    }
                }
            }
        )*
    };
}

impl_from_unsigned!(u64, usize);

impl From<f32> for ReplacementValue {
    fn from(value: f32) -> Self {
        ReplacementValue::Float(value as f64)
    }
}

impl From<f64> for ReplacementValue {
    fn from(value: f64) -> Self {
        ReplacementValue::Float(value)
    }
}

/// 占位符名称到取值的映射
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replacements {
    values: IndexMap<String, ReplacementValue>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式添加一个占位符
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ReplacementValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// 添加或覆盖一个占位符
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ReplacementValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ReplacementValue> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReplacementValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Replacements
where
    K: Into<String>,
    V: Into<ReplacementValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacements = Replacements::new();
        for (name, value) in iter {
            replacements.insert(name, value);
        }
        replacements
    }
}
