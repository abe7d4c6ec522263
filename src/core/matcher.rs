// ============================================================================
// LangSync - 路径匹配
// ============================================================================
//
// 文件: src/core/matcher.rs
// 职责: 用 glob 模式过滤文件事件路径
// 边界:
//   - ✅ glob 模式编译和校验
//   - ✅ 相对项目根目录的路径匹配
//   - ❌ 不应包含文件监听逻辑
//
// ============================================================================

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

use crate::core::error::WatchError;

/// `*` 不跨越目录分隔符，`**` 递归匹配
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// 一组相对于项目根目录的 glob 模式
#[derive(Debug, Clone)]
pub struct PatternSet {
    root: PathBuf,
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new(root: impl Into<PathBuf>, patterns: &[String]) -> Result<Self, WatchError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| WatchError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            root: root.into(),
            patterns,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// 路径（绝对或相对根目录）是否命中任一模式
    pub fn matches(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_path_with(relative, MATCH_OPTIONS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang_patterns() -> PatternSet {
        PatternSet::new(
            "/srv/app",
            &["lang/**/*.php".to_string(), "lang/*.json".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn double_star_matches_nested_directories() {
        let set = lang_patterns();
        assert!(set.matches(Path::new("/srv/app/lang/en/messages.php")));
        assert!(set.matches(Path::new("/srv/app/lang/vendor/pkg/en/auth.php")));
        assert!(set.matches(Path::new("lang/ar/validation.php")));
    }

    #[test]
    fn single_star_stays_in_one_segment() {
        let set = lang_patterns();
        assert!(set.matches(Path::new("/srv/app/lang/ar.json")));
        assert!(!set.matches(Path::new("/srv/app/lang/en/extra.json")));
    }

    #[test]
    fn unrelated_paths_are_ignored() {
        let set = lang_patterns();
        assert!(!set.matches(Path::new("/srv/app/resources/js/app.tsx")));
        assert!(!set.matches(Path::new("/srv/app/lang/en/messages.txt")));
        assert!(!set.matches(Path::new("/elsewhere/lang/en/messages.php")));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = PatternSet::new("/srv/app", &["lang/[*.php".to_string()]).unwrap_err();
        assert!(matches!(err, WatchError::InvalidPattern { ref pattern, .. } if pattern == "lang/[*.php"));
    }
}
