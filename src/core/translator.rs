// ============================================================================
// LangSync - 翻译访问器
// ============================================================================
//
// 文件: src/core/translator.rs
// 职责: 按键查找翻译并替换占位符
// 边界:
//   - ✅ 键 -> 回退文本 -> 键本身 的解析顺序
//   - ✅ 占位符替换和复数计数注入
//   - ✅ 当前语言 / 文字方向 / 可用语言查询
//   - ✅ 语言切换时重新计算当前语言条目
//   - ❌ 不应读取文件或修改翻译表
//   - ❌ 不应包含监听逻辑
//
// ============================================================================

use indexmap::IndexMap;
use std::sync::Arc;

use crate::core::placeholder::substitute;
use crate::models::locale::{
    LocaleDescriptor, LocaleMeta, LocaleProps, TextDirection, DEFAULT_LOCALE,
};
use crate::models::replacements::{ReplacementValue, Replacements};
use crate::models::table::{LocaleEntries, TranslationTable};

/// 翻译访问器
///
/// 翻译表以 `Arc` 显式传入并保持只读；当前语言的条目在构建和
/// [`Translator::set_props`] 切换语言时计算一次并缓存。
#[derive(Debug, Clone)]
pub struct Translator {
    table: Arc<TranslationTable>,
    props: Option<LocaleProps>,
    active: Option<Arc<LocaleEntries>>,
}

impl Translator {
    pub fn new(table: Arc<TranslationTable>, props: Option<LocaleProps>) -> Self {
        let mut translator = Self {
            table,
            props,
            active: None,
        };
        translator.refresh_active();
        translator
    }

    /// 使用新的页面语言数据；语言代码变化时重新计算缓存
    pub fn set_props(&mut self, props: Option<LocaleProps>) {
        let previous = self.locale().to_string();
        self.props = props;
        if previous != self.locale() {
            self.refresh_active();
        }
    }

    fn refresh_active(&mut self) {
        let active = self.table.locale(self.locale());
        if active.is_none() {
            tracing::warn!(locale = self.locale(), "no translations loaded for locale");
        }
        self.active = active;
    }

    /// 当前语言代码，默认 `en`
    pub fn locale(&self) -> &str {
        self.props
            .as_ref()
            .map(|props| props.current.as_str())
            .unwrap_or(DEFAULT_LOCALE)
    }

    /// 当前文字方向，默认 `ltr`
    pub fn direction(&self) -> TextDirection {
        self.props.as_ref().map(|props| props.dir).unwrap_or_default()
    }

    pub fn descriptor(&self) -> LocaleDescriptor {
        LocaleDescriptor {
            code: self.locale().to_string(),
            direction: self.direction(),
        }
    }

    /// 可用语言代码（按元数据声明顺序）
    pub fn available_locales(&self) -> Vec<&str> {
        self.available_metadata()
            .map(|available| available.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn available_metadata(&self) -> Option<&IndexMap<String, LocaleMeta>> {
        self.props.as_ref().map(|props| &props.available)
    }

    /// 查找翻译：当前语言条目 -> `fallback` -> `key`
    pub fn lookup(
        &self,
        key: &str,
        replacements: Option<&Replacements>,
        fallback: Option<&str>,
    ) -> String {
        let template = self
            .active
            .as_ref()
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
            .or(fallback)
            .unwrap_or(key);

        match replacements {
            Some(replacements) => substitute(template, replacements).into_owned(),
            None => template.to_string(),
        }
    }

    /// 无替换、无回退的简写
    pub fn get(&self, key: &str) -> String {
        self.lookup(key, None, None)
    }

    /// 键是否直接存在于当前语言条目中
    pub fn exists(&self, key: &str) -> bool {
        self.active
            .as_ref()
            .is_some_and(|entries| entries.contains_key(key))
    }

    /// 注入 `count` 后查找；`count` 覆盖调用方提供的同名值
    pub fn pluralize(
        &self,
        key: &str,
        count: impl Into<ReplacementValue>,
        replacements: Option<&Replacements>,
    ) -> String {
        let mut replacements = replacements.cloned().unwrap_or_default();
        replacements.insert("count", count);
        self.lookup(key, Some(&replacements), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Arc<TranslationTable> {
        Arc::new(
            TranslationTable::new()
                .with_locale(
                    "en",
                    [
                        ("greeting", "Hello :name!"),
                        ("greeting.braces", "Hello {name}!"),
                        ("items.count", "You have :count items"),
                        ("user.items", ":name has :count items"),
                        ("title", "Dashboard"),
                    ],
                )
                .with_locale("ar", [("title", "لوحة التحكم")]),
        )
    }

    fn english() -> Translator {
        Translator::new(table(), Some(LocaleProps::for_locale("en")))
    }

    #[test]
    fn stored_template_is_returned_unchanged() {
        let translator = english();
        assert_eq!(translator.get("title"), "Dashboard");
        assert_eq!(translator.get("greeting"), "Hello :name!");
    }

    #[test]
    fn missing_keys_resolve_to_fallback_then_key() {
        let translator = english();
        assert_eq!(translator.get("nav.settings"), "nav.settings");
        assert_eq!(
            translator.lookup("nav.settings", None, Some("Settings")),
            "Settings"
        );
        // 回退文本同样参与替换
        let replacements = Replacements::new().with("name", "Bo");
        assert_eq!(
            translator.lookup("nav.hello", Some(&replacements), Some("Hi :name")),
            "Hi Bo"
        );
    }

    #[test]
    fn substitutes_both_placeholder_syntaxes() {
        let translator = english();
        let replacements = Replacements::new().with("name", "John");
        assert_eq!(
            translator.lookup("greeting", Some(&replacements), None),
            "Hello John!"
        );
        assert_eq!(
            translator.lookup("greeting.braces", Some(&replacements), None),
            "Hello John!"
        );
    }

    #[test]
    fn zero_count_is_substituted() {
        let translator = english();
        let replacements = Replacements::new().with("count", 0);
        assert_eq!(
            translator.lookup("items.count", Some(&replacements), None),
            "You have 0 items"
        );
    }

    #[test]
    fn exists_ignores_fallback_behaviour() {
        let translator = english();
        assert!(translator.exists("title"));
        assert!(!translator.exists("nav.settings"));
        assert_eq!(translator.lookup("nav.settings", None, Some("x")), "x");
        assert!(!translator.exists("nav.settings"));
    }

    #[test]
    fn pluralize_injects_count_without_clobbering_others() {
        let translator = english();
        let replacements = Replacements::new().with("name", "Alice").with("count", 99);
        assert_eq!(
            translator.pluralize("user.items", 3, Some(&replacements)),
            "Alice has 3 items"
        );
        assert_eq!(translator.pluralize("items.count", 1, None), "You have 1 items");
    }

    #[test]
    fn switching_props_changes_results_without_rebuilding() {
        let mut translator = english();
        assert_eq!(translator.get("title"), "Dashboard");

        translator.set_props(Some(
            LocaleProps::for_locale("ar").with_direction(TextDirection::Rtl),
        ));
        assert_eq!(translator.get("title"), "لوحة التحكم");
        assert_eq!(translator.direction(), TextDirection::Rtl);
        assert!(!translator.exists("greeting"));

        translator.set_props(None);
        assert_eq!(translator.locale(), "en");
        assert_eq!(translator.get("title"), "Dashboard");
    }

    #[test]
    fn absent_locale_degrades_to_keys() {
        let translator = Translator::new(table(), Some(LocaleProps::for_locale("fr")));
        assert_eq!(translator.get("title"), "title");
        assert!(!translator.exists("title"));
    }

    /// 收集 WARN 级别事件的字段文本
    #[derive(Clone, Default)]
    struct WarnCapture(Arc<std::sync::Mutex<Vec<String>>>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCapture {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() != tracing::Level::WARN {
                return;
            }
            let mut fields = FieldText::default();
            event.record(&mut fields);
            self.0.lock().unwrap().push(fields.0);
        }
    }

    #[derive(Default)]
    struct FieldText(String);

    impl tracing::field::Visit for FieldText {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.0.push_str(&format!("{}={:?} ", field.name(), value));
        }
    }

    #[test]
    fn missing_locale_table_emits_one_warning_per_switch() {
        use tracing_subscriber::layer::SubscriberExt;

        let capture = WarnCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            let mut translator = english();
            assert!(capture.0.lock().unwrap().is_empty());

            translator.set_props(Some(LocaleProps::for_locale("fr")));
            assert_eq!(translator.get("title"), "title");
            // 语言未变化时不重新计算，也不重复告警
            translator.set_props(Some(
                LocaleProps::for_locale("fr").with_direction(TextDirection::Rtl),
            ));
            translator.set_props(Some(LocaleProps::for_locale("ar")));
        });

        let warnings = capture.0.lock().unwrap().clone();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("no translations loaded for locale"));
        assert!(warnings[0].contains("locale=\"fr\""));
    }

    #[test]
    fn defaults_without_props() {
        let translator = Translator::new(table(), None);
        assert_eq!(translator.locale(), "en");
        assert_eq!(translator.direction(), TextDirection::Ltr);
        assert_eq!(translator.descriptor(), LocaleDescriptor::default());
        assert!(translator.available_locales().is_empty());
        assert_eq!(translator.get("title"), "Dashboard");
    }

    #[test]
    fn available_locales_follow_metadata_order() {
        let mut available = IndexMap::new();
        for (code, label) in [("fr", "Français"), ("en", "English"), ("ar", "العربية")] {
            available.insert(
                code.to_string(),
                LocaleMeta {
                    label: label.to_string(),
                    flag: String::new(),
                    dir: TextDirection::Ltr,
                },
            );
        }
        let translator = Translator::new(
            table(),
            Some(LocaleProps::for_locale("en").with_available(available)),
        );
        assert_eq!(translator.available_locales(), vec!["fr", "en", "ar"]);
    }
}
