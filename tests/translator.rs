use std::io::Write;
use std::sync::Arc;

use langsync::models::{LocaleMeta, ReplacementValue};
use langsync::{LocaleProps, Replacements, TextDirection, TranslationTable, Translator};

const TABLE: &str = r#"{
    "en": {
        "auth": { "failed": "These credentials do not match our records." },
        "welcome": "Welcome, :name!",
        "cart": { "summary": "{name} has :count items" },
        "limits": { "max": 5 }
    },
    "ar": {
        "welcome": "أهلا :name"
    }
}"#;

fn load_table() -> Arc<TranslationTable> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TABLE.as_bytes()).unwrap();
    Arc::new(TranslationTable::load(file.path()).unwrap())
}

fn page(current: &str, dir: TextDirection) -> LocaleProps {
    let mut available = indexmap::IndexMap::new();
    available.insert(
        "en".to_string(),
        LocaleMeta {
            label: "English".to_string(),
            flag: "🇬🇧".to_string(),
            dir: TextDirection::Ltr,
        },
    );
    available.insert(
        "ar".to_string(),
        LocaleMeta {
            label: "العربية".to_string(),
            flag: "🇸🇦".to_string(),
            dir: TextDirection::Rtl,
        },
    );
    LocaleProps::for_locale(current)
        .with_direction(dir)
        .with_available(available)
}

#[test]
fn nested_table_resolves_dotted_keys() {
    let translator = Translator::new(load_table(), Some(page("en", TextDirection::Ltr)));

    assert_eq!(
        translator.get("auth.failed"),
        "These credentials do not match our records."
    );
    assert_eq!(translator.get("limits.max"), "5");
    assert!(translator.exists("auth.failed"));
    assert!(!translator.exists("auth"));
}

#[test]
fn lookup_substitutes_both_placeholder_styles() {
    let translator = Translator::new(load_table(), Some(page("en", TextDirection::Ltr)));
    let replacements = Replacements::new().with("name", "Alice");

    assert_eq!(
        translator.lookup("welcome", Some(&replacements), None),
        "Welcome, Alice!"
    );
    assert_eq!(
        translator.pluralize("cart.summary", 3, Some(&replacements)),
        "Alice has 3 items"
    );
    assert_eq!(
        translator.pluralize("cart.summary", ReplacementValue::Float(1.5), None),
        "{name} has 1.5 items"
    );
}

#[test]
fn switching_locale_changes_entries_and_direction() {
    let mut translator = Translator::new(load_table(), Some(page("en", TextDirection::Ltr)));
    assert_eq!(translator.available_locales(), vec!["en", "ar"]);

    translator.set_props(Some(page("ar", TextDirection::Rtl)));
    assert_eq!(translator.locale(), "ar");
    assert_eq!(translator.direction(), TextDirection::Rtl);
    assert_eq!(
        translator.lookup("welcome", Some(&Replacements::new().with("name", "Omar")), None),
        "أهلا Omar"
    );
    // 当前语言缺失的键不会回退到其他语言
    assert_eq!(translator.get("auth.failed"), "auth.failed");
    assert_eq!(
        translator.lookup("auth.failed", None, Some("Login failed")),
        "Login failed"
    );
}

#[test]
fn missing_page_data_uses_defaults() {
    let translator = Translator::new(load_table(), None);

    assert_eq!(translator.locale(), "en");
    assert_eq!(translator.direction(), TextDirection::Ltr);
    assert!(translator.available_locales().is_empty());
    assert_eq!(translator.descriptor().code, "en");
}
