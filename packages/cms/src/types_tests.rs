#![cfg(test)]

use crate::i18n::Language;
use crate::types::{Article, ArticleCategory, LocalizedText, Role, SiteContent, ThemePreference};

#[test]
fn localized_text_parse_requires_both_or_neither() {
    assert_eq!(LocalizedText::parse(" ", ""), Ok(None));
    assert_eq!(
        LocalizedText::parse(" عنوان ", "Title "),
        Ok(Some(LocalizedText {
            ar: "عنوان".to_string(),
            en: "Title".to_string(),
        }))
    );
    assert_eq!(
        LocalizedText::parse("", "Title").unwrap_err().missing,
        Language::Ar
    );
    assert_eq!(
        LocalizedText::parse("عنوان", "").unwrap_err().missing,
        Language::En
    );
}

#[test]
fn localized_text_display_never_empty() {
    let partial = LocalizedText {
        ar: String::new(),
        en: "Only English".to_string(),
    };
    assert_eq!(partial.display(Language::Ar), "Only English");
    assert_eq!(LocalizedText::default().display(Language::En), LocalizedText::PLACEHOLDER);
}

#[test]
fn role_and_theme_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Superadmin).unwrap(), "\"superadmin\"");
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(serde_json::to_string(&ThemePreference::Dark).unwrap(), "\"dark\"");
    assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
}

#[test]
fn article_category_codes() {
    for category in ArticleCategory::ALL {
        assert_eq!(ArticleCategory::from_str_opt(category.as_str()), Some(category));
        assert!(category.label_key().starts_with("category."));
    }
    assert_eq!(ArticleCategory::from_str_opt("maritime"), None);
    assert_eq!(
        serde_json::to_string(&ArticleCategory::RealEstate).unwrap(),
        "\"real_estate\""
    );
}

#[test]
fn article_missing_optional_fields_use_defaults() {
    let raw = r#"{"id":"1","title":{"ar":"أ","en":"A"},"content":{"ar":"ب","en":"B"},
        "createdAt":"2024-02-01T00:00:00Z","updatedAt":"2024-02-01T00:00:00Z"}"#;
    let article: Article = serde_json::from_str(raw).unwrap();
    assert!(article.is_active);
    assert_eq!(article.views, 0);
    assert_eq!(article.category, ArticleCategory::Corporate);
    assert!(article.excerpt.is_empty());
}

#[test]
fn partial_override_is_not_complete() {
    let mut content = SiteContent::default();
    content.texts.insert(
        "about.title".to_string(),
        LocalizedText {
            ar: "من نحن".to_string(),
            en: String::new(),
        },
    );
    assert!(content.complete_override("about.title").is_none());
    assert!(content.complete_override("missing").is_none());
}
