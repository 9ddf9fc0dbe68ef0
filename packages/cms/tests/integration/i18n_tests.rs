use cms::i18n::builtin;
use cms::{resolve, Language, LocalizedText, SiteContent};

const KEYS: [&str; 6] = [
    "nav.home",
    "about.title",
    "home.hero.title",
    "contact.form.send",
    "blog.title",
    "category.family",
];

fn overrides_with(key: &str, ar: &str, en: &str) -> SiteContent {
    let mut content = SiteContent::default();
    content.texts.insert(
        key.to_string(),
        LocalizedText {
            ar: ar.to_string(),
            en: en.to_string(),
        },
    );
    content
}

#[test]
fn test_full_override_wins_for_every_key_and_language() {
    for key in KEYS {
        let content = overrides_with(key, "نص مخصص", "Custom text");
        assert_eq!(resolve(key, Language::Ar, Some(&content)), "نص مخصص");
        assert_eq!(resolve(key, Language::En, Some(&content)), "Custom text");
    }
}

#[test]
fn test_no_override_returns_builtin() {
    for key in KEYS {
        for lang in [Language::Ar, Language::En] {
            let expected = builtin(lang, key).expect("key should have a built-in text");
            assert_eq!(resolve(key, lang, None), expected);
            assert_eq!(resolve(key, lang, Some(&SiteContent::default())), expected);
        }
    }
}

#[test]
fn test_partial_override_is_ignored_wholesale() {
    for key in KEYS {
        let arabic_only = overrides_with(key, "نص مخصص", "");
        let english_only = overrides_with(key, "", "Custom text");
        for lang in [Language::Ar, Language::En] {
            let expected = builtin(lang, key).expect("key should have a built-in text");
            assert_eq!(resolve(key, lang, Some(&arabic_only)), expected);
            assert_eq!(resolve(key, lang, Some(&english_only)), expected);
        }
    }
}

#[test]
fn test_every_builtin_key_exists_in_both_languages() {
    let keys = [
        "app.name",
        "nav.admin",
        "login.invalid",
        "auth.forbidden",
        "validation.both_languages",
        "error.store.quota",
        "admins.last_superadmin",
    ];
    for key in keys {
        assert!(builtin(Language::Ar, key).is_some(), "missing ar for {key}");
        assert!(builtin(Language::En, key).is_some(), "missing en for {key}");
    }
}
