use chrono::DateTime;
use cms::test_utils::TestContext;
use cms::{ArticleCategory, ArticleDraft, ContactForm, Language};

#[test]
fn test_empty_store_seeds_four_lawyers_and_persists_them() {
    let ctx = TestContext::new();
    assert!(ctx.raw("lawyers").is_none());

    let first = ctx.cms.lawyers().list().unwrap();
    assert_eq!(first.len(), 4);
    let persisted = ctx.raw("lawyers").expect("defaults should be persisted");

    let second = ctx.reload().lawyers().list().unwrap();
    assert_eq!(first, second);
    assert_eq!(ctx.raw("lawyers").as_deref(), Some(persisted.as_str()));
}

#[test]
fn test_contact_submission_appends_one_unread_record() {
    let ctx = TestContext::new();
    let saved = ctx
        .cms
        .contact()
        .submit(&ContactForm {
            name: "Test".to_string(),
            email: "t@example.com".to_string(),
            phone: String::new(),
            subject: "S".to_string(),
            message: "M".to_string(),
        })
        .unwrap();

    let raw = ctx.raw("contactSubmissions").unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = stored.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["isRead"], false);
    assert_eq!(records[0]["name"], "Test");
    let submitted_at = records[0]["submittedAt"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(submitted_at).is_ok());
    assert_eq!(records[0]["id"], saved.id.as_str());
}

#[test]
fn test_language_toggle_persists_across_reload() {
    let ctx = TestContext::new();
    let prefs = ctx.cms.preferences();
    assert_eq!(prefs.language(), Language::Ar);

    let next = prefs.toggle_language().unwrap();
    assert_eq!(next, Language::En);
    assert_eq!(cms::t(next, "nav.home"), "Home");

    assert_eq!(ctx.reload().preferences().language(), Language::En);
}

#[test]
fn test_language_change_is_published() {
    let ctx = TestContext::new();
    let before = ctx.cms.store().notifier().revision();
    ctx.cms.preferences().set_language(Language::En).unwrap();
    assert!(ctx.cms.store().notifier().revision() > before);
}

#[test]
fn test_legacy_articles_are_unified() {
    let ctx = TestContext::new();
    ctx.put_raw(
        "cmsArticles",
        r#"[{"id":"7","titleAr":"عقد","titleEn":"Contracts","contentAr":"ن","contentEn":"T","category":"commercial"}]"#,
    );

    let articles = ctx.cms.articles().list_published();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].category, ArticleCategory::Commercial);
    assert!(ctx.raw("cmsArticles").is_none());
    assert!(ctx.raw("articles").is_some());
}

#[test]
fn test_article_views_are_not_counted() {
    let ctx = TestContext::new();
    let article = ctx
        .cms
        .articles()
        .create(&ArticleDraft {
            title_ar: "عنوان".to_string(),
            title_en: "Title".to_string(),
            content_ar: "محتوى".to_string(),
            content_en: "Body".to_string(),
            is_active: true,
            ..Default::default()
        })
        .unwrap();
    for _ in 0..3 {
        ctx.cms.articles().get(&article.id);
    }
    assert_eq!(ctx.cms.articles().get(&article.id).unwrap().views, 0);
}
