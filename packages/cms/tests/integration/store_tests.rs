use cms::storage::memory::MemoryStorage;
use cms::store::{generate_id, remove_by_id};
use cms::test_utils::TestContext;
use cms::{Cms, KeyValueStorage, Lawyer, StoreError, StoreKey};
use serde_json::json;
use std::sync::Arc;

/// Reads from memory, refuses every write the way a full localStorage does.
struct QuotaFullStorage {
    inner: MemoryStorage,
}

impl KeyValueStorage for QuotaFullStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::QuotaExceeded {
            key: key.to_string(),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove_item(key)
    }

    fn describe(&self) -> String {
        "quota-full".to_string()
    }
}

#[test]
fn test_save_then_load_round_trips() {
    let ctx = TestContext::new();
    let store = ctx.cms.store();

    let values = [
        json!(null),
        json!(42),
        json!("نص"),
        json!([1, "two", { "three": [3.5, false] }]),
        json!({ "nested": { "ar": "أ", "en": "A" }, "list": [] }),
    ];
    for value in values {
        store.save(StoreKey::SiteContent, &value).unwrap();
        let loaded: serde_json::Value = store.load(StoreKey::SiteContent, json!("default"));
        assert_eq!(loaded, value);
    }
}

#[test]
fn test_corrupt_document_reads_as_default() {
    let ctx = TestContext::new();
    ctx.put_raw("contactSubmissions", "[{\"id\": ");
    assert!(ctx.cms.contact().list().is_empty());

    ctx.put_raw("lawyers", "not json");
    assert_eq!(ctx.cms.lawyers().list_or_default().len(), 4);
}

#[test]
fn test_mutate_array_adds_exactly_one_record() {
    let ctx = TestContext::new();
    let store = ctx.cms.store();
    let before = ctx.cms.lawyers().list().unwrap();

    let template = before[0].clone();
    let added = store
        .mutate_array(StoreKey::Lawyers, |items: &mut Vec<Lawyer>| {
            let mut record = template.clone();
            record.id = generate_id(items);
            items.push(record.clone());
            record
        })
        .unwrap();

    let after: Vec<Lawyer> = store.load(StoreKey::Lawyers, Vec::new());
    assert_eq!(after.len(), before.len() + 1);
    assert!(!added.id.is_empty());
    let stored = after.iter().find(|l| l.id == added.id).unwrap();
    assert_eq!(stored.name, template.name);
    assert_eq!(stored.bio, template.bio);
}

#[test]
fn test_delete_by_id_leaves_others_untouched() {
    let ctx = TestContext::new();
    let lawyers = ctx.cms.lawyers().list().unwrap();

    for target in 0..lawyers.len() {
        let mut items = lawyers.clone();
        let id = items[target].id.clone();
        assert!(remove_by_id(&mut items, &id));

        let mut expected = lawyers.clone();
        expected.remove(target);
        assert_eq!(items, expected);
    }
}

#[test]
fn test_generated_ids_are_unique_within_array() {
    let ctx = TestContext::new();
    let mut ids = Vec::new();
    for i in 0..20 {
        let submission = ctx
            .cms
            .contact()
            .submit(&cms::ContactForm {
                name: format!("Visitor {i}"),
                email: "v@example.com".to_string(),
                subject: "S".to_string(),
                message: "M".to_string(),
                ..Default::default()
            })
            .unwrap();
        ids.push(submission.id);
    }
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_quota_exceeded_keeps_previous_document() {
    let previous = r#"[{"id":"1","name":"Earlier","email":"e@example.com","phone":"","subject":"S","message":"M","submittedAt":"2024-01-01T00:00:00Z","isRead":false}]"#;
    let backend = Arc::new(QuotaFullStorage {
        inner: MemoryStorage::new().with_item("contactSubmissions", previous),
    });
    let site = Cms::new(backend.clone(), TestContext::config());
    let revision = site.store().notifier().revision();

    let err = site
        .contact()
        .submit(&cms::ContactForm {
            name: "Visitor".to_string(),
            email: "v@example.com".to_string(),
            subject: "Question".to_string(),
            message: "Hello".to_string(),
            ..Default::default()
        })
        .unwrap_err();

    assert_eq!(err.message_key(), "error.store.quota");
    assert_eq!(
        backend.get_item("contactSubmissions").unwrap().as_deref(),
        Some(previous)
    );
    assert_eq!(site.store().notifier().revision(), revision);
}
