//! Whole-document JSON persistence over a [`KeyValueStorage`] backend.
//!
//! Every screen follows the same cycle: load the document under its key, change an
//! in-memory copy, write the whole document back. There is no merge and no versioning;
//! the last write wins.
use crate::error::StoreError;
use crate::notify::{ChangeKind, ChangeNotifier, StoreEvent, SubscriptionId};
use crate::storage::KeyValueStorage;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Keys of the documents the site persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    SiteContent,
    Lawyers,
    Articles,
    /// Older article document, migrated into [`StoreKey::Articles`] on first read.
    LegacyCmsArticles,
    AdminUsers,
    LoggedInUser,
    AdminLoginTime,
    ContactInfo,
    ContactSubmissions,
    SiteInfo,
    Language,
    ThemePreference,
}

impl StoreKey {
    pub const ALL: [StoreKey; 12] = [
        StoreKey::SiteContent,
        StoreKey::Lawyers,
        StoreKey::Articles,
        StoreKey::LegacyCmsArticles,
        StoreKey::AdminUsers,
        StoreKey::LoggedInUser,
        StoreKey::AdminLoginTime,
        StoreKey::ContactInfo,
        StoreKey::ContactSubmissions,
        StoreKey::SiteInfo,
        StoreKey::Language,
        StoreKey::ThemePreference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::SiteContent => "siteContent",
            StoreKey::Lawyers => "lawyers",
            StoreKey::Articles => "articles",
            StoreKey::LegacyCmsArticles => "cmsArticles",
            StoreKey::AdminUsers => "adminUsers",
            StoreKey::LoggedInUser => "loggedInUser",
            StoreKey::AdminLoginTime => "adminLoginTime",
            StoreKey::ContactInfo => "contactInfo",
            StoreKey::ContactSubmissions => "contactSubmissions",
            StoreKey::SiteInfo => "cmsSiteInfo",
            StoreKey::Language => "language",
            StoreKey::ThemePreference => "userThemePreference",
        }
    }

    pub fn from_str_opt(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl AsRef<str> for StoreKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Document-level access to the key/value store. Clones share the backend and notifier.
#[derive(Clone)]
pub struct DocumentStore {
    backend: Arc<dyn KeyValueStorage>,
    notifier: ChangeNotifier,
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("backend", &self.backend.describe())
            .field("notifier", &self.notifier)
            .finish()
    }
}

impl DocumentStore {
    pub fn new(backend: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            backend,
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStorage> {
        &self.backend
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// The parsed document, or `None` when absent, unreadable or not valid for `T`.
    pub fn load_opt<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T> {
        let raw = match self.backend.get_item(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("store.load: key={} read failed: {}", key.as_str(), e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    "store.load: key={} ignoring unparsable document ({} bytes): {}",
                    key.as_str(),
                    raw.len(),
                    e
                );
                None
            }
        }
    }

    /// Whether anything, readable or not, is stored under `key`.
    pub fn contains(&self, key: StoreKey) -> Result<bool, StoreError> {
        Ok(self.backend.get_item(key.as_str())?.is_some())
    }

    /// The parsed document, or `default` when absent or corrupt.
    pub fn load<T: DeserializeOwned>(&self, key: StoreKey, default: T) -> T {
        self.load_opt(key).unwrap_or(default)
    }

    /// Serialize and overwrite the whole document.
    pub fn save<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_item(key.as_str(), &raw).map_err(|e| {
            tracing::warn!("store.save: key={} failed: {}", key.as_str(), e);
            e
        })?;
        tracing::debug!("store.save: key={} bytes={}", key.as_str(), raw.len());
        self.notifier.publish(key, ChangeKind::Saved);
        Ok(())
    }

    pub fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        self.backend.remove_item(key.as_str())?;
        tracing::debug!("store.remove: key={}", key.as_str());
        self.notifier.publish(key, ChangeKind::Removed);
        Ok(())
    }

    /// Stored document, or `seed()` persisted and returned when nothing usable is stored.
    pub fn load_or_seed<T, F>(&self, key: StoreKey, seed: F) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.load_opt(key) {
            return Ok(value);
        }
        let value = seed();
        self.save(key, &value)?;
        tracing::info!("store.seed: key={} seeded defaults", key.as_str());
        Ok(value)
    }

    /// Load the array at `key` (default empty), apply `mutator`, write the whole array back.
    pub fn mutate_array<T, R, F>(&self, key: StoreKey, mutator: F) -> Result<R, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let mut items: Vec<T> = self.load(key, Vec::new());
        let out = mutator(&mut items);
        self.save(key, &items)?;
        Ok(out)
    }

    /// Like [`Self::mutate_array`], but nothing is written when the mutator fails.
    pub fn try_mutate_array<T, R, E, F>(&self, key: StoreKey, mutator: F) -> Result<R, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<StoreError>,
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
    {
        let mut items: Vec<T> = self.load(key, Vec::new());
        let out = mutator(&mut items)?;
        self.save(key, &items)?;
        Ok(out)
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

/// Records that live in an array document and are addressed by a generated id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Epoch-millisecond id, bumped past any id already present in `existing`.
///
/// Uniqueness holds within one array in one process only; two tabs creating a record in
/// the same millisecond can still collide.
pub fn generate_id<T: Identified>(existing: &[T]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    while existing.iter().any(|item| item.id() == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

/// Remove the record with `id`. Returns whether anything was removed.
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

pub fn find_by_id_mut<'a, T: Identified>(items: &'a mut [T], id: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        body: String,
    }

    impl Identified for Note {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: id.to_string(),
            body: body.to_string(),
        }
    }

    fn store() -> DocumentStore {
        DocumentStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = store();
        let doc = json!({ "texts": { "about.title": { "ar": "عنا", "en": "Us" } }, "n": [1, 2, 3] });
        store.save(StoreKey::SiteContent, &doc).unwrap();
        let back: serde_json::Value = store.load(StoreKey::SiteContent, json!(null));
        assert_eq!(back, doc);
    }

    #[test]
    fn missing_or_corrupt_yields_default() {
        let backend = MemoryStorage::new().with_item("lawyers", "{not json");
        let store = DocumentStore::new(Arc::new(backend));

        let lawyers: Vec<Note> = store.load(StoreKey::Lawyers, Vec::new());
        assert!(lawyers.is_empty());

        let articles: Vec<Note> = store.load(StoreKey::Articles, vec![note("1", "d")]);
        assert_eq!(articles.len(), 1);
    }

    #[test]
    fn wrong_shape_is_treated_as_absent() {
        let backend = MemoryStorage::new().with_item("articles", "{\"foreign\":true}");
        let store = DocumentStore::new(Arc::new(backend));
        assert_eq!(store.load_opt::<Vec<Note>>(StoreKey::Articles), None);
    }

    #[test]
    fn mutate_array_appends_and_persists() {
        let store = store();
        store
            .mutate_array(StoreKey::Articles, |items: &mut Vec<Note>| {
                items.push(note("1", "a"));
            })
            .unwrap();
        let added = store
            .mutate_array(StoreKey::Articles, |items: &mut Vec<Note>| {
                let id = generate_id(items);
                items.push(note(&id, "b"));
                id
            })
            .unwrap();

        let items: Vec<Note> = store.load(StoreKey::Articles, Vec::new());
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, added);
        assert_eq!(items[1].body, "b");
    }

    #[test]
    fn try_mutate_array_does_not_write_on_error() {
        let store = store();
        store.save(StoreKey::Lawyers, &vec![note("1", "a")]).unwrap();
        let rev = store.notifier().revision();

        let result: Result<(), StoreError> =
            store.try_mutate_array(StoreKey::Lawyers, |items: &mut Vec<Note>| {
                items.clear();
                Err(StoreError::Unavailable)
            });
        assert!(result.is_err());
        assert_eq!(store.notifier().revision(), rev);
        assert_eq!(store.load::<Vec<Note>>(StoreKey::Lawyers, Vec::new()).len(), 1);
    }

    #[test]
    fn remove_by_id_removes_exactly_one_anywhere() {
        for target in ["1", "2", "3"] {
            let mut items = vec![note("1", "a"), note("2", "b"), note("3", "c")];
            assert!(remove_by_id(&mut items, target));
            assert_eq!(items.len(), 2);
            assert!(items.iter().all(|n| n.id != target));
        }
        let mut items = vec![note("1", "a")];
        assert!(!remove_by_id(&mut items, "9"));
        assert_eq!(items, vec![note("1", "a")]);
    }

    #[test]
    fn generate_id_skips_collisions() {
        let now = Utc::now().timestamp_millis();
        let existing: Vec<Note> = (0..5).map(|i| note(&(now + i).to_string(), "")).collect();
        let id = generate_id(&existing);
        assert!(!id.is_empty());
        assert!(existing.iter().all(|n| n.id != id));
        assert!(id.parse::<i64>().unwrap() >= now);
    }

    #[test]
    fn load_or_seed_persists_once() {
        let store = store();
        let calls = AtomicUsize::new(0);
        let seed = || {
            calls.fetch_add(1, Ordering::SeqCst);
            vec![note("1", "seed")]
        };

        let first: Vec<Note> = store.load_or_seed(StoreKey::Lawyers, seed).unwrap();
        let second: Vec<Note> = store
            .load_or_seed(StoreKey::Lawyers, || {
                calls.fetch_add(1, Ordering::SeqCst);
                Vec::new()
            })
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn writes_publish_events() {
        let store = store();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        store.subscribe(move |event| {
            if event.key == StoreKey::Language {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        store.save(StoreKey::Language, &"en").unwrap();
        store.remove(StoreKey::Language).unwrap();
        store.save(StoreKey::Lawyers, &Vec::<Note>::new()).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn store_keys_are_unique() {
        for key in StoreKey::ALL {
            assert_eq!(StoreKey::from_str_opt(key.as_str()), Some(key));
        }
    }
}
