use super::KeyValueStorage;
use crate::error::StoreError;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory storage backend (tests and non-browser builds)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key with raw text, e.g. to simulate foreign or corrupt data.
    pub fn with_item(self, key: &str, raw: &str) -> Self {
        self.lock().insert(key.to_string(), raw.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("language").unwrap(), None);

        storage.set_item("language", "\"en\"").unwrap();
        assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("\"en\""));

        storage.remove_item("language").unwrap();
        assert!(storage.is_empty());
        // Removing twice is fine.
        storage.remove_item("language").unwrap();
    }

    #[test]
    fn with_item_prefills() {
        let storage = MemoryStorage::new().with_item("lawyers", "not json");
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get_item("lawyers").unwrap().as_deref(), Some("not json"));
    }
}
