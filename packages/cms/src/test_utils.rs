//! Helpers for integration tests and tooling.
use crate::config::{AppConfig, StorageConfig};
use crate::state::Cms;
use crate::storage::memory::MemoryStorage;
use crate::storage::KeyValueStorage;
use std::sync::Arc;

pub const TEST_SESSION_SECRET: &str = "test-secret-key-min-32-characters-long";

/// A [`Cms`] over in-memory storage that can be "reloaded" like a page refresh.
pub struct TestContext {
    pub backend: Arc<MemoryStorage>,
    pub cms: Cms,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_backend(MemoryStorage::new())
    }

    /// Start from pre-existing raw documents, e.g. legacy or corrupt data.
    pub fn with_backend(backend: MemoryStorage) -> Self {
        let backend = Arc::new(backend);
        let cms = Cms::new(backend.clone(), Self::config());
        Self { backend, cms }
    }

    pub fn config() -> AppConfig {
        let mut config = AppConfig::local(StorageConfig::Memory);
        config.session_secret = TEST_SESSION_SECRET.to_string();
        config
    }

    /// A fresh [`Cms`] over the same stored documents.
    pub fn reload(&self) -> Cms {
        Cms::new(self.backend.clone(), Self::config())
    }

    /// Raw stored text under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.backend.get_item(key).ok().flatten()
    }

    /// Overwrite `key` with raw text, bypassing the document store.
    pub fn put_raw(&self, key: &str, raw: &str) {
        if let Err(e) = self.backend.set_item(key, raw) {
            tracing::warn!("test_utils.put_raw: {}", e);
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
