use crate::admins::AdminService;
use crate::articles::ArticleService;
use crate::config::{AppConfig, AppMode, StorageConfig};
use crate::contact::ContactService;
use crate::lawyers::LawyerService;
use crate::notify::{StoreEvent, SubscriptionId};
use crate::preferences::Preferences;
use crate::session::{SessionConfig, SessionGate};
use crate::site_content::SiteContentService;
use crate::storage::filesystem::FilesystemStorage;
use crate::storage::memory::MemoryStorage;
use crate::storage::KeyValueStorage;
use crate::store::DocumentStore;
use anyhow::{bail, Result};
use std::sync::Arc;

/// Every content service wired over one shared store. Cheap to clone.
#[derive(Clone)]
pub struct Cms {
    pub config: AppConfig,
    store: DocumentStore,
    articles: ArticleService,
    lawyers: LawyerService,
    admins: AdminService,
    contact: ContactService,
    site_content: SiteContentService,
    preferences: Preferences,
    session: SessionGate,
}

impl std::fmt::Debug for Cms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cms")
            .field("config", &self.config)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl Cms {
    /// Open the storage named by `config`.
    ///
    /// Browser storage lives in the UI crate; use [`Cms::new`] with that backend instead.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let backend: Arc<dyn KeyValueStorage> = match &config.storage {
            StorageConfig::Memory => Arc::new(MemoryStorage::new()),
            StorageConfig::Filesystem { base_path } => Arc::new(FilesystemStorage::new(base_path)?),
            StorageConfig::Browser => {
                bail!("browser storage must be supplied by the caller (see Cms::new)")
            }
        };
        Ok(Self::new(backend, config))
    }

    pub fn new(backend: Arc<dyn KeyValueStorage>, config: AppConfig) -> Self {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }
        tracing::info!("   Storage: {}", backend.describe());
        tracing::info!("   Default language: {}", config.default_language.code());

        let store = DocumentStore::new(backend);
        let session = SessionGate::new(
            store.clone(),
            SessionConfig {
                secret: config.session_secret.clone(),
                ttl: config.session_ttl(),
            },
        );

        Self {
            articles: ArticleService::new(store.clone()),
            lawyers: LawyerService::new(store.clone()),
            admins: AdminService::new(store.clone()),
            contact: ContactService::new(store.clone()),
            site_content: SiteContentService::new(store.clone()),
            preferences: Preferences::new(store.clone(), config.default_language),
            session,
            store,
            config,
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn articles(&self) -> &ArticleService {
        &self.articles
    }

    pub fn lawyers(&self) -> &LawyerService {
        &self.lawyers
    }

    pub fn admins(&self) -> &AdminService {
        &self.admins
    }

    pub fn contact(&self) -> &ContactService {
        &self.contact
    }

    pub fn site_content(&self) -> &SiteContentService {
        &self.site_content
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn session(&self) -> &SessionGate {
        &self.session
    }

    /// Be told about every write made through this instance (or its clones).
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreKey;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn memory_config_opens() {
        let cms = Cms::from_config(AppConfig::local(StorageConfig::Memory)).unwrap();
        assert_eq!(cms.lawyers().list().unwrap().len(), 4);
    }

    #[test]
    fn browser_config_needs_a_backend() {
        assert!(Cms::from_config(AppConfig::local(StorageConfig::Browser)).is_err());
    }

    #[test]
    fn services_share_one_notifier() {
        let cms = Cms::from_config(AppConfig::local(StorageConfig::Memory)).unwrap();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let id = cms.subscribe(move |event| {
            if event.key == StoreKey::ContactInfo {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        let info = cms.contact().contact_info();
        cms.clone().contact().save_contact_info(&info).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        assert!(cms.unsubscribe(id));
        cms.contact().save_contact_info(&info).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
