use crate::error::CmsError;
use crate::seed;
use crate::store::{DocumentStore, StoreKey};
use crate::types::{HeroContent, SiteContent, SiteInfo, ThemeColors};
use crate::validate;

/// Site-authored texts, hero, logo and theme (`siteContent`), plus firm identity
/// (`cmsSiteInfo`).
#[derive(Debug, Clone)]
pub struct SiteContentService {
    store: DocumentStore,
}

impl SiteContentService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// The override document, empty when nothing was authored or the stored one is corrupt.
    pub fn get(&self) -> SiteContent {
        self.store.load(StoreKey::SiteContent, SiteContent::default())
    }

    pub fn save(&self, content: &SiteContent) -> Result<(), CmsError> {
        self.store.save(StoreKey::SiteContent, content)?;
        tracing::info!("site_content.save: overrides={}", content.texts.len());
        Ok(())
    }

    /// Author an override for `key`. Both blank removes it; one blank is rejected.
    pub fn set_override(&self, key: &str, ar: &str, en: &str) -> Result<(), CmsError> {
        let key = validate::required("key", key)?;
        let text = validate::optional_text("text", ar, en)?;
        let mut content = self.get();
        if text.is_empty() {
            content.texts.remove(&key);
        } else {
            content.texts.insert(key.clone(), text);
        }
        self.store.save(StoreKey::SiteContent, &content)?;
        tracing::info!("site_content.set_override: key={}", key);
        Ok(())
    }

    pub fn clear_override(&self, key: &str) -> Result<bool, CmsError> {
        let mut content = self.get();
        let removed = content.texts.remove(key).is_some();
        if removed {
            self.store.save(StoreKey::SiteContent, &content)?;
            tracing::info!("site_content.clear_override: key={}", key);
        }
        Ok(removed)
    }

    pub fn set_hero(&self, hero: &HeroContent) -> Result<(), CmsError> {
        let hero = HeroContent {
            title: validate::optional_text("hero_title", &hero.title.ar, &hero.title.en)?,
            subtitle: validate::optional_text("hero_subtitle", &hero.subtitle.ar, &hero.subtitle.en)?,
        };
        let mut content = self.get();
        content.hero = hero;
        self.store.save(StoreKey::SiteContent, &content)?;
        tracing::info!("site_content.set_hero");
        Ok(())
    }

    pub fn set_theme(&self, theme: &ThemeColors) -> Result<(), CmsError> {
        let mut content = self.get();
        content.theme = theme.clone();
        self.store.save(StoreKey::SiteContent, &content)?;
        tracing::info!("site_content.set_theme: primary={}", theme.primary);
        Ok(())
    }

    /// Replace the logo. Blank clears it.
    pub fn set_logo(&self, logo: &str) -> Result<(), CmsError> {
        let logo = validate::optional_url("logo", logo)?;
        let mut content = self.get();
        content.logo = logo;
        self.store.save(StoreKey::SiteContent, &content)?;
        tracing::info!("site_content.set_logo: present={}", content.logo.is_some());
        Ok(())
    }

    pub fn site_info(&self) -> SiteInfo {
        self.store
            .load_opt(StoreKey::SiteInfo)
            .unwrap_or_else(seed::default_site_info)
    }

    pub fn save_site_info(&self, info: &SiteInfo) -> Result<(), CmsError> {
        let info = SiteInfo {
            firm_name: validate::required_text("firm_name", &info.firm_name.ar, &info.firm_name.en)?,
            tagline: validate::optional_text("tagline", &info.tagline.ar, &info.tagline.en)?,
        };
        self.store.save(StoreKey::SiteInfo, &info)?;
        tracing::info!("site_content.save_site_info");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::i18n::{resolve, Language};
    use crate::storage::memory::MemoryStorage;
    use crate::types::LocalizedText;
    use std::sync::Arc;

    fn service_with(backend: MemoryStorage) -> SiteContentService {
        SiteContentService::new(DocumentStore::new(Arc::new(backend)))
    }

    #[test]
    fn override_is_used_by_resolver() {
        let service = service_with(MemoryStorage::new());
        service.set_override("about.title", "من نحن", "Who we are").unwrap();
        let content = service.get();
        assert_eq!(resolve("about.title", Language::En, Some(&content)), "Who we are");
        assert_eq!(resolve("about.title", Language::Ar, Some(&content)), "من نحن");
    }

    #[test]
    fn half_filled_override_is_rejected() {
        let service = service_with(MemoryStorage::new());
        let err = service.set_override("about.title", "من نحن", " ").unwrap_err();
        assert!(matches!(
            err,
            CmsError::Validation(ValidationError::IncompleteTranslation { .. })
        ));
        assert!(service.get().texts.is_empty());
    }

    #[test]
    fn blank_override_clears() {
        let service = service_with(MemoryStorage::new());
        service.set_override("about.title", "أ", "A").unwrap();
        service.set_override("about.title", "", "").unwrap();
        assert!(service.get().texts.is_empty());
        assert!(!service.clear_override("about.title").unwrap());
    }

    #[test]
    fn corrupt_document_reads_as_empty() {
        let service = service_with(MemoryStorage::new().with_item("siteContent", "{not json"));
        assert_eq!(service.get(), SiteContent::default());
    }

    #[test]
    fn hero_overrides_home_keys() {
        let service = service_with(MemoryStorage::new());
        service
            .set_hero(&HeroContent {
                title: LocalizedText {
                    ar: "عنوان".to_string(),
                    en: "Headline".to_string(),
                },
                subtitle: LocalizedText::default(),
            })
            .unwrap();
        let content = service.get();
        assert_eq!(resolve("home.hero.title", Language::En, Some(&content)), "Headline");
        assert_ne!(resolve("home.hero.subtitle", Language::En, Some(&content)), "home.hero.subtitle");
    }

    #[test]
    fn logo_and_theme_are_kept_together() {
        let service = service_with(MemoryStorage::new());
        service.set_logo("https://cdn.example.com/logo.png").unwrap();
        let theme = ThemeColors {
            primary: "#000000".to_string(),
            ..ThemeColors::default()
        };
        service.set_theme(&theme).unwrap();

        let content = service.get();
        assert_eq!(content.logo.as_deref(), Some("https://cdn.example.com/logo.png"));
        assert_eq!(content.theme, theme);
        assert!(service.set_logo("ftp://nope").is_err());
    }

    #[test]
    fn site_info_requires_firm_name() {
        let service = service_with(MemoryStorage::new());
        assert_eq!(service.site_info(), seed::default_site_info());
        let err = service.save_site_info(&SiteInfo::default()).unwrap_err();
        assert!(matches!(
            err,
            CmsError::Validation(ValidationError::MissingField { field: "firm_name" })
        ));
    }
}
