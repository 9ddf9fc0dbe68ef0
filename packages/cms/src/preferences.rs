use crate::error::StoreError;
use crate::i18n::Language;
use crate::store::{DocumentStore, StoreKey};
use crate::types::ThemePreference;

/// Visitor preferences: UI language and light/dark theme.
#[derive(Debug, Clone)]
pub struct Preferences {
    store: DocumentStore,
    default_language: Language,
}

impl Preferences {
    pub fn new(store: DocumentStore, default_language: Language) -> Self {
        Self {
            store,
            default_language,
        }
    }

    /// Stored language. Accepts both the JSON form (`"en"`) and a bare code (`en`).
    pub fn language(&self) -> Language {
        if let Some(lang) = self.store.load_opt::<Language>(StoreKey::Language) {
            return lang;
        }
        self.store
            .backend()
            .get_item(StoreKey::Language.as_str())
            .ok()
            .flatten()
            .and_then(|raw| Language::from_code(raw.trim()))
            .unwrap_or(self.default_language)
    }

    pub fn set_language(&self, lang: Language) -> Result<(), StoreError> {
        self.store.save(StoreKey::Language, &lang)?;
        tracing::debug!("preferences.set_language: {}", lang.code());
        Ok(())
    }

    /// Switch between Arabic and English and return the new language.
    pub fn toggle_language(&self) -> Result<Language, StoreError> {
        let next = self.language().other();
        self.set_language(next)?;
        Ok(next)
    }

    pub fn theme_preference(&self) -> ThemePreference {
        self.store.load(StoreKey::ThemePreference, ThemePreference::default())
    }

    pub fn set_theme_preference(&self, theme: ThemePreference) -> Result<(), StoreError> {
        self.store.save(StoreKey::ThemePreference, &theme)?;
        tracing::debug!("preferences.set_theme_preference: {}", theme.as_str());
        Ok(())
    }
}
