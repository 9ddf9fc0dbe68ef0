use crate::i18n::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A paired Arabic/English string.
///
/// Stored documents may hold a partial pair (older data, hand edits), so reads never
/// assume both sides exist. New values coming from forms go through [`LocalizedText::parse`],
/// which only accepts "both present or neither".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub ar: String,
    #[serde(default)]
    pub en: String,
}

/// Exactly one language variant of a bilingual value was provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncompleteTranslation {
    pub missing: Language,
}

impl LocalizedText {
    /// Shown when neither language variant has any text.
    pub const PLACEHOLDER: &'static str = "—";

    /// Checked constructor: `Ok(Some)` when both sides are filled, `Ok(None)` when both
    /// are blank, an error naming the missing side otherwise. Input is trimmed.
    pub fn parse(ar: &str, en: &str) -> Result<Option<Self>, IncompleteTranslation> {
        let (ar, en) = (ar.trim(), en.trim());
        match (ar.is_empty(), en.is_empty()) {
            (true, true) => Ok(None),
            (false, false) => Ok(Some(Self {
                ar: ar.to_string(),
                en: en.to_string(),
            })),
            (true, false) => Err(IncompleteTranslation {
                missing: Language::Ar,
            }),
            (false, true) => Err(IncompleteTranslation {
                missing: Language::En,
            }),
        }
    }

    /// Both sides non-blank, or nothing.
    pub fn complete(ar: &str, en: &str) -> Option<Self> {
        Self::parse(ar, en).ok().flatten()
    }

    pub fn is_complete(&self) -> bool {
        !self.ar.trim().is_empty() && !self.en.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.ar.trim().is_empty() && self.en.trim().is_empty()
    }

    /// The raw variant for `lang`, possibly empty.
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }

    /// Never-empty rendering: the active side, else the other side, else [`Self::PLACEHOLDER`].
    pub fn display(&self, lang: Language) -> &str {
        let primary = self.get(lang);
        if !primary.trim().is_empty() {
            return primary;
        }
        let other = self.get(lang.other());
        if !other.trim().is_empty() {
            return other;
        }
        Self::PLACEHOLDER
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Superadmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }
}

/// Fixed legal practice areas an article can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleCategory {
    #[default]
    Corporate,
    Criminal,
    Family,
    RealEstate,
    Labor,
    Commercial,
    Administrative,
    IntellectualProperty,
}

impl ArticleCategory {
    pub const ALL: [ArticleCategory; 8] = [
        ArticleCategory::Corporate,
        ArticleCategory::Criminal,
        ArticleCategory::Family,
        ArticleCategory::RealEstate,
        ArticleCategory::Labor,
        ArticleCategory::Commercial,
        ArticleCategory::Administrative,
        ArticleCategory::IntellectualProperty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleCategory::Corporate => "corporate",
            ArticleCategory::Criminal => "criminal",
            ArticleCategory::Family => "family",
            ArticleCategory::RealEstate => "real_estate",
            ArticleCategory::Labor => "labor",
            ArticleCategory::Commercial => "commercial",
            ArticleCategory::Administrative => "administrative",
            ArticleCategory::IntellectualProperty => "intellectual_property",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    /// Translation key of the category label, e.g. `category.real_estate`.
    pub fn label_key(&self) -> String {
        format!("category.{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub content: LocalizedText,
    #[serde(default)]
    pub excerpt: LocalizedText,
    #[serde(default)]
    pub category: ArticleCategory,
    #[serde(default)]
    pub image: Option<String>,
    /// Stored but never incremented; nothing in the site counts page views.
    #[serde(default)]
    pub views: u64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lawyer {
    pub id: String,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub specialty: LocalizedText,
    #[serde(default)]
    pub bio: LocalizedText,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub username: String,
    /// Argon2 PHC string; the plaintext password is never stored. Empty never verifies.
    #[serde(default)]
    pub password_hash: String,
    pub role: Role,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub address: LocalizedText,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub working_hours: LocalizedText,
    #[serde(default)]
    pub social: SocialLinks,
}

/// Free-form style tokens; values are CSS colors but nothing checks that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#1f3a5f".to_string(),
            secondary: "#c9a227".to_string(),
            accent: "#8b1e3f".to_string(),
            background: "#f8f6f1".to_string(),
            text: "#1c1c1c".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub subtitle: LocalizedText,
}

/// The site-authored override document stored under `siteContent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    /// Overrides keyed by logical content key (`about.title`, ...).
    #[serde(default)]
    pub texts: BTreeMap<String, LocalizedText>,
    #[serde(default)]
    pub hero: HeroContent,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub theme: ThemeColors,
}

impl SiteContent {
    /// The override for `key`, only when both language variants are present.
    /// The hero block wins over a `texts` entry for the two hero keys.
    pub fn complete_override(&self, key: &str) -> Option<&LocalizedText> {
        let hero = match key {
            "home.hero.title" => Some(&self.hero.title),
            "home.hero.subtitle" => Some(&self.hero.subtitle),
            _ => None,
        };
        hero.filter(|text| text.is_complete())
            .or_else(|| self.texts.get(key).filter(|text| text.is_complete()))
    }
}

/// Firm identity shown in the header and footer (`cmsSiteInfo`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    #[serde(default)]
    pub firm_name: LocalizedText,
    #[serde(default)]
    pub tagline: LocalizedText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

fn default_true() -> bool {
    true
}
