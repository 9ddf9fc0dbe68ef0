use crate::i18n::Language;
use anyhow::{bail, Context, Result};
use chrono::Duration;

/// Secret used when running locally without `CMS_SESSION_SECRET`.
const DEV_SESSION_SECRET: &str = "local-dev-session-secret-change-me";
const DEFAULT_SESSION_TTL_HOURS: i64 = 168;
/// One year.
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 366;
const DEFAULT_DATA_DIR: &str = ".dev/store";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::parse(std::env::var("APP_MODE").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.unwrap_or_default().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Where documents are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// `window.localStorage`, supplied by the UI crate.
    Browser,
    /// Process memory; gone on exit.
    Memory,
    /// One JSON file per key under `base_path`.
    Filesystem { base_path: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub storage: StorageConfig,
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub default_language: Language,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("mode", &self.mode)
            .field("storage", &self.storage)
            .field("session_secret", &"<redacted>")
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field("default_language", &self.default_language)
            .finish()
    }
}

impl AppConfig {
    /// Read configuration from the process environment (and `.env` on native targets).
    ///
    /// In the browser there is no process environment; values baked in at compile time
    /// are used instead.
    pub fn from_env() -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = dotenvy::dotenv();
            Self::from_lookup(|key| std::env::var(key).ok())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(compiled_env)
        }
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mode = AppMode::parse(lookup("APP_MODE").as_deref());

        let storage = match lookup("CMS_STORAGE")
            .unwrap_or_default()
            .trim()
            .to_lowercase()
            .as_str()
        {
            "" if cfg!(target_arch = "wasm32") => StorageConfig::Browser,
            "" | "filesystem" | "fs" => StorageConfig::Filesystem {
                base_path: lookup("CMS_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
            },
            "browser" => StorageConfig::Browser,
            "memory" => StorageConfig::Memory,
            other => bail!("CMS_STORAGE must be browser, memory or filesystem (got {other:?})"),
        };

        let session_secret = match lookup("CMS_SESSION_SECRET").filter(|s| !s.trim().is_empty()) {
            Some(secret) => secret,
            None if mode == AppMode::Local => DEV_SESSION_SECRET.to_string(),
            // The secret is shipped to the client in a browser build; requiring one
            // there protects nothing.
            None if storage == StorageConfig::Browser => {
                tracing::warn!("config: CMS_SESSION_SECRET not set, using built-in secret");
                DEV_SESSION_SECRET.to_string()
            }
            None => bail!("CMS_SESSION_SECRET is required in production mode"),
        };

        let session_ttl_hours = match lookup("CMS_SESSION_TTL_HOURS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .context("CMS_SESSION_TTL_HOURS must be a whole number of hours")?,
            None => DEFAULT_SESSION_TTL_HOURS,
        };
        if !(1..=MAX_SESSION_TTL_HOURS).contains(&session_ttl_hours)
            || Duration::try_hours(session_ttl_hours).is_none()
        {
            bail!("CMS_SESSION_TTL_HOURS must be between 1 and {MAX_SESSION_TTL_HOURS}");
        }

        let default_language = match lookup("CMS_DEFAULT_LANG") {
            Some(code) => match Language::from_code(code.trim()) {
                Some(lang) => lang,
                None => bail!("CMS_DEFAULT_LANG must be ar or en (got {code:?})"),
            },
            None => Language::default(),
        };

        Ok(Self {
            mode,
            storage,
            session_secret,
            session_ttl_hours,
            default_language,
        })
    }

    /// Session lifetime, clamped to the accepted range for hand-built configs.
    pub fn session_ttl(&self) -> Duration {
        Duration::try_hours(self.session_ttl_hours.clamp(1, MAX_SESSION_TTL_HOURS))
            .unwrap_or_else(|| Duration::hours(DEFAULT_SESSION_TTL_HOURS))
    }

    /// Local-mode settings over the given storage, for tests and tools.
    pub fn local(storage: StorageConfig) -> Self {
        Self {
            mode: AppMode::Local,
            storage,
            session_secret: DEV_SESSION_SECRET.to_string(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            default_language: Language::default(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn compiled_env(key: &str) -> Option<String> {
    let value = match key {
        "APP_MODE" => option_env!("APP_MODE"),
        "CMS_STORAGE" => option_env!("CMS_STORAGE"),
        "CMS_SESSION_SECRET" => option_env!("CMS_SESSION_SECRET"),
        "CMS_SESSION_TTL_HOURS" => option_env!("CMS_SESSION_TTL_HOURS"),
        "CMS_DEFAULT_LANG" => option_env!("CMS_DEFAULT_LANG"),
        _ => None,
    };
    value.map(str::to_string)
}
