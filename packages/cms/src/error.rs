//! Error types for the content store, validation and the admin session gate.
//!
//! Every error maps to a translation key through `message_key()` so the UI can render a
//! localized banner. None of them is fatal. Corrupt stored data usually reads as absent;
//! only the admin list reports it, so an unreadable account list is never reseeded.
use crate::session::AdminScreen;
use thiserror::Error;

/// Failure writing to (or reaching) the key/value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend refused the write because it is full.
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },

    /// No storage is available in this environment (e.g. private browsing).
    #[error("storage is unavailable")]
    Unavailable,

    /// A stored document exists but could not be parsed.
    #[error("stored document {key} is unreadable")]
    Corrupt { key: String },

    /// Backend-specific failure.
    #[error("storage error on {key}: {message}")]
    Backend { key: String, message: String },

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn message_key(&self) -> &'static str {
        match self {
            StoreError::QuotaExceeded { .. } => "error.store.quota",
            StoreError::Unavailable => "error.store.unavailable",
            StoreError::Corrupt { .. } => "error.store.corrupt",
            StoreError::Serialize(_) | StoreError::Backend { .. } | StoreError::Io(_) => {
                "error.store.write"
            }
        }
    }
}

/// Admin form validation failure. The form stays editable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Only one language variant of a bilingual field was filled in.
    #[error("{field} must be filled in both Arabic and English")]
    IncompleteTranslation { field: &'static str },

    #[error("invalid email address")]
    InvalidEmail,

    #[error("{field} must be an http(s) URL or an embedded image")]
    InvalidUrl { field: &'static str },

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("username already exists")]
    DuplicateUsername,

    #[error("passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "validation.required",
            ValidationError::IncompleteTranslation { .. } => "validation.both_languages",
            ValidationError::InvalidEmail => "validation.email",
            ValidationError::InvalidUrl { .. } => "validation.url",
            ValidationError::PasswordTooShort { .. } => "validation.password_short",
            ValidationError::DuplicateUsername => "validation.username_taken",
            ValidationError::PasswordMismatch => "validation.password_mismatch",
        }
    }
}

/// Login or token failure.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. Deliberately does not say which.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("session token rejected: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    pub fn message_key(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "login.invalid",
            AuthError::Token(_) | AuthError::Hash(_) => "login.failed",
            AuthError::Store(e) => e.message_key(),
        }
    }
}

/// Outcome of the centralized admin guard when access is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("sign in required")]
    NotSignedIn,

    #[error("superadmin role required for {screen:?}")]
    Forbidden { screen: AdminScreen },
}

impl GateError {
    pub fn message_key(&self) -> &'static str {
        match self {
            GateError::NotSignedIn => "auth.required",
            GateError::Forbidden { .. } => "auth.forbidden",
        }
    }
}

/// Unified error returned by the content services.
#[derive(Debug, Error)]
pub enum CmsError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Gate(#[from] GateError),

    #[error("{what} {id} not found")]
    NotFound { what: &'static str, id: String },

    /// Refused because it would leave no superadmin able to manage admins.
    #[error("cannot remove the last superadmin")]
    LastSuperadmin,
}

impl CmsError {
    pub fn not_found(what: &'static str, id: &str) -> Self {
        CmsError::NotFound {
            what,
            id: id.to_string(),
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            CmsError::Store(e) => e.message_key(),
            CmsError::Validation(e) => e.message_key(),
            CmsError::Auth(e) => e.message_key(),
            CmsError::Gate(e) => e.message_key(),
            CmsError::NotFound { .. } => "error.not_found",
            CmsError::LastSuperadmin => "admins.last_superadmin",
        }
    }
}
