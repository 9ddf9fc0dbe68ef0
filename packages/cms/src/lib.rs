//! Content core of the law firm site: bilingual text resolution, the JSON document
//! store over a pluggable key/value backend, content services and the admin session gate.

pub mod admins;
pub mod articles;
pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod lawyers;
pub mod notify;
pub mod preferences;
pub mod seed;
pub mod session;
pub mod site_content;
pub mod state;
pub mod storage;
pub mod store;
pub mod types;
pub mod validate;

#[cfg(test)]
mod types_tests;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use admins::{AdminService, NewAdmin};
pub use articles::{ArticleDraft, ArticleService};
pub use config::{AppConfig, AppMode, StorageConfig};
pub use contact::{ContactForm, ContactService};
pub use error::{AuthError, CmsError, GateError, StoreError, ValidationError};
pub use i18n::{resolve, t, Language, Resolver};
pub use lawyers::{LawyerDraft, LawyerService};
pub use notify::{ChangeKind, StoreEvent, SubscriptionId};
pub use preferences::Preferences;
pub use session::{Access, AdminScreen, Session, SessionGate};
pub use site_content::SiteContentService;
pub use state::Cms;
pub use storage::KeyValueStorage;
pub use store::{DocumentStore, StoreKey};
pub use types::*;
