//! Admin session gate.
//!
//! Login stores a signed token under `loggedInUser`; every admin screen asks the one
//! [`SessionGate`] for an [`Access`] value instead of reading the stored record itself.
//! The role comes from the verified token claims, checked against the current admin
//! record, so editing the stored JSON cannot grant a higher role.
//!
//! In a browser-only deployment the signing secret ships with the client, so this stops
//! casual tampering only; real authorization needs a server holding the secret.
use crate::admins::AdminService;
use crate::error::{AuthError, GateError};
use crate::store::{DocumentStore, StoreKey};
use crate::types::Role;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const ISSUER: &str = "law-firm-cms";

/// Admin screens and the role each one needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminScreen {
    Dashboard,
    Articles,
    Lawyers,
    Admins,
    ContactInfo,
    SiteContent,
    LogoTheme,
    Account,
    Inbox,
}

impl AdminScreen {
    pub const ALL: [AdminScreen; 9] = [
        AdminScreen::Dashboard,
        AdminScreen::Articles,
        AdminScreen::Lawyers,
        AdminScreen::Admins,
        AdminScreen::ContactInfo,
        AdminScreen::SiteContent,
        AdminScreen::LogoTheme,
        AdminScreen::Account,
        AdminScreen::Inbox,
    ];

    pub fn required_role(&self) -> Role {
        match self {
            AdminScreen::Admins | AdminScreen::LogoTheme => Role::Superadmin,
            _ => Role::Admin,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AdminScreen::Dashboard => "/admin",
            AdminScreen::Articles => "/admin/articles",
            AdminScreen::Lawyers => "/admin/lawyers",
            AdminScreen::Admins => "/admin/admins",
            AdminScreen::ContactInfo => "/admin/contact-info",
            AdminScreen::SiteContent => "/admin/site-content",
            AdminScreen::LogoTheme => "/admin/logo-theme",
            AdminScreen::Account => "/admin/account",
            AdminScreen::Inbox => "/admin/inbox",
        }
    }

    /// Translation key of the dashboard menu entry.
    pub fn menu_key(&self) -> &'static str {
        match self {
            AdminScreen::Dashboard => "admin.dashboard",
            AdminScreen::Articles => "admin.menu.articles",
            AdminScreen::Lawyers => "admin.menu.lawyers",
            AdminScreen::Admins => "admin.menu.admins",
            AdminScreen::ContactInfo => "admin.menu.contact_info",
            AdminScreen::SiteContent => "admin.menu.site_content",
            AdminScreen::LogoTheme => "admin.menu.logo_theme",
            AdminScreen::Account => "admin.menu.account",
            AdminScreen::Inbox => "admin.menu.inbox",
        }
    }
}

/// Result of the admin guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Anonymous,
    Admin { username: String },
    Superadmin { username: String },
}

impl Access {
    fn signed_in(username: String, role: Role) -> Self {
        match role {
            Role::Admin => Access::Admin { username },
            Role::Superadmin => Access::Superadmin { username },
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Access::Anonymous => None,
            Access::Admin { .. } => Some(Role::Admin),
            Access::Superadmin { .. } => Some(Role::Superadmin),
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Access::Anonymous => None,
            Access::Admin { username } | Access::Superadmin { username } => Some(username),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        !matches!(self, Access::Anonymous)
    }

    pub fn can_open(&self, screen: AdminScreen) -> bool {
        match (self.role(), screen.required_role()) {
            (None, _) => false,
            (Some(Role::Superadmin), _) => true,
            (Some(Role::Admin), required) => required == Role::Admin,
        }
    }

    pub fn require(&self, screen: AdminScreen) -> Result<Session, GateError> {
        let Some(role) = self.role() else {
            return Err(GateError::NotSignedIn);
        };
        if !self.can_open(screen) {
            return Err(GateError::Forbidden { screen });
        }
        Ok(Session {
            username: self.username().unwrap_or_default().to_string(),
            role,
        })
    }
}

/// A signed-in admin allowed onto a given screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

/// What login writes under `loggedInUser`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLogin {
    pub username: String,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    role: Role,
    iss: String,
    iat: u64,
    exp: u64,
}

/// Signing settings for session tokens.
#[derive(Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl: Duration,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// The single admin guard.
#[derive(Debug, Clone)]
pub struct SessionGate {
    store: DocumentStore,
    admins: AdminService,
    config: SessionConfig,
}

impl SessionGate {
    pub fn new(store: DocumentStore, config: SessionConfig) -> Self {
        Self {
            admins: AdminService::new(store.clone()),
            store,
            config,
        }
    }

    /// Credential match against `adminUsers` (creating the default superadmin on first use).
    pub fn login(&self, username: &str, password: &str) -> Result<Access, AuthError> {
        let admin = self.admins.verify_credentials(username, password).map_err(|e| {
            tracing::info!("session.login: rejected username={}", username.trim());
            e
        })?;

        let now = Utc::now();
        let token = self.issue_token(&admin.username, admin.role, now)?;
        self.store.save(
            StoreKey::LoggedInUser,
            &StoredLogin {
                username: admin.username.clone(),
                token,
            },
        )?;
        self.store.save(StoreKey::AdminLoginTime, &now)?;

        tracing::info!(
            "session.login: success username={} role={}",
            admin.username,
            admin.role.as_str()
        );
        Ok(Access::signed_in(admin.username, admin.role))
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(StoreKey::LoggedInUser)?;
        self.store.remove(StoreKey::AdminLoginTime)?;
        tracing::info!("session.logout");
        Ok(())
    }

    /// Who is signed in, if anyone. Never fails: anything unverifiable is anonymous.
    pub fn check(&self) -> Access {
        let Some(stored) = self.store.load_opt::<StoredLogin>(StoreKey::LoggedInUser) else {
            return Access::Anonymous;
        };

        let claims = match self.verify_token(&stored.token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::info!("session.check: token rejected: {}", e);
                return Access::Anonymous;
            }
        };
        if claims.sub != stored.username {
            tracing::warn!("session.check: stored username does not match token");
            return Access::Anonymous;
        }

        let Some(admin) = self.admins.find(&claims.sub) else {
            tracing::info!("session.check: admin {} no longer exists", claims.sub);
            return Access::Anonymous;
        };

        // A demoted admin keeps only the lower of token and current role.
        let role = match (claims.role, admin.role) {
            (Role::Superadmin, Role::Superadmin) => Role::Superadmin,
            _ => Role::Admin,
        };
        Access::signed_in(admin.username, role)
    }

    pub fn require(&self, screen: AdminScreen) -> Result<Session, GateError> {
        self.check().require(screen)
    }

    pub fn login_time(&self) -> Option<DateTime<Utc>> {
        self.store.load_opt(StoreKey::AdminLoginTime)
    }

    fn issue_token(&self, username: &str, role: Role, now: DateTime<Utc>) -> Result<String, AuthError> {
        let expires = now
            .checked_add_signed(self.config.ttl)
            .ok_or_else(|| AuthError::Token(ErrorKind::InvalidToken.into()))?;
        let iat = now.timestamp().max(0) as u64;
        let exp = expires.timestamp().max(0) as u64;
        let claims = Claims {
            sub: username.to_string(),
            role,
            iss: ISSUER.to_string(),
            iat,
            exp,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )?;
        Ok(token)
    }

    fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        // jsonwebtoken reads the clock through std, which is unavailable in the browser.
        validation.validate_exp = false;
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )?;
        if data.claims.exp < Utc::now().timestamp().max(0) as u64 {
            return Err(AuthError::Token(ErrorKind::ExpiredSignature.into()));
        }
        Ok(data.claims)
    }
}
