use crate::error::{AuthError, CmsError, StoreError, ValidationError};
use crate::seed::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use crate::store::{DocumentStore, StoreKey};
use crate::types::{AdminUser, Role};
use crate::validate;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{DateTime, Utc};
use serde::Deserialize;

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Input of the "add admin" form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAdmin {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// An `adminUsers` record as found in storage. Older records carry a plaintext
/// `password` instead of `passwordHash`; they are upgraded on first read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAdmin {
    username: String,
    #[serde(default)]
    password_hash: Option<String>,
    #[serde(default)]
    password: Option<String>,
    role: Role,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl StoredAdmin {
    /// The record without hashing anything. A plaintext-only record gets an empty hash,
    /// which never verifies.
    fn into_admin(self) -> AdminUser {
        AdminUser {
            username: self.username,
            password_hash: self.password_hash.unwrap_or_default(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Admin accounts under `adminUsers`.
#[derive(Debug, Clone)]
pub struct AdminService {
    store: DocumentStore,
}

impl AdminService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// All admins.
    ///
    /// Legacy plaintext passwords are hashed and written back. The default superadmin is
    /// created only when nothing is stored or the stored list is empty; a document that
    /// exists but cannot be read is reported, never replaced.
    pub fn list(&self) -> Result<Vec<AdminUser>, CmsError> {
        match self.store.load_opt::<Vec<StoredAdmin>>(StoreKey::AdminUsers) {
            Some(stored) if !stored.is_empty() => return self.upgrade(stored),
            Some(_) => {}
            None => {
                if self.store.contains(StoreKey::AdminUsers)? {
                    tracing::error!("admins.list: adminUsers is unreadable; refusing to reseed");
                    return Err(StoreError::Corrupt {
                        key: StoreKey::AdminUsers.as_str().to_string(),
                    }
                    .into());
                }
            }
        }

        let admin = AdminUser {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password_hash: hash_password(DEFAULT_ADMIN_PASSWORD)?,
            role: Role::Superadmin,
            created_at: Utc::now(),
        };
        let admins = vec![admin];
        self.store.save(StoreKey::AdminUsers, &admins)?;
        tracing::info!("admins.list: created default superadmin");
        Ok(admins)
    }

    fn upgrade(&self, stored: Vec<StoredAdmin>) -> Result<Vec<AdminUser>, CmsError> {
        let mut upgraded = 0;
        let mut admins = Vec::with_capacity(stored.len());
        for record in stored {
            let needs_hash = record.password_hash.as_deref().unwrap_or_default().is_empty();
            match (needs_hash, record.password.clone()) {
                (true, Some(plain)) => {
                    let password_hash = hash_password(&plain)?;
                    admins.push(AdminUser {
                        password_hash,
                        ..record.into_admin()
                    });
                    upgraded += 1;
                }
                (true, None) => {
                    tracing::warn!("admins.list: {} has no password and cannot sign in", record.username);
                    admins.push(record.into_admin());
                }
                (false, _) => admins.push(record.into_admin()),
            }
        }

        if upgraded > 0 {
            self.store.save(StoreKey::AdminUsers, &admins)?;
            tracing::info!("admins.list: hashed {} legacy password(s)", upgraded);
        }
        Ok(admins)
    }

    /// Stored record for `username`. A plain read: it never seeds or rewrites `adminUsers`.
    pub fn find(&self, username: &str) -> Option<AdminUser> {
        self.store
            .load_opt::<Vec<StoredAdmin>>(StoreKey::AdminUsers)?
            .into_iter()
            .find(|a| a.username == username)
            .map(StoredAdmin::into_admin)
    }

    /// The admin record matching `username` and `password`.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<AdminUser, AuthError> {
        let admins = self.list().map_err(|e| match e {
            CmsError::Store(e) => AuthError::Store(e),
            CmsError::Auth(e) => e,
            other => AuthError::Hash(other.to_string()),
        })?;
        let admin = admins
            .into_iter()
            .find(|a| a.username == username.trim())
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &admin.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(admin)
    }

    pub fn create(&self, input: &NewAdmin) -> Result<AdminUser, CmsError> {
        let username = validate::required("username", &input.username)?;
        validate::password(&input.password)?;
        if input.password != input.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }
        let existing = self.list()?;
        if existing
            .iter()
            .any(|a| a.username.eq_ignore_ascii_case(&username))
        {
            return Err(ValidationError::DuplicateUsername.into());
        }

        let admin = AdminUser {
            username,
            password_hash: hash_password(&input.password)?,
            role: input.role,
            created_at: Utc::now(),
        };
        self.store
            .mutate_array(StoreKey::AdminUsers, |items: &mut Vec<AdminUser>| {
                items.push(admin.clone());
            })?;
        tracing::info!("admins.create: username={} role={}", admin.username, admin.role.as_str());
        Ok(admin)
    }

    pub fn delete(&self, username: &str) -> Result<(), CmsError> {
        self.list()?;
        self.store
            .try_mutate_array(StoreKey::AdminUsers, |items: &mut Vec<AdminUser>| {
                let index = items
                    .iter()
                    .position(|a| a.username == username)
                    .ok_or_else(|| CmsError::not_found("admin", username))?;
                let superadmins = items.iter().filter(|a| a.role == Role::Superadmin).count();
                if items[index].role == Role::Superadmin && superadmins == 1 {
                    return Err(CmsError::LastSuperadmin);
                }
                items.remove(index);
                Ok(())
            })?;
        tracing::info!("admins.delete: username={}", username);
        Ok(())
    }

    pub fn change_password(
        &self,
        username: &str,
        current: &str,
        new_password: &str,
        confirm: &str,
    ) -> Result<(), CmsError> {
        self.verify_credentials(username, current)?;
        validate::password(new_password)?;
        if new_password != confirm {
            return Err(ValidationError::PasswordMismatch.into());
        }
        let password_hash = hash_password(new_password)?;

        self.store
            .try_mutate_array(StoreKey::AdminUsers, |items: &mut Vec<AdminUser>| {
                let admin = items
                    .iter_mut()
                    .find(|a| a.username == username)
                    .ok_or_else(|| CmsError::not_found("admin", username))?;
                admin.password_hash = password_hash;
                Ok::<_, CmsError>(())
            })?;
        tracing::info!("admins.change_password: username={}", username);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;
    use std::sync::Arc;

    fn service() -> AdminService {
        AdminService::new(DocumentStore::new(Arc::new(MemoryStorage::new())))
    }

    fn new_admin(username: &str, role: Role) -> NewAdmin {
        NewAdmin {
            username: username.to_string(),
            password: "secret99".to_string(),
            confirm_password: "secret99".to_string(),
            role,
        }
    }

    #[test]
    fn default_superadmin_is_created_lazily() {
        let service = service();
        let admins = service.list().unwrap();
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].username, DEFAULT_ADMIN_USERNAME);
        assert_eq!(admins[0].role, Role::Superadmin);
        assert_ne!(admins[0].password_hash, DEFAULT_ADMIN_PASSWORD);
        assert!(service
            .verify_credentials(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
            .is_ok());
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let service = service();
        let err = service
            .verify_credentials(DEFAULT_ADMIN_USERNAME, "nope")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        let err = service.verify_credentials("ghost", "admin123").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn duplicate_usernames_are_rejected() {
        let service = service();
        service.create(&new_admin("editor", Role::Admin)).unwrap();
        let err = service.create(&new_admin("Editor", Role::Admin)).unwrap_err();
        assert!(matches!(
            err,
            CmsError::Validation(ValidationError::DuplicateUsername)
        ));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let service = service();
        let mut input = new_admin("editor", Role::Admin);
        input.confirm_password = "different".to_string();
        assert!(matches!(
            service.create(&input).unwrap_err(),
            CmsError::Validation(ValidationError::PasswordMismatch)
        ));
    }

    #[test]
    fn last_superadmin_cannot_be_deleted() {
        let service = service();
        service.create(&new_admin("editor", Role::Admin)).unwrap();
        assert!(matches!(
            service.delete(DEFAULT_ADMIN_USERNAME).unwrap_err(),
            CmsError::LastSuperadmin
        ));
        service.delete("editor").unwrap();

        service.create(&new_admin("owner", Role::Superadmin)).unwrap();
        service.delete(DEFAULT_ADMIN_USERNAME).unwrap();
        let names: Vec<_> = service.list().unwrap().into_iter().map(|a| a.username).collect();
        assert_eq!(names, vec!["owner"]);
    }

    #[test]
    fn change_password_requires_current() {
        let service = service();
        assert!(service
            .change_password(DEFAULT_ADMIN_USERNAME, "wrong", "newpass1", "newpass1")
            .is_err());
        service
            .change_password(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD, "newpass1", "newpass1")
            .unwrap();
        assert!(service
            .verify_credentials(DEFAULT_ADMIN_USERNAME, "newpass1")
            .is_ok());
        assert!(service
            .verify_credentials(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
            .is_err());
    }

    #[test]
    fn find_does_not_seed() {
        let service = service();
        assert!(service.find(DEFAULT_ADMIN_USERNAME).is_none());
        assert!(!service.store.contains(StoreKey::AdminUsers).unwrap());

        service.list().unwrap();
        let admin = service.find(DEFAULT_ADMIN_USERNAME).unwrap();
        assert_eq!(admin.role, Role::Superadmin);
    }

    #[test]
    fn legacy_record_without_any_password_cannot_sign_in() {
        let service = service();
        service
            .store
            .backend()
            .set_item(
                StoreKey::AdminUsers.as_str(),
                r#"[{"username":"orphan","role":"admin"}]"#,
            )
            .unwrap();
        let admins = service.list().unwrap();
        assert_eq!(admins.len(), 1);
        assert!(admins[0].password_hash.is_empty());
        assert!(matches!(
            service.verify_credentials("orphan", ""),
            Err(AuthError::InvalidCredentials)
        ));

        service.create(&new_admin("editor", Role::Admin)).unwrap();
        let names: Vec<_> = service.list().unwrap().into_iter().map(|a| a.username).collect();
        assert_eq!(names, vec!["orphan", "editor"]);
    }
}
