use crate::error::CmsError;
use crate::seed;
use crate::store::{find_by_id_mut, generate_id, remove_by_id, DocumentStore, Identified, StoreKey};
use crate::types::{ContactInfo, ContactSubmission, SocialLinks};
use crate::validate;
use chrono::Utc;

impl Identified for ContactSubmission {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Public contact form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Contact details (`contactInfo`) and the visitor inbox (`contactSubmissions`).
#[derive(Debug, Clone)]
pub struct ContactService {
    store: DocumentStore,
}

impl ContactService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    pub fn submit(&self, form: &ContactForm) -> Result<ContactSubmission, CmsError> {
        let name = validate::required("name", &form.name)?;
        let email = validate::email(&form.email)?;
        let subject = validate::required("subject", &form.subject)?;
        let message = validate::required("message", &form.message)?;
        let phone = form.phone.trim().to_string();

        let submission = self.store.mutate_array(
            StoreKey::ContactSubmissions,
            |items: &mut Vec<ContactSubmission>| {
                let submission = ContactSubmission {
                    id: generate_id(items),
                    name,
                    email,
                    phone,
                    subject,
                    message,
                    submitted_at: Utc::now(),
                    is_read: false,
                };
                items.push(submission.clone());
                submission
            },
        )?;
        tracing::info!("contact.submit: id={}", submission.id);
        Ok(submission)
    }

    /// Inbox, newest first.
    pub fn list(&self) -> Vec<ContactSubmission> {
        let mut items: Vec<ContactSubmission> =
            self.store.load(StoreKey::ContactSubmissions, Vec::new());
        items.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        items
    }

    pub fn unread_count(&self) -> usize {
        self.list().iter().filter(|s| !s.is_read).count()
    }

    pub fn mark_as_read(&self, id: &str) -> Result<(), CmsError> {
        self.store.try_mutate_array(
            StoreKey::ContactSubmissions,
            |items: &mut Vec<ContactSubmission>| {
                let submission = find_by_id_mut(items, id)
                    .ok_or_else(|| CmsError::not_found("submission", id))?;
                submission.is_read = true;
                Ok::<_, CmsError>(())
            },
        )?;
        tracing::debug!("contact.mark_as_read: id={}", id);
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<(), CmsError> {
        self.store.try_mutate_array(
            StoreKey::ContactSubmissions,
            |items: &mut Vec<ContactSubmission>| {
                if remove_by_id(items, id) {
                    Ok(())
                } else {
                    Err(CmsError::not_found("submission", id))
                }
            },
        )?;
        tracing::info!("contact.delete: id={}", id);
        Ok(())
    }

    /// Stored contact details, or the built-in ones.
    pub fn contact_info(&self) -> ContactInfo {
        self.store
            .load_opt(StoreKey::ContactInfo)
            .unwrap_or_else(seed::default_contact_info)
    }

    pub fn save_contact_info(&self, info: &ContactInfo) -> Result<(), CmsError> {
        let mut info = info.clone();
        info.email = validate::email(&info.email)?;
        info.phones = info
            .phones
            .iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        info.address = validate::optional_text("address", &info.address.ar, &info.address.en)?;
        info.working_hours =
            validate::optional_text("working_hours", &info.working_hours.ar, &info.working_hours.en)?;
        info.whatsapp = info
            .whatsapp
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty());
        let social = |field: &'static str, value: &Option<String>| {
            validate::optional_url(field, value.as_deref().unwrap_or_default())
        };
        info.social = SocialLinks {
            facebook: social("facebook", &info.social.facebook)?,
            twitter: social("twitter", &info.social.twitter)?,
            linkedin: social("linkedin", &info.social.linkedin)?,
            instagram: social("instagram", &info.social.instagram)?,
        };

        self.store.save(StoreKey::ContactInfo, &info)?;
        tracing::info!("contact.save_contact_info");
        Ok(())
    }
}
