use crate::error::CmsError;
use crate::seed;
use crate::store::{find_by_id_mut, generate_id, remove_by_id, DocumentStore, Identified, StoreKey};
use crate::types::{Lawyer, LocalizedText};
use crate::validate;
use chrono::Utc;

impl Identified for Lawyer {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Raw lawyer profile form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LawyerDraft {
    pub name_ar: String,
    pub name_en: String,
    pub title_ar: String,
    pub title_en: String,
    pub specialty_ar: String,
    pub specialty_en: String,
    pub bio_ar: String,
    pub bio_en: String,
    pub experience: String,
    pub image: String,
}

struct ValidLawyer {
    name: LocalizedText,
    title: LocalizedText,
    specialty: LocalizedText,
    bio: LocalizedText,
    experience: String,
    image: Option<String>,
}

impl LawyerDraft {
    pub fn from_lawyer(lawyer: &Lawyer) -> Self {
        Self {
            name_ar: lawyer.name.ar.clone(),
            name_en: lawyer.name.en.clone(),
            title_ar: lawyer.title.ar.clone(),
            title_en: lawyer.title.en.clone(),
            specialty_ar: lawyer.specialty.ar.clone(),
            specialty_en: lawyer.specialty.en.clone(),
            bio_ar: lawyer.bio.ar.clone(),
            bio_en: lawyer.bio.en.clone(),
            experience: lawyer.experience.clone(),
            image: lawyer.image.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<ValidLawyer, CmsError> {
        Ok(ValidLawyer {
            name: validate::required_text("name", &self.name_ar, &self.name_en)?,
            title: validate::required_text("title", &self.title_ar, &self.title_en)?,
            specialty: validate::required_text("specialty", &self.specialty_ar, &self.specialty_en)?,
            bio: validate::optional_text("bio", &self.bio_ar, &self.bio_en)?,
            experience: self.experience.trim().to_string(),
            image: validate::optional_url("image", &self.image)?,
        })
    }
}

/// Lawyer profiles under `lawyers`.
#[derive(Debug, Clone)]
pub struct LawyerService {
    store: DocumentStore,
}

impl LawyerService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// The team. An empty store is seeded with the built-in lawyers, which are persisted
    /// so later reads (and edits) work on the same records.
    pub fn list(&self) -> Result<Vec<Lawyer>, CmsError> {
        Ok(self.store.load_or_seed(StoreKey::Lawyers, seed::default_lawyers)?)
    }

    /// Read-only view for public pages: never fails, falls back to the built-in team.
    pub fn list_or_default(&self) -> Vec<Lawyer> {
        self.list().unwrap_or_else(|e| {
            tracing::warn!("lawyers.list_or_default: {}", e);
            seed::default_lawyers()
        })
    }

    pub fn get(&self, id: &str) -> Option<Lawyer> {
        self.list_or_default().into_iter().find(|l| l.id == id)
    }

    pub fn create(&self, draft: &LawyerDraft) -> Result<Lawyer, CmsError> {
        let valid = draft.validate()?;
        // Make sure the defaults are in place so the first edit doesn't drop them.
        self.list()?;
        let now = Utc::now();

        let lawyer = self
            .store
            .mutate_array(StoreKey::Lawyers, |items: &mut Vec<Lawyer>| {
                let lawyer = Lawyer {
                    id: generate_id(items),
                    name: valid.name,
                    title: valid.title,
                    specialty: valid.specialty,
                    bio: valid.bio,
                    experience: valid.experience,
                    image: valid.image,
                    created_at: now,
                    updated_at: now,
                };
                items.push(lawyer.clone());
                lawyer
            })?;
        tracing::info!("lawyers.create: id={}", lawyer.id);
        Ok(lawyer)
    }

    pub fn update(&self, id: &str, draft: &LawyerDraft) -> Result<Lawyer, CmsError> {
        let valid = draft.validate()?;
        self.list()?;
        let lawyer = self
            .store
            .try_mutate_array(StoreKey::Lawyers, |items: &mut Vec<Lawyer>| {
                let lawyer =
                    find_by_id_mut(items, id).ok_or_else(|| CmsError::not_found("lawyer", id))?;
                lawyer.name = valid.name;
                lawyer.title = valid.title;
                lawyer.specialty = valid.specialty;
                lawyer.bio = valid.bio;
                lawyer.experience = valid.experience;
                lawyer.image = valid.image;
                lawyer.updated_at = Utc::now();
                Ok::<_, CmsError>(lawyer.clone())
            })?;
        tracing::info!("lawyers.update: id={}", id);
        Ok(lawyer)
    }

    pub fn delete(&self, id: &str) -> Result<(), CmsError> {
        self.list()?;
        self.store
            .try_mutate_array(StoreKey::Lawyers, |items: &mut Vec<Lawyer>| {
                if remove_by_id(items, id) {
                    Ok(())
                } else {
                    Err(CmsError::not_found("lawyer", id))
                }
            })?;
        tracing::info!("lawyers.delete: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;
    use crate::storage::KeyValueStorage;
    use std::sync::Arc;

    #[test]
    fn empty_store_seeds_four_and_persists_them() {
        let backend = Arc::new(MemoryStorage::new());
        let service = LawyerService::new(DocumentStore::new(backend.clone()));

        let first = service.list().unwrap();
        assert_eq!(first.len(), 4);
        assert!(backend.get_item("lawyers").unwrap().is_some());

        let second = service.list().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn create_on_empty_store_keeps_defaults() {
        let service = LawyerService::new(DocumentStore::new(Arc::new(MemoryStorage::new())));
        let draft = LawyerDraft {
            name_ar: "ليلى".to_string(),
            name_en: "Layla".to_string(),
            title_ar: "محامية".to_string(),
            title_en: "Associate".to_string(),
            specialty_ar: "قانون العمل".to_string(),
            specialty_en: "Labor law".to_string(),
            experience: "5".to_string(),
            ..Default::default()
        };
        let created = service.create(&draft).unwrap();
        let all = service.list().unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all.last(), Some(&created));
    }

    #[test]
    fn delete_default_lawyer() {
        let service = LawyerService::new(DocumentStore::new(Arc::new(MemoryStorage::new())));
        service.delete("2").unwrap();
        let ids: Vec<_> = service.list().unwrap().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn update_changes_fields() {
        let service = LawyerService::new(DocumentStore::new(Arc::new(MemoryStorage::new())));
        let original = service.get("1").unwrap();
        let mut draft = LawyerDraft::from_lawyer(&original);
        draft.experience = "26".to_string();
        let updated = service.update("1", &draft).unwrap();
        assert_eq!(updated.experience, "26");
        assert_eq!(updated.name, original.name);
        assert!(updated.updated_at > original.updated_at);
    }
}
