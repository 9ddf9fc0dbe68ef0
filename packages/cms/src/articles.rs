use crate::error::CmsError;
use crate::store::{find_by_id_mut, generate_id, remove_by_id, DocumentStore, Identified, StoreKey};
use crate::types::{Article, ArticleCategory, LocalizedText};
use crate::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

impl Identified for Article {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Raw article form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleDraft {
    pub title_ar: String,
    pub title_en: String,
    pub excerpt_ar: String,
    pub excerpt_en: String,
    pub content_ar: String,
    pub content_en: String,
    pub category: ArticleCategory,
    pub image: String,
    pub is_active: bool,
}

struct ValidArticle {
    title: LocalizedText,
    excerpt: LocalizedText,
    content: LocalizedText,
    category: ArticleCategory,
    image: Option<String>,
    is_active: bool,
}

impl ArticleDraft {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title_ar: article.title.ar.clone(),
            title_en: article.title.en.clone(),
            excerpt_ar: article.excerpt.ar.clone(),
            excerpt_en: article.excerpt.en.clone(),
            content_ar: article.content.ar.clone(),
            content_en: article.content.en.clone(),
            category: article.category,
            image: article.image.clone().unwrap_or_default(),
            is_active: article.is_active,
        }
    }

    fn validate(&self) -> Result<ValidArticle, CmsError> {
        Ok(ValidArticle {
            title: validate::required_text("title", &self.title_ar, &self.title_en)?,
            excerpt: validate::optional_text("excerpt", &self.excerpt_ar, &self.excerpt_en)?,
            content: validate::required_text("content", &self.content_ar, &self.content_en)?,
            category: self.category,
            image: validate::optional_url("image", &self.image)?,
            is_active: self.is_active,
        })
    }
}

/// Article shape written by the older CMS screens under `cmsArticles`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
struct LegacyArticle {
    id: String,
    title_ar: String,
    title_en: String,
    content_ar: String,
    content_en: String,
    excerpt_ar: String,
    excerpt_en: String,
    category: String,
    image: Option<String>,
    views: u64,
    status: String,
    created_at: Option<DateTime<Utc>>,
}

impl LegacyArticle {
    fn into_article(self, now: DateTime<Utc>) -> Article {
        let created_at = self.created_at.unwrap_or(now);
        Article {
            id: self.id,
            title: LocalizedText {
                ar: self.title_ar,
                en: self.title_en,
            },
            content: LocalizedText {
                ar: self.content_ar,
                en: self.content_en,
            },
            excerpt: LocalizedText {
                ar: self.excerpt_ar,
                en: self.excerpt_en,
            },
            category: ArticleCategory::from_str_opt(&self.category).unwrap_or_default(),
            image: self.image.filter(|s| !s.trim().is_empty()),
            views: self.views,
            is_active: self.status != "draft",
            created_at,
            updated_at: created_at,
        }
    }
}

/// Blog articles under the single `articles` key.
#[derive(Debug, Clone)]
pub struct ArticleService {
    store: DocumentStore,
}

impl ArticleService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Fold a legacy `cmsArticles` document into `articles`, then drop the legacy key.
    ///
    /// Records whose id already exists in `articles` keep the `articles` version.
    pub fn migrate_legacy(&self) -> Result<usize, CmsError> {
        let Some(legacy) = self
            .store
            .load_opt::<Vec<LegacyArticle>>(StoreKey::LegacyCmsArticles)
        else {
            return Ok(0);
        };

        let now = Utc::now();
        let migrated = self.store.mutate_array(StoreKey::Articles, |items: &mut Vec<Article>| {
            let mut added = 0;
            for record in legacy {
                if record.id.is_empty() || items.iter().any(|a| a.id == record.id) {
                    continue;
                }
                items.push(record.into_article(now));
                added += 1;
            }
            added
        })?;
        self.store.remove(StoreKey::LegacyCmsArticles)?;
        tracing::info!("articles.migrate_legacy: migrated={}", migrated);
        Ok(migrated)
    }

    /// Every article, drafts included, in stored order.
    pub fn list(&self) -> Vec<Article> {
        if let Err(e) = self.migrate_legacy() {
            tracing::warn!("articles.list: legacy migration failed: {}", e);
        }
        self.store.load(StoreKey::Articles, Vec::new())
    }

    /// Active articles, newest first.
    pub fn list_published(&self) -> Vec<Article> {
        let mut items: Vec<Article> = self.list().into_iter().filter(|a| a.is_active).collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    pub fn by_category(&self, category: ArticleCategory) -> Vec<Article> {
        self.list_published()
            .into_iter()
            .filter(|a| a.category == category)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Article> {
        self.list().into_iter().find(|a| a.id == id)
    }

    pub fn create(&self, draft: &ArticleDraft) -> Result<Article, CmsError> {
        let valid = draft.validate()?;
        let now = Utc::now();

        let article = self
            .store
            .mutate_array(StoreKey::Articles, |items: &mut Vec<Article>| {
                let article = Article {
                    id: generate_id(items),
                    title: valid.title,
                    content: valid.content,
                    excerpt: valid.excerpt,
                    category: valid.category,
                    image: valid.image,
                    views: 0,
                    is_active: valid.is_active,
                    created_at: now,
                    updated_at: now,
                };
                items.push(article.clone());
                article
            })?;
        tracing::info!("articles.create: id={}", article.id);
        Ok(article)
    }

    pub fn update(&self, id: &str, draft: &ArticleDraft) -> Result<Article, CmsError> {
        let valid = draft.validate()?;
        let article = self
            .store
            .try_mutate_array(StoreKey::Articles, |items: &mut Vec<Article>| {
                let article =
                    find_by_id_mut(items, id).ok_or_else(|| CmsError::not_found("article", id))?;
                article.title = valid.title;
                article.content = valid.content;
                article.excerpt = valid.excerpt;
                article.category = valid.category;
                article.image = valid.image;
                article.is_active = valid.is_active;
                article.updated_at = Utc::now();
                Ok::<_, CmsError>(article.clone())
            })?;
        tracing::info!("articles.update: id={}", id);
        Ok(article)
    }

    pub fn set_active(&self, id: &str, active: bool) -> Result<(), CmsError> {
        self.store
            .try_mutate_array(StoreKey::Articles, |items: &mut Vec<Article>| {
                let article =
                    find_by_id_mut(items, id).ok_or_else(|| CmsError::not_found("article", id))?;
                article.is_active = active;
                article.updated_at = Utc::now();
                Ok::<_, CmsError>(())
            })?;
        tracing::info!("articles.set_active: id={} active={}", id, active);
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<(), CmsError> {
        self.store
            .try_mutate_array(StoreKey::Articles, |items: &mut Vec<Article>| {
                if remove_by_id(items, id) {
                    Ok(())
                } else {
                    Err(CmsError::not_found("article", id))
                }
            })?;
        tracing::info!("articles.delete: id={}", id);
        Ok(())
    }
}
