use cms::{Cms, StoreEvent};
use dioxus::prelude::*;

/// Shared handle to the content services plus a revision signal bumped on every store
/// write, so components that read content re-render after an edit.
#[derive(Clone)]
pub struct CmsContext {
    cms: Cms,
    revision: SyncSignal<u64>,
}

impl CmsContext {
    pub fn cms(&self) -> &Cms {
        &self.cms
    }

    /// Subscribe the calling component to store changes and return the current revision.
    pub fn track(&self) -> u64 {
        (self.revision)()
    }
}

/// Provide the [`CmsContext`] to the tree. `init` runs once, on first render.
pub fn use_cms_provider(init: impl FnOnce() -> Cms) -> CmsContext {
    let revision = use_signal_sync(|| 0_u64);
    use_context_provider(move || {
        let cms = init();

        // Seed first-run documents now so rendering never has to write.
        if let Err(e) = cms.admins().list() {
            tracing::warn!("startup: seeding admins failed: {}", e);
        }
        if let Err(e) = cms.lawyers().list() {
            tracing::warn!("startup: seeding lawyers failed: {}", e);
        }
        if let Err(e) = cms.articles().migrate_legacy() {
            tracing::warn!("startup: article migration failed: {}", e);
        }

        cms.subscribe(move |event: &StoreEvent| {
            let mut revision = revision;
            revision.set(event.revision);
        });
        CmsContext { cms, revision }
    })
}

pub fn use_cms() -> CmsContext {
    use_context::<CmsContext>()
}
