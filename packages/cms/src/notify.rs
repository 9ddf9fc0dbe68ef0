//! In-process change notification for store writes.
//!
//! This only reaches subscribers living in the same process (the same browser tab).
//! A write in another tab is not observed until the page re-reads the key.
use crate::store::StoreKey;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Saved,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreEvent {
    pub key: StoreKey,
    pub kind: ChangeKind,
    /// Global revision after this change; strictly increasing.
    pub revision: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

#[derive(Default)]
struct Inner {
    next_id: u64,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Fan-out of [`StoreEvent`]s to subscribers. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    inner: Arc<Mutex<Inner>>,
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("ChangeNotifier")
            .field("revision", &inner.revision)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(sid, _)| *sid != id);
        inner.listeners.len() != before
    }

    pub fn publish(&self, key: StoreKey, kind: ChangeKind) -> StoreEvent {
        // Listeners run outside the lock so they may read the store or subscribe.
        let (event, listeners) = {
            let mut inner = self.lock();
            inner.revision += 1;
            let revision = inner.revision;
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (
                StoreEvent {
                    key,
                    kind,
                    revision,
                },
                listeners,
            )
        };

        tracing::trace!(
            "notify.publish: key={} rev={} listeners={}",
            key.as_str(),
            event.revision,
            listeners.len()
        );
        for listener in listeners {
            listener(&event);
        }
        event
    }

    /// Global revision; 0 until the first write.
    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn subscribers_receive_events_until_unsubscribed() {
        let notifier = ChangeNotifier::new();
        let seen = Arc::new(AtomicU64::new(0));

        let counter = seen.clone();
        let id = notifier.subscribe(move |event| {
            counter.store(event.revision, Ordering::SeqCst);
        });

        notifier.publish(StoreKey::Lawyers, ChangeKind::Saved);
        notifier.publish(StoreKey::Articles, ChangeKind::Removed);
        assert_eq!(seen.load(Ordering::SeqCst), 2);

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.publish(StoreKey::Lawyers, ChangeKind::Saved);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(notifier.revision(), 3);
    }

    #[test]
    fn listener_may_reenter_notifier() {
        let notifier = ChangeNotifier::new();
        let inner = notifier.clone();
        let observed = Arc::new(AtomicU64::new(0));
        let out = observed.clone();
        notifier.subscribe(move |_| {
            out.store(inner.revision(), Ordering::SeqCst);
        });

        notifier.publish(StoreKey::Articles, ChangeKind::Saved);
        assert_eq!(observed.load(Ordering::SeqCst), 1);
    }
}
