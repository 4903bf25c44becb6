// ── Per-entity query cache ──
//
// One instance per entity type, holding every cached query for it under
// a consistent key scheme:
//
//   list key    — `[entity]`
//   search keys — `[entity, "search", query]`
//   detail keys — `[entity, "detail", id]`
//
// List, search, and detail views share this one cache, and mutations
// invalidate exactly the keys affected: creates drop the list and search
// keys, updates and deletes additionally touch their detail key. Reads
// are read-through: a fresh value is served as-is, a stale or missing
// one makes the caller fetch and store.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::watch;
use tracing::trace;

use super::slot::Cached;
use crate::model::EntityId;

/// Stale windows for the two key shapes of one entity.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StaleWindows {
    pub list: Duration,
    pub detail: Duration,
}

impl StaleWindows {
    pub(crate) fn uniform(window: Duration) -> Self {
        Self {
            list: window,
            detail: window,
        }
    }
}

pub(crate) struct QueryCache<T: Send + Sync + 'static> {
    windows: StaleWindows,

    /// The `[entity]` key.
    list: RwLock<Option<Cached<Arc<Vec<Arc<T>>>>>>,

    /// `[entity, "search", query]` keys. Also carries other
    /// parameterized list queries (e.g. invoices scoped to a contract).
    searches: DashMap<String, Cached<Arc<Vec<Arc<T>>>>>,

    /// `[entity, "detail", id]` keys.
    details: DashMap<EntityId, Cached<Arc<T>>>,

    /// Store-wide change counter, bumped on every write so subscribers
    /// can re-render.
    changes: Arc<watch::Sender<u64>>,
}

impl<T: Send + Sync + 'static> QueryCache<T> {
    pub(crate) fn new(windows: StaleWindows, changes: Arc<watch::Sender<u64>>) -> Self {
        Self {
            windows,
            list: RwLock::new(None),
            searches: DashMap::new(),
            details: DashMap::new(),
            changes,
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub(crate) fn fresh_list(&self) -> Option<Arc<Vec<Arc<T>>>> {
        let guard = self.list.read().expect("list lock poisoned");
        guard
            .as_ref()
            .filter(|c| c.is_fresh(self.windows.list))
            .map(|c| Arc::clone(&c.value))
    }

    pub(crate) fn fresh_search(&self, query: &str) -> Option<Arc<Vec<Arc<T>>>> {
        self.searches
            .get(query)
            .filter(|c| c.is_fresh(self.windows.list))
            .map(|c| Arc::clone(&c.value))
    }

    pub(crate) fn fresh_detail(&self, id: &EntityId) -> Option<Arc<T>> {
        self.details
            .get(id)
            .filter(|c| c.is_fresh(self.windows.detail))
            .map(|c| Arc::clone(&c.value))
    }

    // ── Writes ───────────────────────────────────────────────────────

    pub(crate) fn store_list(&self, items: Vec<T>) -> Arc<Vec<Arc<T>>> {
        let snapshot: Arc<Vec<Arc<T>>> = Arc::new(items.into_iter().map(Arc::new).collect());
        *self.list.write().expect("list lock poisoned") =
            Some(Cached::new(Arc::clone(&snapshot)));
        self.bump();
        snapshot
    }

    pub(crate) fn store_search(&self, query: &str, items: Vec<T>) -> Arc<Vec<Arc<T>>> {
        let snapshot: Arc<Vec<Arc<T>>> = Arc::new(items.into_iter().map(Arc::new).collect());
        self.searches
            .insert(query.to_owned(), Cached::new(Arc::clone(&snapshot)));
        self.bump();
        snapshot
    }

    pub(crate) fn store_detail(&self, id: EntityId, item: T) -> Arc<T> {
        let item = Arc::new(item);
        self.details.insert(id, Cached::new(Arc::clone(&item)));
        self.bump();
        item
    }

    // ── Invalidation ─────────────────────────────────────────────────

    /// Drop the list key and every search key. The declared effect of
    /// every successful mutation.
    pub(crate) fn invalidate_lists(&self) {
        trace!("invalidating list + search keys");
        self.list.write().expect("list lock poisoned").take();
        self.searches.clear();
        self.bump();
    }

    /// Drop one detail key (updates).
    pub(crate) fn invalidate_detail(&self, id: &EntityId) {
        self.details.remove(id);
        self.bump();
    }

    /// Drop everything for this entity (logout, forced refresh).
    pub(crate) fn clear(&self) {
        self.list.write().expect("list lock poisoned").take();
        self.searches.clear();
        self.details.clear();
        self.bump();
    }

    fn bump(&self) {
        // `send_modify` updates unconditionally, even with zero receivers.
        self.changes.send_modify(|v| *v += 1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cache(window: Duration) -> QueryCache<String> {
        let (tx, _) = watch::channel(0);
        QueryCache::new(StaleWindows::uniform(window), Arc::new(tx))
    }

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn fresh_list_served_inside_window() {
        let cache = cache(MINUTE);
        assert!(cache.fresh_list().is_none());

        cache.store_list(vec!["a".to_owned()]);
        let snap = cache.fresh_list().unwrap();
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn zero_window_means_always_refetch() {
        let cache = cache(Duration::ZERO);
        cache.store_list(vec!["a".to_owned()]);
        assert!(cache.fresh_list().is_none());
    }

    #[test]
    fn list_search_and_detail_are_separate_keys() {
        let cache = cache(MINUTE);
        cache.store_list(vec!["list".to_owned()]);
        cache.store_search("an", vec!["search".to_owned()]);
        cache.store_detail(EntityId::Numeric(1), "detail".to_owned());

        assert_eq!(cache.fresh_list().unwrap()[0].as_str(), "list");
        assert_eq!(cache.fresh_search("an").unwrap()[0].as_str(), "search");
        assert!(cache.fresh_search("binh").is_none());
        assert_eq!(
            cache.fresh_detail(&EntityId::Numeric(1)).unwrap().as_str(),
            "detail"
        );
    }

    #[test]
    fn invalidate_lists_spares_details() {
        let cache = cache(MINUTE);
        cache.store_list(vec!["x".to_owned()]);
        cache.store_search("q", vec!["y".to_owned()]);
        cache.store_detail(EntityId::Numeric(1), "z".to_owned());

        cache.invalidate_lists();

        assert!(cache.fresh_list().is_none());
        assert!(cache.fresh_search("q").is_none());
        assert!(cache.fresh_detail(&EntityId::Numeric(1)).is_some());
    }

    #[test]
    fn invalidate_detail_is_per_id() {
        let cache = cache(MINUTE);
        cache.store_detail(EntityId::Numeric(1), "one".to_owned());
        cache.store_detail(EntityId::Numeric(2), "two".to_owned());

        cache.invalidate_detail(&EntityId::Numeric(1));

        assert!(cache.fresh_detail(&EntityId::Numeric(1)).is_none());
        assert!(cache.fresh_detail(&EntityId::Numeric(2)).is_some());
    }

    #[test]
    fn clear_empties_every_key() {
        let cache = cache(MINUTE);
        cache.store_list(vec!["x".to_owned()]);
        cache.store_search("q", vec!["y".to_owned()]);
        cache.store_detail(EntityId::Numeric(1), "z".to_owned());

        cache.clear();

        assert!(cache.fresh_list().is_none());
        assert!(cache.fresh_search("q").is_none());
        assert!(cache.fresh_detail(&EntityId::Numeric(1)).is_none());
    }

    #[test]
    fn writes_bump_the_change_counter() {
        let (tx, rx) = watch::channel(0u64);
        let cache: QueryCache<String> =
            QueryCache::new(StaleWindows::uniform(MINUTE), Arc::new(tx));

        cache.store_list(vec![]);
        cache.invalidate_lists();

        assert_eq!(*rx.borrow(), 2);
    }
}
