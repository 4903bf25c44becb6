// ── Freshness primitives ──

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use tokio::sync::watch;

/// A cached value stamped with its fetch time.
#[derive(Debug, Clone)]
pub(crate) struct Cached<V> {
    pub value: V,
    pub fetched_at: Instant,
}

impl<V> Cached<V> {
    pub(crate) fn new(value: V) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    /// Whether the value is still inside its stale window.
    pub(crate) fn is_fresh(&self, window: Duration) -> bool {
        self.fetched_at.elapsed() < window
    }
}

/// A single-value cache slot (used for aggregates like dashboard stats
/// that have exactly one cache key).
pub(crate) struct Slot<T> {
    window: Duration,
    value: RwLock<Option<Cached<Arc<T>>>>,
    changes: Arc<watch::Sender<u64>>,
}

impl<T> Slot<T> {
    pub(crate) fn new(window: Duration, changes: Arc<watch::Sender<u64>>) -> Self {
        Self {
            window,
            value: RwLock::new(None),
            changes,
        }
    }

    pub(crate) fn fresh(&self) -> Option<Arc<T>> {
        let guard = self.value.read().expect("slot lock poisoned");
        guard
            .as_ref()
            .filter(|c| c.is_fresh(self.window))
            .map(|c| Arc::clone(&c.value))
    }

    pub(crate) fn store(&self, value: T) -> Arc<T> {
        let value = Arc::new(value);
        *self.value.write().expect("slot lock poisoned") = Some(Cached::new(Arc::clone(&value)));
        self.changes.send_modify(|v| *v += 1);
        value
    }

    pub(crate) fn clear(&self) {
        let had_value = self
            .value
            .write()
            .expect("slot lock poisoned")
            .take()
            .is_some();
        if had_value {
            self.changes.send_modify(|v| *v += 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes() -> Arc<watch::Sender<u64>> {
        let (tx, _) = watch::channel(0);
        Arc::new(tx)
    }

    #[test]
    fn fresh_inside_window() {
        let cached = Cached::new(1);
        assert!(cached.is_fresh(Duration::from_secs(60)));
    }

    #[test]
    fn stale_with_zero_window() {
        let cached = Cached::new(1);
        assert!(!cached.is_fresh(Duration::ZERO));
    }

    #[test]
    fn slot_round_trip() {
        let slot = Slot::new(Duration::from_secs(60), changes());
        assert!(slot.fresh().is_none());

        slot.store(7);
        assert_eq!(slot.fresh().as_deref(), Some(&7));

        slot.clear();
        assert!(slot.fresh().is_none());
    }

    #[test]
    fn slot_with_zero_window_never_serves() {
        let slot = Slot::new(Duration::ZERO, changes());
        slot.store(7);
        assert!(slot.fresh().is_none());
    }
}
