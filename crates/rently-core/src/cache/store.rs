// ── Central cache store ──
//
// One QueryCache per entity type plus single-value slots for aggregates.
// All caches share one change counter so front ends can subscribe to
// "something changed" without tracking entities individually.

use std::sync::Arc;

use tokio::sync::watch;

use super::query_cache::{QueryCache, StaleWindows};
use super::slot::Slot;
use crate::config::CacheWindows;
use crate::model::{
    DashboardStats, Guest, Home, HomeContract, HomeOwner, InvoicePayment, MevBlock,
    MevTransaction, Receiver, Service, ServiceContract,
};

pub(crate) struct CacheStore {
    pub(crate) guests: QueryCache<Guest>,
    pub(crate) owners: QueryCache<HomeOwner>,
    pub(crate) homes: QueryCache<Home>,
    pub(crate) home_contracts: QueryCache<HomeContract>,
    pub(crate) service_contracts: QueryCache<ServiceContract>,
    pub(crate) services: QueryCache<Service>,
    pub(crate) receivers: QueryCache<Receiver>,
    pub(crate) invoices: QueryCache<InvoicePayment>,
    pub(crate) stats: Slot<DashboardStats>,
    pub(crate) mev_blocks: QueryCache<MevBlock>,
    pub(crate) mev_transactions: QueryCache<MevTransaction>,
    changes: Arc<watch::Sender<u64>>,
}

impl CacheStore {
    pub(crate) fn new(windows: &CacheWindows) -> Self {
        let (changes, _) = watch::channel(0u64);
        let changes = Arc::new(changes);

        let entity = StaleWindows::uniform(windows.entities);
        let analytics = StaleWindows {
            list: windows.analytics_lists,
            detail: windows.analytics_details,
        };

        Self {
            guests: QueryCache::new(entity, Arc::clone(&changes)),
            owners: QueryCache::new(entity, Arc::clone(&changes)),
            homes: QueryCache::new(entity, Arc::clone(&changes)),
            home_contracts: QueryCache::new(entity, Arc::clone(&changes)),
            service_contracts: QueryCache::new(entity, Arc::clone(&changes)),
            services: QueryCache::new(entity, Arc::clone(&changes)),
            receivers: QueryCache::new(entity, Arc::clone(&changes)),
            invoices: QueryCache::new(entity, Arc::clone(&changes)),
            stats: Slot::new(windows.stats, Arc::clone(&changes)),
            mev_blocks: QueryCache::new(analytics, Arc::clone(&changes)),
            mev_transactions: QueryCache::new(analytics, Arc::clone(&changes)),
            changes,
        }
    }

    /// Drop every cached value (logout, forced refresh).
    pub(crate) fn clear_all(&self) {
        self.guests.clear();
        self.owners.clear();
        self.homes.clear();
        self.home_contracts.clear();
        self.service_contracts.clear();
        self.services.clear();
        self.receivers.clear();
        self.invoices.clear();
        self.stats.clear();
        self.mev_blocks.clear();
        self.mev_transactions.clear();
    }

    /// Subscribe to the store-wide change counter.
    pub(crate) fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_all_bumps_subscribers() {
        let store = CacheStore::new(&CacheWindows::default());
        let rx = store.subscribe();

        store.guests.store_list(vec![]);
        store.clear_all();

        assert!(*rx.borrow() > 1);
        assert!(store.guests.fresh_list().is_none());
    }
}
