// Read-through response cache with query-key-scoped invalidation.
//
// The key scheme and invalidation rules are the load-bearing contract of
// this crate; see `query_cache.rs` for the details.

mod query_cache;
mod slot;
mod store;

pub(crate) use store::CacheStore;
