//! Cached data layer between `rently-api` and UI consumers (CLI / TUI).
//!
//! This crate owns the business logic, domain model, and response cache
//! for the rently workspace:
//!
//! - **[`Portal`]** — Central facade managing the session lifecycle:
//!   [`connect()`](Portal::connect) resolves credentials and probes the
//!   profile endpoint, then queries read through the cache and mutations
//!   invalidate exactly the keys they affect. A 401 anywhere flips the
//!   observable [`SessionState`] so front ends can route to sign-in.
//!
//! - **Cache layer** (crate-private) — Per-entity
//!   `QueryCache`s under a consistent key scheme: `[entity]`,
//!   `[entity, "search", query]`, `[entity, "detail", id]`. Reads are
//!   read-through with per-surface stale windows; every write bumps a
//!   `watch` change counter for reactive rendering.
//!
//! - **Domain model** ([`model`]) — Canonical types (`Guest`, `Home`,
//!   `HomeContract`, `InvoicePayment`, ...) with [`EntityId`] supporting
//!   numeric and opaque-string identifiers.
//!
//! - **[`format`]** — VND currency, day/month/year dates, and the
//!   status-code badge vocabulary shared by both front ends.

mod cache;

pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod model;
pub mod portal;
pub mod requests;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{CacheWindows, Credentials, PortalConfig, TlsVerification};
pub use error::CoreError;
pub use portal::{Portal, SessionState};
pub use requests::*;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    ContractStatus,
    DashboardStats,
    EntityId,
    Guest,
    Home,
    HomeContract,
    HomeOwner,
    InvoicePayment,
    MevBlock,
    MevTransaction,
    PaymentStatus,
    Receiver,
    Service,
    ServiceContract,
    UserProfile,
};
