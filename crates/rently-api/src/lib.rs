// rently-api: Async Rust client for the Rently property-management
// backend (envelope REST under /api/v1) and its MEV analytics companion.

pub mod analytics;
pub mod auth;
pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod transport;
pub mod types;

pub use analytics::AnalyticsClient;
pub use auth::Credentials;
pub use client::RentalClient;
pub use envelope::{Envelope, profile_response_is_valid};
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
