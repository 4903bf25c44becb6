// Portal configuration. `rently-config` builds these from TOML profiles;
// the types live here so the TUI and tests can construct them directly.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

pub use rently_api::Credentials;

/// How to verify the backend's TLS certificate.
#[derive(Debug, Clone)]
pub enum TlsVerification {
    /// Use the system certificate store.
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (staging environments).
    DangerAcceptInvalid,
}

/// Stale windows for the cache layer.
///
/// Business entities tolerate seconds of staleness; the analytics feed
/// tolerates minutes and is the only surface with longer fixed windows.
#[derive(Debug, Clone)]
pub struct CacheWindows {
    pub entities: Duration,
    pub stats: Duration,
    pub analytics_lists: Duration,
    pub analytics_details: Duration,
}

impl Default for CacheWindows {
    fn default() -> Self {
        Self {
            entities: Duration::from_secs(30),
            stats: Duration::from_secs(60),
            analytics_lists: Duration::from_secs(60),
            analytics_details: Duration::from_secs(300),
        }
    }
}

/// Everything the portal needs to talk to one backend deployment.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Backend root, e.g. `https://admin.rently.vn`. The `/api/v1`
    /// suffix is appended by the client.
    pub backend_url: Url,

    /// MEV analytics API root. Optional -- MEV views error cleanly when
    /// absent.
    pub analytics_url: Option<Url>,

    pub auth: Credentials,
    pub tls: TlsVerification,
    pub timeout: Duration,
    pub cache: CacheWindows,
}
