use thiserror::Error;

/// Top-level error type for the `rently-api` crate.
///
/// Covers every failure mode across both API surfaces: authentication,
/// transport, the rental backend's envelope responses, and the analytics
/// API. `rently-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, locked account, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The backend answered 401 — the access token is missing, expired,
    /// or revoked. Surfaced separately so the session gate can react.
    #[error("Session expired -- sign in again")]
    SessionExpired,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Rental backend ──────────────────────────────────────────────
    /// Non-success `statusCode` in the backend's response envelope.
    #[error("API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    /// A success envelope arrived without the expected `data` payload.
    #[error("Response envelope carried no data")]
    MissingData,

    // ── Analytics API ───────────────────────────────────────────────
    /// Error from the MEV analytics API (plain HTTP status, no envelope).
    #[error("Analytics API error (HTTP {status}): {message}")]
    Analytics { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the session is gone and
    /// re-authentication might resolve it.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// Only the analytics client consults this — the rental backend is
    /// never retried.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Analytics { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api {
                status_code: 404, ..
            }
            | Self::Analytics { status: 404, .. } => true,
            _ => false,
        }
    }
}
