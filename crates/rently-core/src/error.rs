use thiserror::Error;

/// Error type surfaced to front ends by the portal.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A query or mutation was attempted before `connect()`.
    #[error("Not signed in -- call connect() first")]
    NotSignedIn,

    /// Credentials or token were rejected during connect.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// The backend answered 401 mid-session; the session state has
    /// already been flipped to `Expired`.
    #[error("Session expired -- sign in again")]
    SessionExpired,

    /// Could not reach the backend at all.
    #[error("Could not connect to {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    /// Non-success envelope from the backend.
    #[error("API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    /// MEV commands were used without an analytics URL configured.
    #[error("Analytics API is not configured for this profile")]
    AnalyticsUnavailable,

    /// Input failed client-side validation.
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Anything else (deserialization, unexpected shapes).
    #[error("{0}")]
    Internal(String),
}

impl From<rently_api::Error> for CoreError {
    fn from(err: rently_api::Error) -> Self {
        use rently_api::Error as Api;

        match err {
            Api::SessionExpired => Self::SessionExpired,
            Api::Authentication { message } => Self::AuthenticationFailed { message },
            Api::Transport(e) => {
                if e.is_connect() || e.is_timeout() {
                    Self::ConnectionFailed {
                        url: e.url().map(ToString::to_string).unwrap_or_default(),
                        reason: e.to_string(),
                    }
                } else {
                    Self::Internal(e.to_string())
                }
            }
            Api::InvalidUrl(e) => Self::Validation {
                message: format!("invalid URL: {e}"),
            },
            Api::Tls(message) => Self::ConnectionFailed {
                url: String::new(),
                reason: message,
            },
            Api::Api {
                status_code,
                message,
            } => Self::Api {
                status_code,
                message,
            },
            Api::Analytics { status, message } => Self::Api {
                status_code: status,
                message,
            },
            Api::MissingData => Self::Internal("response envelope carried no data".into()),
            Api::Deserialization { message, .. } => Self::Internal(message),
        }
    }
}
