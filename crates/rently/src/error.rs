//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text. Where the original admin surfaces showed
//! Vietnamese toasts, the same wording appears in the help lines.

use miette::Diagnostic;
use thiserror::Error;

use rently_config::ConfigError;
use rently_core::CoreError;

/// Exit codes, stable for scripting.
#[allow(dead_code)]
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the backend at {url}")]
    #[diagnostic(
        code(rently::connection_failed),
        help(
            "Check that the backend is running and accessible.\n\
             URL: {url}\n\
             Cause: {reason}\n\
             Try: rently stats --insecure"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Not signed in")]
    #[diagnostic(
        code(rently::auth_required),
        help(
            "Sign in first: rently auth login\n\
             Or set the RENTLY_TOKEN environment variable."
        )
    )]
    NotSignedIn,

    #[error("Authentication failed")]
    #[diagnostic(
        code(rently::auth_failed),
        help(
            "Phiên đăng nhập đã hết hạn hoặc không hợp lệ.\n\
             Sign in again: rently auth login --profile {profile}"
        )
    )]
    AuthFailed { profile: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(rently::no_credentials),
        help(
            "Configure credentials with: rently config init\n\
             Or set the RENTLY_TOKEN environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(rently::not_found),
        help("Run: rently {list_command} to see available records")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error ({code}): {message}")]
    #[diagnostic(
        code(rently::api_error),
        help("Đã có lỗi xảy ra, vui lòng thử lại.")
    )]
    ApiError { code: String, message: String },

    #[error("Analytics API is not configured for this profile")]
    #[diagnostic(
        code(rently::no_analytics),
        help("Add `analytics = \"https://...\"` to the profile in the config file.")
    )]
    AnalyticsUnavailable,

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(rently::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(rently::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: rently config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(rently::config))]
    Config(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(rently::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            other => Self::Config(other),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotSignedIn | Self::AuthFailed { .. } | Self::NoCredentials { .. } => {
                exit_code::AUTH
            }
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotSignedIn => Self::NotSignedIn,

            CoreError::AuthenticationFailed { .. } | CoreError::SessionExpired => {
                Self::AuthFailed {
                    profile: "current".into(),
                }
            }

            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },

            CoreError::Api {
                status_code: 404,
                message,
            } => Self::NotFound {
                resource_type: "record".into(),
                identifier: message,
                list_command: "<entity> list".into(),
            },

            CoreError::Api {
                status_code,
                message,
            } => Self::ApiError {
                code: status_code.to_string(),
                message,
            },

            CoreError::AnalyticsUnavailable => Self::AnalyticsUnavailable,

            CoreError::Validation { message } => Self::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Internal(message) => Self::ApiError {
                code: "internal".into(),
                message,
            },
        }
    }
}
