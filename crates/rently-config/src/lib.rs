//! Shared configuration for the rently CLI and TUI.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext), and
//! translation to `rently_core::PortalConfig`. Both binaries depend on
//! this crate — the CLI adds flag-aware wrappers on top.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rently_core::{CacheWindows, Credentials, PortalConfig, TlsVerification};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Stale window for business entities, in seconds.
    #[serde(default = "default_stale_secs")]
    pub stale_secs: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
            stale_secs: default_stale_secs(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_stale_secs() -> u64 {
    30
}

/// A named backend profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g., "https://admin.rently.vn").
    pub backend: String,

    /// MEV analytics API base URL. Optional.
    pub analytics: Option<String>,

    /// Auth mode: "token", "password", or "auto" (token chain first,
    /// then username/password).
    #[serde(default = "default_auth_mode")]
    pub auth_mode: String,

    /// Access token (plaintext — prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable name containing the access token.
    pub token_env: Option<String>,

    /// Username for password auth.
    pub username: Option<String>,

    /// Password for password auth (plaintext — prefer keyring).
    pub password: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,

    /// Override the business-entity stale window, in seconds.
    pub stale_secs: Option<u64>,
}

fn default_auth_mode() -> String {
    "auto".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("vn", "rently", "rently").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("rently");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("RENTLY_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Keyring storage ─────────────────────────────────────────────────

/// Store an access token in the system keyring for a profile.
pub fn store_token(profile_name: &str, token: &SecretString) -> Result<(), ConfigError> {
    use secrecy::ExposeSecret;

    let entry = keyring::Entry::new("rently", &format!("{profile_name}/token"))
        .map_err(|e| ConfigError::Keyring(e.to_string()))?;
    entry
        .set_password(token.expose_secret())
        .map_err(|e| ConfigError::Keyring(e.to_string()))?;
    Ok(())
}

/// Remove a profile's stored token. Missing entries are not an error.
pub fn clear_token(profile_name: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new("rently", &format!("{profile_name}/token"))
        .map_err(|e| ConfigError::Keyring(e.to_string()))?;
    match entry.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(ConfigError::Keyring(e.to_string())),
    }
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve an access token from the fallback chain, mirroring the way
/// the web dashboard looked in the cookie first and then two local
/// storage keys: profile's `token_env` → `RENTLY_TOKEN` → system
/// keyring → plaintext in the profile.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. Well-known env var
    if let Ok(val) = std::env::var("RENTLY_TOKEN") {
        return Ok(SecretString::from(val));
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new("rently", &format!("{profile_name}/token")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Resolve username + password (the final fallback when no token is
/// available anywhere).
pub fn resolve_password_credentials(
    profile: &Profile,
    profile_name: &str,
) -> Result<(String, SecretString), ConfigError> {
    let username = profile
        .username
        .clone()
        .or_else(|| std::env::var("RENTLY_USERNAME").ok())
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })?;

    // 1. Env var
    if let Ok(pw) = std::env::var("RENTLY_PASSWORD") {
        return Ok((username, SecretString::from(pw)));
    }

    // 2. Keyring
    if let Ok(entry) = keyring::Entry::new("rently", &format!("{profile_name}/password")) {
        if let Ok(pw) = entry.get_password() {
            return Ok((username, SecretString::from(pw)));
        }
    }

    // 3. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok((username, SecretString::from(pw.clone())));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Resolve `Credentials` from a profile's `auth_mode` field.
pub fn resolve_auth(profile: &Profile, profile_name: &str) -> Result<Credentials, ConfigError> {
    match profile.auth_mode.as_str() {
        "token" => {
            let token = resolve_token(profile, profile_name)?;
            Ok(Credentials::Token(token))
        }
        "password" => {
            let (username, password) = resolve_password_credentials(profile, profile_name)?;
            Ok(Credentials::Password { username, password })
        }
        "auto" => match resolve_token(profile, profile_name) {
            Ok(token) => Ok(Credentials::Token(token)),
            Err(_) => {
                let (username, password) = resolve_password_credentials(profile, profile_name)?;
                Ok(Credentials::Password { username, password })
            }
        },
        other => Err(ConfigError::Validation {
            field: "auth_mode".into(),
            reason: format!("expected 'token', 'password', or 'auto', got '{other}'"),
        }),
    }
}

/// Build a `PortalConfig` from a profile.
pub fn profile_to_portal_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<PortalConfig, ConfigError> {
    let auth = resolve_auth(profile, profile_name)?;
    profile_to_portal_config_with(profile, defaults, auth)
}

/// Like [`profile_to_portal_config`] with explicit credentials — used by
/// the TUI before any are stored (its sign-in screen supplies them).
pub fn profile_to_portal_config_with(
    profile: &Profile,
    defaults: &Defaults,
    auth: Credentials,
) -> Result<PortalConfig, ConfigError> {
    let backend_url: url::Url = profile
        .backend
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "backend".into(),
            reason: format!("invalid URL: {}", profile.backend),
        })?;

    let analytics_url = match &profile.analytics {
        Some(raw) => Some(raw.parse().map_err(|_| ConfigError::Validation {
            field: "analytics".into(),
            reason: format!("invalid URL: {raw}"),
        })?),
        None => None,
    };

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::System
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    let cache = CacheWindows {
        entities: Duration::from_secs(profile.stale_secs.unwrap_or(defaults.stale_secs)),
        ..CacheWindows::default()
    };

    Ok(PortalConfig {
        backend_url,
        analytics_url,
        auth,
        tls,
        timeout,
        cache,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            backend: "https://admin.rently.vn".into(),
            analytics: None,
            auth_mode: "token".into(),
            token: Some("tok-plain".into()),
            token_env: None,
            username: None,
            password: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
            stale_secs: None,
        }
    }

    #[test]
    fn plaintext_token_is_the_last_resort() {
        let creds = resolve_auth(&profile(), "default").unwrap();
        assert!(matches!(creds, Credentials::Token(_)));
    }

    #[test]
    fn unknown_auth_mode_is_rejected() {
        let mut p = profile();
        p.auth_mode = "cookie".into();
        assert!(matches!(
            resolve_auth(&p, "default"),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn invalid_backend_url_is_rejected() {
        let mut p = profile();
        p.backend = "not a url".into();
        assert!(matches!(
            profile_to_portal_config(&p, "default", &Defaults::default()),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn profile_overrides_win_over_defaults() {
        let mut p = profile();
        p.timeout = Some(5);
        p.stale_secs = Some(120);
        let cfg = profile_to_portal_config(&p, "default", &Defaults::default()).unwrap();

        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.cache.entities, Duration::from_secs(120));
    }

    #[test]
    fn toml_file_layers_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                default_profile = "staging"

                [profiles.staging]
                backend = "https://staging.rently.vn"
                auth_mode = "token"
                stale_secs = 120
            "#,
        )
        .unwrap();

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&path))
            .extract()
            .unwrap();

        assert_eq!(config.default_profile.as_deref(), Some("staging"));
        // Unset defaults survive the file layer.
        assert_eq!(config.defaults.output, "table");

        let staging = &config.profiles["staging"];
        assert_eq!(staging.backend, "https://staging.rently.vn");
        assert_eq!(staging.stale_secs, Some(120));
        assert!(staging.token.is_none());
    }
}
