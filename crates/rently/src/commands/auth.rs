//! Session commands: login, logout, whoami.

use secrecy::SecretString;

use rently_config::{clear_token, load_config, store_token};
use rently_core::{CacheWindows, Credentials, Portal, PortalConfig, TlsVerification};

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::error::CliError;

use super::util;

pub async fn handle(args: AuthArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        AuthCommand::Login { username } => login(username, global).await,
        AuthCommand::Logout => logout(global).await,
        AuthCommand::Whoami => whoami(global).await,
    }
}

/// Exchange username/password for a token and store it in the keyring.
///
/// Runs without resolvable credentials — a fresh profile only needs its
/// backend URL.
async fn login(username: Option<String>, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = load_config()?;
    let profile_name = global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());

    let backend = match global.backend.clone() {
        Some(url) => url,
        None => {
            let profile =
                cfg.profiles
                    .get(&profile_name)
                    .ok_or_else(|| CliError::ProfileNotFound {
                        name: profile_name.clone(),
                        available: {
                            let mut names: Vec<&str> =
                                cfg.profiles.keys().map(String::as_str).collect();
                            names.sort_unstable();
                            names.join(", ")
                        },
                    })?;
            profile.backend.clone()
        }
    };

    let username = match username {
        Some(name) => name,
        None => dialoguer::Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?,
    };
    let password = SecretString::from(rpassword::prompt_password("Password: ")?);

    let backend_url = backend.parse().map_err(|_| CliError::Validation {
        field: "backend".into(),
        reason: format!("invalid URL: {backend}"),
    })?;

    let tls = if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::System
    };

    // Placeholder credentials; obtain_token runs unauthenticated.
    let portal = Portal::new(PortalConfig {
        backend_url,
        analytics_url: None,
        auth: Credentials::Password {
            username: username.clone(),
            password: password.clone(),
        },
        tls,
        timeout: std::time::Duration::from_secs(global.timeout.unwrap_or(30)),
        cache: CacheWindows::default(),
    });

    let token = portal.obtain_token(&username, &password).await?;
    store_token(&profile_name, &token)?;

    if !global.quiet {
        eprintln!("Signed in as {username}. Token stored for profile '{profile_name}'.");
    }
    Ok(())
}

/// Invalidate the session server-side (best-effort) and drop the stored
/// token.
async fn logout(global: &GlobalOpts) -> Result<(), CliError> {
    let profile_name = global
        .profile
        .clone()
        .or_else(|| load_config().ok().and_then(|c| c.default_profile))
        .unwrap_or_else(|| "default".into());

    // Server-side logout only works while the token still resolves;
    // a failure here must not keep the local token around.
    if let Ok(portal) = util::connect(global).await {
        portal.logout().await;
    }
    clear_token(&profile_name)?;

    if !global.quiet {
        eprintln!("Signed out of profile '{profile_name}'.");
    }
    Ok(())
}

async fn whoami(global: &GlobalOpts) -> Result<(), CliError> {
    let portal = util::connect(global).await?;
    let profile = portal.profile().ok_or(CliError::NotSignedIn)?;

    println!("Username: {}", profile.username);
    if let Some(ref name) = profile.full_name {
        println!("Name:     {name}");
    }
    if let Some(ref email) = profile.email {
        println!("Email:    {email}");
    }
    if let Some(ref role) = profile.role {
        println!("Role:     {role}");
    }
    Ok(())
}
