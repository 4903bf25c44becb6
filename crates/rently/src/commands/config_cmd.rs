//! Configuration management: init, show, path, set-token.

use secrecy::SecretString;

use rently_config::{Profile, config_path, load_config_or_default, save_config, store_token};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),
        ConfigCommand::Show => show(),
        ConfigCommand::Path => {
            println!("{}", config_path().display());
            Ok(())
        }
        ConfigCommand::SetToken { token } => set_token(token, global),
    }
}

fn prompt_err(e: dialoguer::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Interactively create or update a profile.
fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = load_config_or_default();

    let profile_name: String = dialoguer::Input::new()
        .with_prompt("Profile name")
        .default(
            global
                .profile
                .clone()
                .or_else(|| cfg.default_profile.clone())
                .unwrap_or_else(|| "default".into()),
        )
        .interact_text()
        .map_err(prompt_err)?;

    let backend: String = dialoguer::Input::new()
        .with_prompt("Backend URL")
        .default(
            cfg.profiles
                .get(&profile_name)
                .map(|p| p.backend.clone())
                .unwrap_or_else(|| "https://admin.rently.vn".into()),
        )
        .interact_text()
        .map_err(prompt_err)?;

    let analytics: String = dialoguer::Input::new()
        .with_prompt("Analytics URL (empty to skip)")
        .allow_empty(true)
        .default(
            cfg.profiles
                .get(&profile_name)
                .and_then(|p| p.analytics.clone())
                .unwrap_or_default(),
        )
        .interact_text()
        .map_err(prompt_err)?;

    cfg.profiles.insert(
        profile_name.clone(),
        Profile {
            backend,
            analytics: (!analytics.is_empty()).then_some(analytics),
            auth_mode: "auto".into(),
            token: None,
            token_env: None,
            username: None,
            password: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
            stale_secs: None,
        },
    );
    if cfg.default_profile.is_none() {
        cfg.default_profile = Some(profile_name.clone());
    }
    save_config(&cfg)?;

    let store_now = dialoguer::Confirm::new()
        .with_prompt("Store an access token in the keyring now?")
        .default(false)
        .interact()
        .map_err(prompt_err)?;
    if store_now {
        let token = SecretString::from(rpassword::prompt_password("Access token: ")?);
        store_token(&profile_name, &token)?;
    }

    eprintln!(
        "Profile '{profile_name}' written to {}",
        config_path().display()
    );
    Ok(())
}

/// Print the effective configuration with secrets redacted.
fn show() -> Result<(), CliError> {
    let mut cfg = load_config_or_default();
    for profile in cfg.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some("<redacted>".into());
        }
        if profile.password.is_some() {
            profile.password = Some("<redacted>".into());
        }
    }

    let rendered = toml::to_string_pretty(&cfg)
        .map_err(|e| CliError::Config(rently_config::ConfigError::Serialization(e)))?;
    println!("{rendered}");
    Ok(())
}

fn set_token(token: Option<String>, global: &GlobalOpts) -> Result<(), CliError> {
    let profile_name = global
        .profile
        .clone()
        .or_else(|| load_config_or_default().default_profile)
        .unwrap_or_else(|| "default".into());

    let token = match token {
        Some(value) => SecretString::from(value),
        None => SecretString::from(rpassword::prompt_password("Access token: ")?),
    };

    store_token(&profile_name, &token)?;
    eprintln!("Token stored for profile '{profile_name}'.");
    Ok(())
}
