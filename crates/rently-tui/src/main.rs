//! rently-tui — terminal dashboard for a Rently property-management
//! backend.

mod action;
mod app;
mod data;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use rently_config::{load_config, profile_to_portal_config_with, resolve_auth};
use rently_core::{Credentials, Portal};

use crate::app::App;

#[derive(Debug, Parser)]
#[command(name = "rently-tui", version, about = "Terminal dashboard for Rently")]
struct Args {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "RENTLY_PROFILE")]
    profile: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let args = Args::parse();
    let cfg = load_config()?;

    let profile_name = args
        .profile
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());
    let profile = cfg.profiles.get(&profile_name).ok_or_else(|| {
        eyre!(
            "profile '{profile_name}' not found — create one with `rently config init`"
        )
    })?;

    // Stored credentials are optional: without them the app opens on the
    // sign-in screen instead of failing.
    let stored_auth = resolve_auth(profile, &profile_name).ok();
    let auth = stored_auth.clone().unwrap_or_else(|| {
        Credentials::Token(SecretString::from(String::new()))
    });
    let portal_config = profile_to_portal_config_with(profile, &cfg.defaults, auth)?;
    let portal = Portal::new(portal_config);

    let signed_in = match stored_auth {
        Some(_) => portal.connect().await.is_ok(),
        None => false,
    };

    App::new(portal, signed_in).run().await
}

/// The terminal belongs to the UI — logs go to a file, filtered by
/// `RUST_LOG`.
fn init_logging() {
    let log_dir = std::env::temp_dir().join("rently-tui");
    let appender = tracing_appender::rolling::daily(log_dir, "rently-tui.log");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(appender)
        .with_ansi(false)
        .init();
}
