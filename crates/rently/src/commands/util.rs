//! Shared helpers for command handlers: portal setup, confirmations,
//! date parsing, and badge coloring.

use std::io::IsTerminal;

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tracing::debug;

use rently_config::{load_config, profile_to_portal_config};
use rently_core::format::{StatusBadge, Tone};
use rently_core::{ContractStatus, PaymentStatus, Portal, TlsVerification};

use crate::cli::{ColorMode, ContractStatusArg, GlobalOpts, PaymentStatusArg};
use crate::error::CliError;
use crate::output::should_color;

/// Load config, resolve the selected profile, and connect the portal.
pub async fn connect(global: &GlobalOpts) -> Result<Portal, CliError> {
    let cfg = load_config()?;

    let profile_name = global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());

    let profile = cfg
        .profiles
        .get(&profile_name)
        .ok_or_else(|| CliError::ProfileNotFound {
            name: profile_name.clone(),
            available: {
                let mut names: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
                names.sort_unstable();
                names.join(", ")
            },
        })?;

    debug!(%profile_name, "connecting with profile");
    let mut portal_config = profile_to_portal_config(profile, &profile_name, &cfg.defaults)?;

    // Flag overrides win over profile + defaults.
    if let Some(ref backend) = global.backend {
        portal_config.backend_url = backend.parse().map_err(|_| CliError::Validation {
            field: "backend".into(),
            reason: format!("invalid URL: {backend}"),
        })?;
    }
    if global.insecure {
        portal_config.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        portal_config.timeout = std::time::Duration::from_secs(secs);
    }

    let portal = Portal::new(portal_config);
    portal.connect().await?;
    Ok(portal)
}

/// Ask the user to confirm a destructive action.
///
/// Non-interactive runs must pass `--yes`; prompting would hang them.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, CliError> {
    if assume_yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: prompt.into(),
        });
    }

    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}

/// Parse a `YYYY-MM-DD` flag value.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("expected YYYY-MM-DD, got '{value}'"),
    })
}

pub fn parse_date_opt(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, CliError> {
    value.map(|v| parse_date(field, v)).transpose()
}

// ── Status flag conversions ─────────────────────────────────────────

pub fn contract_status(arg: &ContractStatusArg) -> ContractStatus {
    match arg {
        ContractStatusArg::Active => ContractStatus::Active,
        ContractStatusArg::Expired => ContractStatus::Expired,
        ContractStatusArg::Cancelled => ContractStatus::Cancelled,
    }
}

pub fn payment_status(arg: &PaymentStatusArg) -> PaymentStatus {
    match arg {
        PaymentStatusArg::Unpaid => PaymentStatus::Unpaid,
        PaymentStatusArg::Paid => PaymentStatus::Paid,
        PaymentStatusArg::Overdue => PaymentStatus::Overdue,
    }
}

// ── Badge rendering ─────────────────────────────────────────────────

/// Render a status badge, colored by tone when the terminal allows it.
pub fn badge(badge: StatusBadge, color: &ColorMode) -> String {
    if !should_color(color) {
        return badge.label.to_owned();
    }
    match badge.tone {
        Tone::Positive => badge.label.green().to_string(),
        Tone::Warning => badge.label.yellow().to_string(),
        Tone::Negative => badge.label.red().to_string(),
        Tone::Neutral => badge.label.dimmed().to_string(),
    }
}
