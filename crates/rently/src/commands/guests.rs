//! Guest command handlers.

use std::sync::Arc;

use tabled::Tabled;

use rently_core::{CreateGuestRequest, Guest, Portal, UpdateGuestRequest, format};

use crate::cli::{GlobalOpts, GuestsArgs, GuestsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct GuestRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Citizen ID")]
    citizen_id: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Arc<Guest>> for GuestRow {
    fn from(g: &Arc<Guest>) -> Self {
        Self {
            id: g.id.to_string(),
            name: g.full_name.clone(),
            phone: g.phone.clone().unwrap_or_default(),
            citizen_id: g.citizen_id.clone().unwrap_or_default(),
            created: g.created_at.map(format::datetime).unwrap_or_default(),
        }
    }
}

fn detail(g: &Arc<Guest>) -> String {
    let mut lines = vec![
        format!("ID:         {}", g.id),
        format!("Name:       {}", g.full_name),
        format!("Phone:      {}", g.phone.as_deref().unwrap_or("-")),
        format!("Email:      {}", g.email.as_deref().unwrap_or("-")),
        format!("Citizen ID: {}", g.citizen_id.as_deref().unwrap_or("-")),
        format!("Address:    {}", g.address.as_deref().unwrap_or("-")),
    ];
    if let Some(t) = g.created_at {
        lines.push(format!("Created:    {}", format::datetime(t)));
    }
    if let Some(ref note) = g.note {
        lines.push(format!("Note:       {note}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    portal: &Portal,
    args: GuestsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        GuestsCommand::List => {
            let snap = portal.guests().await?;
            let out =
                output::render_list(&global.output, &snap, GuestRow::from, |g| g.id.to_string());
            output::print_output(&out, global.quiet);
        }

        GuestsCommand::Search { query } => {
            let snap = portal.search_guests(&query).await?;
            let out =
                output::render_list(&global.output, &snap, GuestRow::from, |g| g.id.to_string());
            output::print_output(&out, global.quiet);
        }

        GuestsCommand::Get { id } => {
            let guest = portal.guest(id).await?;
            let out = output::render_single(&global.output, &guest, detail, |g| g.id.to_string());
            output::print_output(&out, global.quiet);
        }

        GuestsCommand::Create {
            name,
            phone,
            email,
            citizen_id,
            address,
            note,
        } => {
            let guest = portal
                .create_guest(CreateGuestRequest {
                    full_name: name,
                    phone,
                    email,
                    citizen_id,
                    address,
                    note,
                })
                .await?;
            if !global.quiet {
                eprintln!("Guest created (id {})", guest.id);
            }
        }

        GuestsCommand::Update {
            id,
            name,
            phone,
            email,
            citizen_id,
            address,
            note,
        } => {
            portal
                .update_guest(
                    id,
                    UpdateGuestRequest {
                        full_name: name,
                        phone,
                        email,
                        citizen_id,
                        address,
                        note,
                    },
                )
                .await?;
            if !global.quiet {
                eprintln!("Guest {id} updated");
            }
        }

        GuestsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete guest {id}? This cannot be undone."), global.yes)? {
                return Ok(());
            }
            portal.delete_guest(id).await?;
            if !global.quiet {
                eprintln!("Guest {id} deleted");
            }
        }
    }
    Ok(())
}
