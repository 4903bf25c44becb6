//! Home command handlers.

use std::sync::Arc;

use tabled::Tabled;

use rently_core::{CreateHomeRequest, Home, Portal, UpdateHomeRequest, format};

use crate::cli::{GlobalOpts, HomesArgs, HomesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct HomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&Arc<Home>> for HomeRow {
    fn from(h: &Arc<Home>) -> Self {
        Self {
            id: h.id.to_string(),
            name: h.name.clone(),
            address: h.address.clone().unwrap_or_default(),
            owner: h
                .owner
                .as_ref()
                .map(|o| o.full_name.clone())
                .or_else(|| h.owner_id.as_ref().map(ToString::to_string))
                .unwrap_or_default(),
            price: h.base_price.map(format::vnd).unwrap_or_default(),
        }
    }
}

fn detail(h: &Arc<Home>) -> String {
    let mut lines = vec![
        format!("ID:      {}", h.id),
        format!("Name:    {}", h.name),
        format!("Address: {}", h.address.as_deref().unwrap_or("-")),
    ];
    match (&h.owner, &h.owner_id) {
        (Some(owner), _) => lines.push(format!("Owner:   {} ({})", owner.full_name, owner.id)),
        (None, Some(id)) => lines.push(format!("Owner:   {id}")),
        (None, None) => lines.push("Owner:   -".into()),
    }
    if let Some(rooms) = h.room_count {
        lines.push(format!("Rooms:   {rooms}"));
    }
    if let Some(price) = h.base_price {
        lines.push(format!("Price:   {}", format::vnd(price)));
    }
    if let Some(ref note) = h.note {
        lines.push(format!("Note:    {note}"));
    }
    lines.join("\n")
}

pub async fn handle(portal: &Portal, args: HomesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        HomesCommand::List => {
            let snap = portal.homes().await?;
            let out =
                output::render_list(&global.output, &snap, HomeRow::from, |h| h.id.to_string());
            output::print_output(&out, global.quiet);
        }

        HomesCommand::Search { query } => {
            let snap = portal.search_homes(&query).await?;
            let out =
                output::render_list(&global.output, &snap, HomeRow::from, |h| h.id.to_string());
            output::print_output(&out, global.quiet);
        }

        HomesCommand::Get { id } => {
            let home = portal.home(id).await?;
            let out = output::render_single(&global.output, &home, detail, |h| h.id.to_string());
            output::print_output(&out, global.quiet);
        }

        HomesCommand::Create {
            name,
            address,
            owner,
            rooms,
            price,
            note,
        } => {
            let home = portal
                .create_home(CreateHomeRequest {
                    name,
                    address,
                    owner_id: owner,
                    room_count: rooms,
                    base_price: price,
                    note,
                })
                .await?;
            if !global.quiet {
                eprintln!("Home created (id {})", home.id);
            }
        }

        HomesCommand::Update {
            id,
            name,
            address,
            owner,
            rooms,
            price,
            note,
        } => {
            portal
                .update_home(
                    id,
                    UpdateHomeRequest {
                        name,
                        address,
                        owner_id: owner,
                        room_count: rooms,
                        base_price: price,
                        status: None,
                        note,
                    },
                )
                .await?;
            if !global.quiet {
                eprintln!("Home {id} updated");
            }
        }

        HomesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete home {id}? This cannot be undone."), global.yes)? {
                return Ok(());
            }
            portal.delete_home(id).await?;
            if !global.quiet {
                eprintln!("Home {id} deleted");
            }
        }
    }
    Ok(())
}
