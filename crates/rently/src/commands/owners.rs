//! Home-owner command handlers.

use std::sync::Arc;

use tabled::Tabled;

use rently_core::{CreateHomeOwnerRequest, HomeOwner, Portal, UpdateHomeOwnerRequest};

use crate::cli::{GlobalOpts, OwnersArgs, OwnersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct OwnerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Bank")]
    bank: String,
}

impl From<&Arc<HomeOwner>> for OwnerRow {
    fn from(o: &Arc<HomeOwner>) -> Self {
        Self {
            id: o.id.to_string(),
            name: o.full_name.clone(),
            phone: o.phone.clone().unwrap_or_default(),
            bank: match (&o.bank_name, &o.bank_account) {
                (Some(bank), Some(account)) => format!("{bank} {account}"),
                (Some(bank), None) => bank.clone(),
                (None, Some(account)) => account.clone(),
                (None, None) => String::new(),
            },
        }
    }
}

fn detail(o: &Arc<HomeOwner>) -> String {
    [
        format!("ID:           {}", o.id),
        format!("Name:         {}", o.full_name),
        format!("Phone:        {}", o.phone.as_deref().unwrap_or("-")),
        format!("Email:        {}", o.email.as_deref().unwrap_or("-")),
        format!("Address:      {}", o.address.as_deref().unwrap_or("-")),
        format!("Bank:         {}", o.bank_name.as_deref().unwrap_or("-")),
        format!("Bank account: {}", o.bank_account.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

pub async fn handle(
    portal: &Portal,
    args: OwnersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        OwnersCommand::List => {
            let snap = portal.home_owners().await?;
            let out =
                output::render_list(&global.output, &snap, OwnerRow::from, |o| o.id.to_string());
            output::print_output(&out, global.quiet);
        }

        OwnersCommand::Search { query } => {
            let snap = portal.search_home_owners(&query).await?;
            let out =
                output::render_list(&global.output, &snap, OwnerRow::from, |o| o.id.to_string());
            output::print_output(&out, global.quiet);
        }

        OwnersCommand::Get { id } => {
            let owner = portal.home_owner(id).await?;
            let out = output::render_single(&global.output, &owner, detail, |o| o.id.to_string());
            output::print_output(&out, global.quiet);
        }

        OwnersCommand::Create {
            name,
            phone,
            email,
            address,
            bank_account,
            bank_name,
        } => {
            let owner = portal
                .create_home_owner(CreateHomeOwnerRequest {
                    full_name: name,
                    phone,
                    email,
                    address,
                    bank_account,
                    bank_name,
                })
                .await?;
            if !global.quiet {
                eprintln!("Owner created (id {})", owner.id);
            }
        }

        OwnersCommand::Update {
            id,
            name,
            phone,
            email,
            address,
            bank_account,
            bank_name,
        } => {
            portal
                .update_home_owner(
                    id,
                    UpdateHomeOwnerRequest {
                        full_name: name,
                        phone,
                        email,
                        address,
                        bank_account,
                        bank_name,
                    },
                )
                .await?;
            if !global.quiet {
                eprintln!("Owner {id} updated");
            }
        }

        OwnersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete owner {id}? This cannot be undone."), global.yes)? {
                return Ok(());
            }
            portal.delete_home_owner(id).await?;
            if !global.quiet {
                eprintln!("Owner {id} deleted");
            }
        }
    }
    Ok(())
}
