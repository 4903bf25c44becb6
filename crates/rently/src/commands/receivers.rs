//! Payment-receiver command handlers.

use std::sync::Arc;

use tabled::Tabled;

use rently_core::{CreateReceiverRequest, Portal, Receiver, UpdateReceiverRequest};

use crate::cli::{GlobalOpts, ReceiversArgs, ReceiversCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ReceiverRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Bank")]
    bank: String,
}

impl From<&Arc<Receiver>> for ReceiverRow {
    fn from(r: &Arc<Receiver>) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.full_name.clone(),
            phone: r.phone.clone().unwrap_or_default(),
            bank: match (&r.bank_name, &r.bank_account) {
                (Some(bank), Some(account)) => format!("{bank} {account}"),
                (Some(bank), None) => bank.clone(),
                (None, Some(account)) => account.clone(),
                (None, None) => String::new(),
            },
        }
    }
}

fn detail(r: &Arc<Receiver>) -> String {
    let mut lines = vec![
        format!("ID:           {}", r.id),
        format!("Name:         {}", r.full_name),
        format!("Phone:        {}", r.phone.as_deref().unwrap_or("-")),
        format!("Bank:         {}", r.bank_name.as_deref().unwrap_or("-")),
        format!("Bank account: {}", r.bank_account.as_deref().unwrap_or("-")),
    ];
    if let Some(ref note) = r.note {
        lines.push(format!("Note:         {note}"));
    }
    lines.join("\n")
}

pub async fn handle(
    portal: &Portal,
    args: ReceiversArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ReceiversCommand::List => {
            let snap = portal.receivers().await?;
            let out = output::render_list(&global.output, &snap, ReceiverRow::from, |r| {
                r.id.to_string()
            });
            output::print_output(&out, global.quiet);
        }

        ReceiversCommand::Get { id } => {
            let receiver = portal.receiver(id).await?;
            let out =
                output::render_single(&global.output, &receiver, detail, |r| r.id.to_string());
            output::print_output(&out, global.quiet);
        }

        ReceiversCommand::Create {
            name,
            phone,
            bank_account,
            bank_name,
            note,
        } => {
            let receiver = portal
                .create_receiver(CreateReceiverRequest {
                    full_name: name,
                    phone,
                    bank_account,
                    bank_name,
                    note,
                })
                .await?;
            if !global.quiet {
                eprintln!("Receiver created (id {})", receiver.id);
            }
        }

        ReceiversCommand::Update {
            id,
            name,
            phone,
            bank_account,
            bank_name,
            note,
        } => {
            portal
                .update_receiver(
                    id,
                    UpdateReceiverRequest {
                        full_name: name,
                        phone,
                        bank_account,
                        bank_name,
                        note,
                    },
                )
                .await?;
            if !global.quiet {
                eprintln!("Receiver {id} updated");
            }
        }

        ReceiversCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete receiver {id}? This cannot be undone."),
                global.yes,
            )? {
                return Ok(());
            }
            portal.delete_receiver(id).await?;
            if !global.quiet {
                eprintln!("Receiver {id} deleted");
            }
        }
    }
    Ok(())
}
