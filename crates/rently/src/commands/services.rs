//! Service-catalogue command handlers.

use std::sync::Arc;

use tabled::Tabled;

use rently_core::{CreateServiceRequest, Portal, Service, UpdateServiceRequest, format};

use crate::cli::{GlobalOpts, ServicesArgs, ServicesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&Arc<Service>> for ServiceRow {
    fn from(s: &Arc<Service>) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name.clone(),
            unit: s.unit.clone().unwrap_or_default(),
            price: format::vnd(s.price),
        }
    }
}

fn detail(s: &Arc<Service>) -> String {
    let mut lines = vec![
        format!("ID:    {}", s.id),
        format!("Name:  {}", s.name),
        format!("Unit:  {}", s.unit.as_deref().unwrap_or("-")),
        format!("Price: {}", format::vnd(s.price)),
    ];
    if let Some(ref note) = s.note {
        lines.push(format!("Note:  {note}"));
    }
    lines.join("\n")
}

pub async fn handle(
    portal: &Portal,
    args: ServicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ServicesCommand::List => {
            let snap = portal.services().await?;
            let out =
                output::render_list(&global.output, &snap, ServiceRow::from, |s| s.id.to_string());
            output::print_output(&out, global.quiet);
        }

        ServicesCommand::Get { id } => {
            let service = portal.service(id).await?;
            let out = output::render_single(&global.output, &service, detail, |s| s.id.to_string());
            output::print_output(&out, global.quiet);
        }

        ServicesCommand::Create {
            name,
            unit,
            price,
            note,
        } => {
            let service = portal
                .create_service(CreateServiceRequest {
                    name,
                    unit,
                    price,
                    note,
                })
                .await?;
            if !global.quiet {
                eprintln!("Service created (id {})", service.id);
            }
        }

        ServicesCommand::Update {
            id,
            name,
            unit,
            price,
            note,
        } => {
            portal
                .update_service(
                    id,
                    UpdateServiceRequest {
                        name,
                        unit,
                        price,
                        note,
                    },
                )
                .await?;
            if !global.quiet {
                eprintln!("Service {id} updated");
            }
        }

        ServicesCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete service {id}? This cannot be undone."),
                global.yes,
            )? {
                return Ok(());
            }
            portal.delete_service(id).await?;
            if !global.quiet {
                eprintln!("Service {id} deleted");
            }
        }
    }
    Ok(())
}
