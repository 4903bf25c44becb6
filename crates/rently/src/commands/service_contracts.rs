//! Service-contract command handlers.

use std::sync::Arc;

use tabled::Tabled;

use rently_core::{
    CreateServiceContractRequest, Portal, ServiceContract, UpdateServiceContractRequest, format,
};

use crate::cli::{GlobalOpts, ServiceContractsArgs, ServiceContractsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ServiceContractRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Lease")]
    lease: String,
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn row(c: &Arc<ServiceContract>, global: &GlobalOpts) -> ServiceContractRow {
    ServiceContractRow {
        id: c.id.to_string(),
        lease: c
            .home_contract_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        service: c
            .service
            .as_ref()
            .map(|s| s.name.clone())
            .or_else(|| c.service_id.as_ref().map(ToString::to_string))
            .unwrap_or_default(),
        price: c.price.map(format::vnd).unwrap_or_default(),
        status: util::badge(format::contract_status(c.status), &global.color),
    }
}

fn detail(c: &Arc<ServiceContract>) -> String {
    let mut lines = vec![
        format!("ID:       {}", c.id),
        format!(
            "Lease:    {}",
            c.home_contract_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".into())
        ),
        format!(
            "Service:  {}",
            c.service
                .as_ref()
                .map(|s| s.name.clone())
                .or_else(|| c.service_id.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| "-".into())
        ),
        format!("Start:    {}", format::date_or_dash(c.start_date)),
        format!("End:      {}", format::date_or_dash(c.end_date)),
        format!("Status:   {}", format::contract_status(c.status).label),
    ];
    if let Some(price) = c.price {
        lines.push(format!("Price:    {}", format::vnd(price)));
    }
    if let Some(cycle) = c.payment_cycle {
        lines.push(format!("Cycle:    {}", format::payment_cycle(cycle)));
    }
    lines.join("\n")
}

pub async fn handle(
    portal: &Portal,
    args: ServiceContractsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ServiceContractsCommand::List => {
            let snap = portal.service_contracts().await?;
            let out = output::render_list(
                &global.output,
                &snap,
                |c| row(c, global),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
        }

        ServiceContractsCommand::Get { id } => {
            let contract = portal.service_contract(id).await?;
            let out =
                output::render_single(&global.output, &contract, detail, |c| c.id.to_string());
            output::print_output(&out, global.quiet);
        }

        ServiceContractsCommand::Create {
            contract,
            service,
            price,
            start,
            end,
            cycle,
        } => {
            let created = portal
                .create_service_contract(CreateServiceContractRequest {
                    home_contract_id: contract,
                    service_id: service,
                    price,
                    start_date: util::parse_date_opt("start", start.as_deref())?,
                    end_date: util::parse_date_opt("end", end.as_deref())?,
                    payment_cycle: cycle,
                })
                .await?;
            if !global.quiet {
                eprintln!("Service contract created (id {})", created.id);
            }
        }

        ServiceContractsCommand::Update {
            id,
            price,
            start,
            end,
            cycle,
            status,
        } => {
            portal
                .update_service_contract(
                    id,
                    UpdateServiceContractRequest {
                        price,
                        start_date: util::parse_date_opt("start", start.as_deref())?,
                        end_date: util::parse_date_opt("end", end.as_deref())?,
                        payment_cycle: cycle,
                        status: status.as_ref().map(util::contract_status),
                    },
                )
                .await?;
            if !global.quiet {
                eprintln!("Service contract {id} updated");
            }
        }

        ServiceContractsCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete service contract {id}? This cannot be undone."),
                global.yes,
            )? {
                return Ok(());
            }
            portal.delete_service_contract(id).await?;
            if !global.quiet {
                eprintln!("Service contract {id} deleted");
            }
        }
    }
    Ok(())
}
