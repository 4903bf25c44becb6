//! Home-contract (lease) command handlers.

use std::sync::Arc;

use tabled::Tabled;

use rently_core::{
    CreateHomeContractRequest, HomeContract, Portal, UpdateHomeContractRequest, format,
};

use crate::cli::{ContractsArgs, ContractsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::invoices::InvoiceRow;
use super::util;

#[derive(Tabled)]
struct ContractRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Home")]
    home: String,
    #[tabled(rename = "Guest")]
    guest: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Rent")]
    rent: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn row(c: &Arc<HomeContract>, global: &GlobalOpts) -> ContractRow {
    ContractRow {
        id: c.id.to_string(),
        home: c
            .home
            .as_ref()
            .map(|h| h.name.clone())
            .or_else(|| c.home_id.as_ref().map(ToString::to_string))
            .unwrap_or_default(),
        guest: c
            .guest
            .as_ref()
            .map(|g| g.full_name.clone())
            .or_else(|| c.guest_id.as_ref().map(ToString::to_string))
            .unwrap_or_default(),
        period: format!(
            "{} → {}",
            format::date_or_dash(c.start_date),
            format::date_or_dash(c.end_date)
        ),
        rent: format::vnd(c.rent_amount),
        status: util::badge(format::contract_status(c.status), &global.color),
    }
}

fn detail(c: &Arc<HomeContract>) -> String {
    let mut lines = vec![
        format!("ID:       {}", c.id),
        format!(
            "Home:     {}",
            c.home
                .as_ref()
                .map(|h| h.name.clone())
                .or_else(|| c.home_id.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| "-".into())
        ),
        format!(
            "Guest:    {}",
            c.guest
                .as_ref()
                .map(|g| g.full_name.clone())
                .or_else(|| c.guest_id.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| "-".into())
        ),
        format!("Start:    {}", format::date_or_dash(c.start_date)),
        format!("End:      {}", format::date_or_dash(c.end_date)),
        format!("Rent:     {}", format::vnd(c.rent_amount)),
        format!("Status:   {}", format::contract_status(c.status).label),
    ];
    if let Some(deposit) = c.deposit_amount {
        lines.push(format!("Deposit:  {}", format::vnd(deposit)));
    }
    if let Some(cycle) = c.payment_cycle {
        lines.push(format!("Cycle:    {}", format::payment_cycle(cycle)));
    }
    if let Some(ref note) = c.note {
        lines.push(format!("Note:     {note}"));
    }
    lines.join("\n")
}

pub async fn handle(
    portal: &Portal,
    args: ContractsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ContractsCommand::List => {
            let snap = portal.home_contracts().await?;
            let out = output::render_list(
                &global.output,
                &snap,
                |c| row(c, global),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
        }

        ContractsCommand::Get { id } => {
            let contract = portal.home_contract(id).await?;
            let out =
                output::render_single(&global.output, &contract, detail, |c| c.id.to_string());
            output::print_output(&out, global.quiet);
        }

        ContractsCommand::Invoices { id } => {
            let snap = portal.invoice_payments_for_contract(id).await?;
            let out = output::render_list(
                &global.output,
                &snap,
                |i| InvoiceRow::build(i, global),
                |i| i.id.to_string(),
            );
            output::print_output(&out, global.quiet);
        }

        ContractsCommand::Create {
            home,
            guest,
            start,
            end,
            rent,
            deposit,
            cycle,
            note,
        } => {
            let contract = portal
                .create_home_contract(CreateHomeContractRequest {
                    home_id: home,
                    guest_id: guest,
                    start_date: util::parse_date("start", &start)?,
                    end_date: util::parse_date_opt("end", end.as_deref())?,
                    rent_amount: rent,
                    deposit_amount: deposit,
                    payment_cycle: cycle,
                    note,
                })
                .await?;
            if !global.quiet {
                eprintln!("Contract created (id {})", contract.id);
            }
        }

        ContractsCommand::Update {
            id,
            start,
            end,
            rent,
            deposit,
            cycle,
            status,
            note,
        } => {
            portal
                .update_home_contract(
                    id,
                    UpdateHomeContractRequest {
                        start_date: util::parse_date_opt("start", start.as_deref())?,
                        end_date: util::parse_date_opt("end", end.as_deref())?,
                        rent_amount: rent,
                        deposit_amount: deposit,
                        payment_cycle: cycle,
                        status: status.as_ref().map(util::contract_status),
                        note,
                    },
                )
                .await?;
            if !global.quiet {
                eprintln!("Contract {id} updated");
            }
        }

        ContractsCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete contract {id}? This cannot be undone."),
                global.yes,
            )? {
                return Ok(());
            }
            portal.delete_home_contract(id).await?;
            if !global.quiet {
                eprintln!("Contract {id} deleted");
            }
        }
    }
    Ok(())
}
