//! Invoice / payment command handlers.

use std::sync::Arc;

use chrono::Utc;
use tabled::Tabled;

use rently_core::{
    CreateInvoicePaymentRequest, InvoicePayment, PaymentStatus, Portal,
    UpdateInvoicePaymentRequest, format,
};

use crate::cli::{GlobalOpts, InvoicesArgs, InvoicesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
pub(crate) struct InvoiceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Contract")]
    contract: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl InvoiceRow {
    /// Shared with `contracts invoices`, hence pub(crate).
    pub(crate) fn build(i: &Arc<InvoicePayment>, global: &GlobalOpts) -> Self {
        Self {
            id: i.id.to_string(),
            contract: i
                .home_contract_id
                .as_ref()
                .or(i.service_contract_id.as_ref())
                .map(ToString::to_string)
                .unwrap_or_default(),
            amount: format::vnd(i.amount),
            due: format::date_or_dash(i.due_date),
            status: util::badge(format::payment_status(i.status), &global.color),
        }
    }
}

fn detail(i: &Arc<InvoicePayment>) -> String {
    let mut lines = vec![
        format!("ID:        {}", i.id),
        format!("Amount:    {}", format::vnd(i.amount)),
        format!("Due:       {}", format::date_or_dash(i.due_date)),
        format!("Paid:      {}", format::date_or_dash(i.paid_date)),
        format!("Status:    {}", format::payment_status(i.status).label),
    ];
    if let Some(ref id) = i.home_contract_id {
        lines.push(format!("Lease:     {id}"));
    }
    if let Some(ref id) = i.service_contract_id {
        lines.push(format!("Service:   {id}"));
    }
    if let Some(ref receiver) = i.receiver {
        lines.push(format!("Receiver:  {} ({})", receiver.full_name, receiver.id));
    } else if let Some(ref id) = i.receiver_id {
        lines.push(format!("Receiver:  {id}"));
    }
    if let Some(ref note) = i.note {
        lines.push(format!("Note:      {note}"));
    }
    lines.join("\n")
}

pub async fn handle(
    portal: &Portal,
    args: InvoicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        InvoicesCommand::List => {
            let snap = portal.invoice_payments().await?;
            let out = output::render_list(
                &global.output,
                &snap,
                |i| InvoiceRow::build(i, global),
                |i| i.id.to_string(),
            );
            output::print_output(&out, global.quiet);
        }

        InvoicesCommand::Get { id } => {
            let invoice = portal.invoice_payment(id).await?;
            let out = output::render_single(&global.output, &invoice, detail, |i| i.id.to_string());
            output::print_output(&out, global.quiet);
        }

        InvoicesCommand::Create {
            contract,
            service_contract,
            amount,
            due,
            receiver,
            note,
        } => {
            let invoice = portal
                .create_invoice_payment(CreateInvoicePaymentRequest {
                    home_contract_id: contract,
                    service_contract_id: service_contract,
                    amount,
                    due_date: util::parse_date_opt("due", due.as_deref())?,
                    receiver_id: receiver,
                    note,
                })
                .await?;
            if !global.quiet {
                eprintln!("Invoice created (id {})", invoice.id);
            }
        }

        InvoicesCommand::Pay { id, date } => {
            let paid_date = match date.as_deref() {
                Some(raw) => util::parse_date("date", raw)?,
                None => Utc::now().date_naive(),
            };
            portal
                .update_invoice_payment(
                    id,
                    UpdateInvoicePaymentRequest {
                        paid_date: Some(paid_date),
                        status: Some(PaymentStatus::Paid),
                        ..Default::default()
                    },
                )
                .await?;
            if !global.quiet {
                eprintln!("Invoice {id} marked paid ({})", format::date(paid_date));
            }
        }

        InvoicesCommand::Update {
            id,
            amount,
            due,
            paid,
            status,
            receiver,
            note,
        } => {
            portal
                .update_invoice_payment(
                    id,
                    UpdateInvoicePaymentRequest {
                        amount,
                        due_date: util::parse_date_opt("due", due.as_deref())?,
                        paid_date: util::parse_date_opt("paid", paid.as_deref())?,
                        status: status.as_ref().map(util::payment_status),
                        receiver_id: receiver,
                        note,
                    },
                )
                .await?;
            if !global.quiet {
                eprintln!("Invoice {id} updated");
            }
        }

        InvoicesCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete invoice {id}? This cannot be undone."),
                global.yes,
            )? {
                return Ok(());
            }
            portal.delete_invoice_payment(id).await?;
            if !global.quiet {
                eprintln!("Invoice {id} deleted");
            }
        }
    }
    Ok(())
}
