//! Dashboard statistics command.

use rently_core::{Portal, format};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn handle(portal: &Portal, global: &GlobalOpts) -> Result<(), CliError> {
    let stats = portal.dashboard_stats().await?;

    let out = match global.output {
        OutputFormat::Table | OutputFormat::Plain => {
            let mut lines = vec![
                format!("Homes:               {}", stats.home_count),
                format!("Guests:              {}", stats.guest_count),
                format!("Active contracts:    {}", stats.active_contract_count),
                format!("Expiring contracts:  {}", stats.expiring_contract_count),
                format!("Unpaid invoices:     {}", stats.unpaid_invoice_count),
            ];
            if let Some(revenue) = stats.revenue_this_month {
                lines.push(format!("Revenue (month):     {}", format::vnd(revenue)));
            }
            if let Some(revenue) = stats.revenue_this_year {
                lines.push(format!("Revenue (year):      {}", format::vnd(revenue)));
            }
            lines.join("\n")
        }
        _ => output::render_single(&global.output, &stats, |_| String::new(), |_| String::new()),
    };

    output::print_output(&out, global.quiet);
    Ok(())
}
