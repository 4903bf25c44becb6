//! rently — back-office CLI for a property-rental business.

mod cli;
mod commands;
mod error;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Commands that never touch the backend.
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "rently", &mut std::io::stdout());
            Ok(())
        }
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),
        Command::Auth(args) => commands::auth::handle(args, &cli.global).await,

        // Everything else runs against a connected portal.
        command => {
            let portal = commands::util::connect(&cli.global).await?;
            match command {
                Command::Guests(args) => commands::guests::handle(&portal, args, &cli.global).await,
                Command::Owners(args) => commands::owners::handle(&portal, args, &cli.global).await,
                Command::Homes(args) => commands::homes::handle(&portal, args, &cli.global).await,
                Command::Contracts(args) => {
                    commands::contracts::handle(&portal, args, &cli.global).await
                }
                Command::ServiceContracts(args) => {
                    commands::service_contracts::handle(&portal, args, &cli.global).await
                }
                Command::Services(args) => {
                    commands::services::handle(&portal, args, &cli.global).await
                }
                Command::Receivers(args) => {
                    commands::receivers::handle(&portal, args, &cli.global).await
                }
                Command::Invoices(args) => {
                    commands::invoices::handle(&portal, args, &cli.global).await
                }
                Command::Stats => commands::stats::handle(&portal, &cli.global).await,
                Command::Mev(args) => commands::mev::handle(&portal, args, &cli.global).await,
                Command::Auth(_) | Command::Config(_) | Command::Completions { .. } => {
                    unreachable!("handled above")
                }
            }
        }
    }
}
