//! Clap derive structures for the `rently` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! This file must stay self-contained (clap + std only) — build.rs pulls
//! it in directly to generate shell completions.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// rently -- back-office CLI for a property-rental business
#[derive(Debug, Parser)]
#[command(
    name = "rently",
    version,
    about = "Administer a Rently property-management backend from the command line",
    long_about = "Back-office tooling for a property-rental business.\n\n\
        Manages homes, owners, guests, contracts, services, receivers and\n\
        invoices through the backend's /api/v1 REST surface, with an\n\
        auxiliary MEV analytics view.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "RENTLY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend URL (overrides profile)
    #[arg(long, short = 'b', env = "RENTLY_BACKEND", global = true)]
    pub backend: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "RENTLY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "RENTLY_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "RENTLY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in, sign out, and inspect the session
    Auth(AuthArgs),

    /// Manage guests (tenants)
    #[command(alias = "g")]
    Guests(GuestsArgs),

    /// Manage home owners (landlords)
    Owners(OwnersArgs),

    /// Manage homes
    #[command(alias = "h")]
    Homes(HomesArgs),

    /// Manage home contracts (leases)
    #[command(alias = "hc")]
    Contracts(ContractsArgs),

    /// Manage service contracts
    #[command(alias = "sc")]
    ServiceContracts(ServiceContractsArgs),

    /// Manage the service catalogue
    Services(ServicesArgs),

    /// Manage payment receivers
    Receivers(ReceiversArgs),

    /// Manage invoices and payments
    #[command(alias = "inv")]
    Invoices(InvoicesArgs),

    /// Show dashboard statistics
    Stats,

    /// MEV analytics views (blocks, transactions)
    Mev(MevArgs),

    /// Manage configuration profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ── Auth ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in and store the access token in the system keyring
    Login {
        /// Username (prompted when omitted)
        #[arg(long)]
        username: Option<String>,
    },
    /// Invalidate the session and remove the stored token
    Logout,
    /// Show the signed-in user
    Whoami,
}

// ── Guests ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GuestsArgs {
    #[command(subcommand)]
    pub command: GuestsCommand,
}

#[derive(Debug, Subcommand)]
pub enum GuestsCommand {
    /// List all guests
    List,
    /// Search guests by name or phone
    Search { query: String },
    /// Show one guest
    Get { id: i64 },
    /// Register a guest
    Create {
        /// Full name
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Citizen id (CCCD)
        #[arg(long)]
        citizen_id: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Update a guest
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        citizen_id: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete a guest
    Delete { id: i64 },
}

// ── Owners ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct OwnersArgs {
    #[command(subcommand)]
    pub command: OwnersCommand,
}

#[derive(Debug, Subcommand)]
pub enum OwnersCommand {
    /// List all home owners
    List,
    /// Search owners by name or phone
    Search { query: String },
    /// Show one owner
    Get { id: i64 },
    /// Register an owner
    Create {
        /// Full name
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        bank_account: Option<String>,
        #[arg(long)]
        bank_name: Option<String>,
    },
    /// Update an owner
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        bank_account: Option<String>,
        #[arg(long)]
        bank_name: Option<String>,
    },
    /// Delete an owner
    Delete { id: i64 },
}

// ── Homes ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct HomesArgs {
    #[command(subcommand)]
    pub command: HomesCommand,
}

#[derive(Debug, Subcommand)]
pub enum HomesCommand {
    /// List all homes
    List,
    /// Search homes by name or address
    Search { query: String },
    /// Show one home
    Get { id: i64 },
    /// Register a home
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: Option<String>,
        /// Owning landlord's id
        #[arg(long)]
        owner: Option<i64>,
        #[arg(long)]
        rooms: Option<u32>,
        /// Asking rent in whole VND
        #[arg(long)]
        price: Option<i64>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Update a home
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        owner: Option<i64>,
        #[arg(long)]
        rooms: Option<u32>,
        #[arg(long)]
        price: Option<i64>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete a home
    Delete { id: i64 },
}

// ── Home contracts ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ContractsArgs {
    #[command(subcommand)]
    pub command: ContractsCommand,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ContractStatusArg {
    Active,
    Expired,
    Cancelled,
}

#[derive(Debug, Subcommand)]
pub enum ContractsCommand {
    /// List all home contracts
    List,
    /// Show one contract
    Get { id: i64 },
    /// List invoices for a contract
    Invoices { id: i64 },
    /// Create a lease
    Create {
        /// Home id
        #[arg(long)]
        home: i64,
        /// Guest id
        #[arg(long)]
        guest: i64,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
        /// Rent per cycle in whole VND
        #[arg(long)]
        rent: i64,
        /// Deposit in whole VND
        #[arg(long)]
        deposit: Option<i64>,
        /// Payment cycle in months (1, 3, 6, 12)
        #[arg(long)]
        cycle: Option<u32>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Update a lease
    Update {
        id: i64,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        rent: Option<i64>,
        #[arg(long)]
        deposit: Option<i64>,
        #[arg(long)]
        cycle: Option<u32>,
        #[arg(long, value_enum)]
        status: Option<ContractStatusArg>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete a lease
    Delete { id: i64 },
}

// ── Service contracts ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ServiceContractsArgs {
    #[command(subcommand)]
    pub command: ServiceContractsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ServiceContractsCommand {
    /// List all service contracts
    List,
    /// Show one service contract
    Get { id: i64 },
    /// Attach a service to a lease
    Create {
        /// Home contract id
        #[arg(long)]
        contract: i64,
        /// Service id
        #[arg(long)]
        service: i64,
        /// Price override in whole VND
        #[arg(long)]
        price: Option<i64>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
        /// Payment cycle in months
        #[arg(long)]
        cycle: Option<u32>,
    },
    /// Update a service contract
    Update {
        id: i64,
        #[arg(long)]
        price: Option<i64>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        cycle: Option<u32>,
        #[arg(long, value_enum)]
        status: Option<ContractStatusArg>,
    },
    /// Delete a service contract
    Delete { id: i64 },
}

// ── Services ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ServicesArgs {
    #[command(subcommand)]
    pub command: ServicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ServicesCommand {
    /// List the service catalogue
    List,
    /// Show one service
    Get { id: i64 },
    /// Add a service
    Create {
        #[arg(long)]
        name: String,
        /// Billing unit (kWh, m3, ...)
        #[arg(long)]
        unit: Option<String>,
        /// Price per unit in whole VND
        #[arg(long)]
        price: i64,
        #[arg(long)]
        note: Option<String>,
    },
    /// Update a service
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        price: Option<i64>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete a service
    Delete { id: i64 },
}

// ── Receivers ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ReceiversArgs {
    #[command(subcommand)]
    pub command: ReceiversCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReceiversCommand {
    /// List payment receivers
    List,
    /// Show one receiver
    Get { id: i64 },
    /// Register a receiver
    Create {
        /// Full name
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        bank_account: Option<String>,
        #[arg(long)]
        bank_name: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Update a receiver
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        bank_account: Option<String>,
        #[arg(long)]
        bank_name: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete a receiver
    Delete { id: i64 },
}

// ── Invoices ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InvoicesArgs {
    #[command(subcommand)]
    pub command: InvoicesCommand,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum PaymentStatusArg {
    Unpaid,
    Paid,
    Overdue,
}

#[derive(Debug, Subcommand)]
pub enum InvoicesCommand {
    /// List all invoices
    List,
    /// Show one invoice
    Get { id: i64 },
    /// Issue an invoice
    Create {
        /// Home contract id
        #[arg(long)]
        contract: Option<i64>,
        /// Service contract id
        #[arg(long)]
        service_contract: Option<i64>,
        /// Amount in whole VND
        #[arg(long)]
        amount: i64,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Receiver id
        #[arg(long)]
        receiver: Option<i64>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Mark an invoice as paid (today unless --date is given)
    Pay {
        id: i64,
        /// Payment date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Update an invoice
    Update {
        id: i64,
        #[arg(long)]
        amount: Option<i64>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Paid date (YYYY-MM-DD)
        #[arg(long)]
        paid: Option<String>,
        #[arg(long, value_enum)]
        status: Option<PaymentStatusArg>,
        #[arg(long)]
        receiver: Option<i64>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete an invoice
    Delete { id: i64 },
}

// ── MEV ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct MevArgs {
    #[command(subcommand)]
    pub command: MevCommand,
}

#[derive(Debug, Subcommand)]
pub enum MevCommand {
    /// Recent blocks with MEV activity
    Blocks {
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Show one block
    Block { number: u64 },
    /// Recent MEV transactions
    Transactions {
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Show one transaction
    Transaction { hash: String },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactively create or update a profile
    Init,
    /// Print the effective configuration (secrets redacted)
    Show,
    /// Print the config file path
    Path,
    /// Store an access token in the system keyring
    SetToken {
        /// Token value (prompted when omitted)
        #[arg(long)]
        token: Option<String>,
    },
}
