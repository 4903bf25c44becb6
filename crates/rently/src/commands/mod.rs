//! Command handlers, one module per resource.

pub mod auth;
pub mod config_cmd;
pub mod contracts;
pub mod guests;
pub mod homes;
pub mod invoices;
pub mod mev;
pub mod owners;
pub mod receivers;
pub mod service_contracts;
pub mod services;
pub mod stats;
pub mod util;
