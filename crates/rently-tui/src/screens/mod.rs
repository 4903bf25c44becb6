//! Screen implementations. Each owns its selection state and renders
//! from the shared [`AppData`](crate::data::AppData) snapshot.

pub mod contracts;
pub mod dashboard;
pub mod homes;
pub mod invoices;
pub mod login;
pub mod mev;
