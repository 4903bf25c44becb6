use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// The account payments are collected into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receiver {
    pub id: EntityId,
    pub full_name: String,
    pub phone: Option<String>,
    pub bank_account: Option<String>,
    pub bank_name: Option<String>,
    pub note: Option<String>,
}
