use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// The landlord a home is leased from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeOwner {
    pub id: EntityId,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub bank_account: Option<String>,
    pub bank_name: Option<String>,
}
