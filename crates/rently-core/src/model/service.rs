use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// An entry in the service catalogue (electricity, water, internet, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: EntityId,
    pub name: String,
    /// Billing unit, e.g. "kWh", "m3", "tháng".
    pub unit: Option<String>,
    /// Price per unit in whole VND.
    pub price: i64,
    pub note: Option<String>,
}
