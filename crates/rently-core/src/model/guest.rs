use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A renting guest (tenant).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub id: EntityId,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// National citizen-id number (CCCD).
    pub citizen_id: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
