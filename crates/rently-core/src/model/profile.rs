use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// The signed-in administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: EntityId,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}
