use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;
use super::owner::HomeOwner;

/// A managed rental home.
///
/// `owner` is populated only by endpoints that expand the reference;
/// `owner_id` is always usable for lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Home {
    pub id: EntityId,
    pub name: String,
    pub address: Option<String>,
    pub owner_id: Option<EntityId>,
    pub owner: Option<HomeOwner>,
    pub room_count: Option<u32>,
    /// Asking rent in whole VND.
    pub base_price: Option<i64>,
    pub status: Option<i32>,
    pub note: Option<String>,
}
