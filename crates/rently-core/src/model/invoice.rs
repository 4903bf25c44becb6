use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contract::PaymentStatus;
use super::entity_id::EntityId;
use super::receiver::Receiver;

/// An invoice / payment record against a home or service contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePayment {
    pub id: EntityId,
    pub home_contract_id: Option<EntityId>,
    pub service_contract_id: Option<EntityId>,
    /// Whole VND.
    pub amount: i64,
    pub due_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDate>,
    pub status: PaymentStatus,
    pub receiver_id: Option<EntityId>,
    pub receiver: Option<Receiver>,
    pub note: Option<String>,
}
