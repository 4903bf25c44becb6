// ── Contracts and their status vocabularies ──
//
// The backend encodes status as small integers. The enums keep the raw
// code for unrecognized values so round-tripping never loses data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;
use super::guest::Guest;
use super::home::Home;
use super::service::Service;

/// Lifecycle status of a contract. Code 1 is the only state the backend
/// guarantees; the rest follow its admin UI vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ContractStatus {
    /// 1 — currently in force.
    Active,
    /// 2 — ran past its end date.
    Expired,
    /// 3 — terminated early.
    Cancelled,
    /// Anything else, preserved verbatim.
    Unknown(i32),
}

impl From<i32> for ContractStatus {
    fn from(code: i32) -> Self {
        match code {
            1 => Self::Active,
            2 => Self::Expired,
            3 => Self::Cancelled,
            other => Self::Unknown(other),
        }
    }
}

impl From<ContractStatus> for i32 {
    fn from(status: ContractStatus) -> Self {
        match status {
            ContractStatus::Active => 1,
            ContractStatus::Expired => 2,
            ContractStatus::Cancelled => 3,
            ContractStatus::Unknown(code) => code,
        }
    }
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum PaymentStatus {
    /// 0 — issued, not yet paid.
    Unpaid,
    /// 1 — settled.
    Paid,
    /// 2 — past due date.
    Overdue,
    Unknown(i32),
}

impl From<i32> for PaymentStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::Unpaid,
            1 => Self::Paid,
            2 => Self::Overdue,
            other => Self::Unknown(other),
        }
    }
}

impl From<PaymentStatus> for i32 {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Unpaid => 0,
            PaymentStatus::Paid => 1,
            PaymentStatus::Overdue => 2,
            PaymentStatus::Unknown(code) => code,
        }
    }
}

/// A lease between a guest and a home.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeContract {
    pub id: EntityId,
    pub home_id: Option<EntityId>,
    pub home: Option<Home>,
    pub guest_id: Option<EntityId>,
    pub guest: Option<Guest>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Whole VND per payment cycle.
    pub rent_amount: i64,
    pub deposit_amount: Option<i64>,
    /// Billing period in months (1, 3, 6, 12).
    pub payment_cycle: Option<u32>,
    pub status: ContractStatus,
    pub note: Option<String>,
}

/// A recurring service (electricity, water, ...) attached to a lease.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceContract {
    pub id: EntityId,
    pub home_contract_id: Option<EntityId>,
    pub home_contract: Option<Box<HomeContract>>,
    pub service_id: Option<EntityId>,
    pub service: Option<Service>,
    pub price: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub payment_cycle: Option<u32>,
    pub status: ContractStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_status_round_trips_known_codes() {
        for code in [1, 2, 3] {
            assert_eq!(i32::from(ContractStatus::from(code)), code);
        }
    }

    #[test]
    fn contract_status_preserves_unknown_codes() {
        let status = ContractStatus::from(99);
        assert_eq!(status, ContractStatus::Unknown(99));
        assert_eq!(i32::from(status), 99);
    }

    #[test]
    fn payment_status_round_trips() {
        assert_eq!(PaymentStatus::from(0), PaymentStatus::Unpaid);
        assert_eq!(PaymentStatus::from(1), PaymentStatus::Paid);
        assert_eq!(i32::from(PaymentStatus::Unknown(-5)), -5);
    }
}
