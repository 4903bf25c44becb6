use serde::{Deserialize, Serialize};

/// Aggregate figures for the dashboard overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub home_count: u64,
    pub guest_count: u64,
    pub active_contract_count: u64,
    pub expiring_contract_count: u64,
    pub unpaid_invoice_count: u64,
    pub revenue_this_month: Option<i64>,
    pub revenue_this_year: Option<i64>,
}
