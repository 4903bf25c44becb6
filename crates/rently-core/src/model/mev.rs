// MEV analytics view types. These mirror the upstream analytics feed;
// nothing is computed locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One block as seen by the analytics feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MevBlock {
    pub number: u64,
    pub hash: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub transaction_count: Option<u32>,
    pub mev_transaction_count: Option<u32>,
    pub profit_eth: Option<f64>,
}

/// One extracted-value transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MevTransaction {
    pub hash: String,
    pub block_number: Option<u64>,
    /// Upstream classification: "arbitrage", "sandwich", "liquidation", ...
    pub kind: Option<String>,
    pub protocol: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub profit_eth: Option<f64>,
    pub cost_eth: Option<f64>,
}
