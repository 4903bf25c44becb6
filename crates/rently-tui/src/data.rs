//! Snapshot of everything the screens render, refreshed in the
//! background through the portal's cache (so stale windows still apply).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use rently_core::{
    CoreError, DashboardStats, Home, HomeContract, InvoicePayment, MevBlock, MevTransaction,
    Portal,
};

pub const MEV_LIST_LIMIT: u32 = 25;

#[derive(Debug, Default, Clone)]
pub struct AppData {
    pub stats: Option<Arc<DashboardStats>>,
    pub homes: Vec<Arc<Home>>,
    pub contracts: Vec<Arc<HomeContract>>,
    pub invoices: Vec<Arc<InvoicePayment>>,
    pub mev_blocks: Vec<Arc<MevBlock>>,
    pub mev_transactions: Vec<Arc<MevTransaction>>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Fetch everything the screens show. Each read goes through the cache,
/// so a refresh inside the stale windows is mostly free.
///
/// MEV data is optional (no analytics URL configured) and must not fail
/// the whole refresh; a session expiry must.
pub async fn refresh(portal: &Portal) -> Result<AppData, CoreError> {
    let stats = portal.dashboard_stats().await?;
    let homes = portal.homes().await?;
    let contracts = portal.home_contracts().await?;
    let invoices = portal.invoice_payments().await?;

    let (mev_blocks, mev_transactions) = match portal.mev_blocks(MEV_LIST_LIMIT).await {
        Ok(blocks) => {
            let txs = portal
                .mev_transactions(MEV_LIST_LIMIT)
                .await
                .unwrap_or_default();
            (blocks, txs)
        }
        Err(CoreError::SessionExpired) => return Err(CoreError::SessionExpired),
        Err(e) => {
            debug!(error = %e, "MEV data unavailable, leaving view empty");
            (Arc::new(Vec::new()), Arc::new(Vec::new()))
        }
    };

    Ok(AppData {
        stats: Some(stats),
        homes: homes.to_vec(),
        contracts: contracts.to_vec(),
        invoices: invoices.to_vec(),
        mev_blocks: mev_blocks.to_vec(),
        mev_transactions: mev_transactions.to_vec(),
        refreshed_at: Some(Utc::now()),
    })
}
