//! Dashboard statistics endpoint.

use crate::Error;
use crate::client::RentalClient;
use crate::types::DashboardStatsResponse;

impl RentalClient {
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStatsResponse, Error> {
        self.get("statistics/dashboard").await
    }
}
