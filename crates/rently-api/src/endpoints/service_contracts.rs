//! Service-contract endpoints.

use crate::Error;
use crate::client::RentalClient;
use crate::types::{ServiceContractResponse, ServiceContractUpsert};

impl RentalClient {
    pub async fn list_service_contracts(&self) -> Result<Vec<ServiceContractResponse>, Error> {
        self.get("service-contracts").await
    }

    pub async fn get_service_contract(&self, id: i64) -> Result<ServiceContractResponse, Error> {
        self.get(&format!("service-contracts/{id}")).await
    }

    pub async fn create_service_contract(
        &self,
        body: &ServiceContractUpsert,
    ) -> Result<ServiceContractResponse, Error> {
        self.post("service-contracts", body).await
    }

    pub async fn update_service_contract(
        &self,
        id: i64,
        body: &ServiceContractUpsert,
    ) -> Result<ServiceContractResponse, Error> {
        self.put(&format!("service-contracts/{id}"), body).await
    }

    pub async fn delete_service_contract(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("service-contracts/{id}")).await
    }
}
