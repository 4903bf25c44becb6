//! Home-contract endpoints.

use crate::Error;
use crate::client::RentalClient;
use crate::types::{HomeContractResponse, HomeContractUpsert};

impl RentalClient {
    pub async fn list_home_contracts(&self) -> Result<Vec<HomeContractResponse>, Error> {
        self.get("home-contracts").await
    }

    pub async fn get_home_contract(&self, id: i64) -> Result<HomeContractResponse, Error> {
        self.get(&format!("home-contracts/{id}")).await
    }

    pub async fn create_home_contract(
        &self,
        body: &HomeContractUpsert,
    ) -> Result<HomeContractResponse, Error> {
        self.post("home-contracts", body).await
    }

    pub async fn update_home_contract(
        &self,
        id: i64,
        body: &HomeContractUpsert,
    ) -> Result<HomeContractResponse, Error> {
        self.put(&format!("home-contracts/{id}"), body).await
    }

    pub async fn delete_home_contract(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("home-contracts/{id}")).await
    }
}
