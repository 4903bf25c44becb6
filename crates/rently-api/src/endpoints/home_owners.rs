//! Home-owner endpoints.

use crate::Error;
use crate::client::RentalClient;
use crate::types::{HomeOwnerResponse, HomeOwnerUpsert};

impl RentalClient {
    pub async fn list_home_owners(&self) -> Result<Vec<HomeOwnerResponse>, Error> {
        self.get("home-owners").await
    }

    pub async fn search_home_owners(&self, query: &str) -> Result<Vec<HomeOwnerResponse>, Error> {
        self.get_with_params("home-owners/search", &[("q", query.to_owned())])
            .await
    }

    pub async fn get_home_owner(&self, id: i64) -> Result<HomeOwnerResponse, Error> {
        self.get(&format!("home-owners/{id}")).await
    }

    pub async fn create_home_owner(
        &self,
        body: &HomeOwnerUpsert,
    ) -> Result<HomeOwnerResponse, Error> {
        self.post("home-owners", body).await
    }

    pub async fn update_home_owner(
        &self,
        id: i64,
        body: &HomeOwnerUpsert,
    ) -> Result<HomeOwnerResponse, Error> {
        self.put(&format!("home-owners/{id}"), body).await
    }

    pub async fn delete_home_owner(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("home-owners/{id}")).await
    }
}
