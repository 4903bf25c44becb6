//! Home endpoints.

use crate::Error;
use crate::client::RentalClient;
use crate::types::{HomeResponse, HomeUpsert};

impl RentalClient {
    pub async fn list_homes(&self) -> Result<Vec<HomeResponse>, Error> {
        self.get("homes").await
    }

    pub async fn search_homes(&self, query: &str) -> Result<Vec<HomeResponse>, Error> {
        self.get_with_params("homes/search", &[("q", query.to_owned())])
            .await
    }

    pub async fn get_home(&self, id: i64) -> Result<HomeResponse, Error> {
        self.get(&format!("homes/{id}")).await
    }

    pub async fn create_home(&self, body: &HomeUpsert) -> Result<HomeResponse, Error> {
        self.post("homes", body).await
    }

    pub async fn update_home(&self, id: i64, body: &HomeUpsert) -> Result<HomeResponse, Error> {
        self.put(&format!("homes/{id}"), body).await
    }

    pub async fn delete_home(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("homes/{id}")).await
    }
}
