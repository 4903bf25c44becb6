//! Guest endpoints.

use crate::Error;
use crate::client::RentalClient;
use crate::types::{GuestResponse, GuestUpsert};

impl RentalClient {
    pub async fn list_guests(&self) -> Result<Vec<GuestResponse>, Error> {
        self.get("guests").await
    }

    pub async fn search_guests(&self, query: &str) -> Result<Vec<GuestResponse>, Error> {
        self.get_with_params("guests/search", &[("q", query.to_owned())])
            .await
    }

    pub async fn get_guest(&self, id: i64) -> Result<GuestResponse, Error> {
        self.get(&format!("guests/{id}")).await
    }

    pub async fn create_guest(&self, body: &GuestUpsert) -> Result<GuestResponse, Error> {
        self.post("guests", body).await
    }

    pub async fn update_guest(&self, id: i64, body: &GuestUpsert) -> Result<GuestResponse, Error> {
        self.put(&format!("guests/{id}"), body).await
    }

    pub async fn delete_guest(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("guests/{id}")).await
    }
}
