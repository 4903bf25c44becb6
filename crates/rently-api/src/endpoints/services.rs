//! Service catalogue endpoints.

use crate::Error;
use crate::client::RentalClient;
use crate::types::{ServiceResponse, ServiceUpsert};

impl RentalClient {
    pub async fn list_services(&self) -> Result<Vec<ServiceResponse>, Error> {
        self.get("services").await
    }

    pub async fn get_service(&self, id: i64) -> Result<ServiceResponse, Error> {
        self.get(&format!("services/{id}")).await
    }

    pub async fn create_service(&self, body: &ServiceUpsert) -> Result<ServiceResponse, Error> {
        self.post("services", body).await
    }

    pub async fn update_service(
        &self,
        id: i64,
        body: &ServiceUpsert,
    ) -> Result<ServiceResponse, Error> {
        self.put(&format!("services/{id}"), body).await
    }

    pub async fn delete_service(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("services/{id}")).await
    }
}
