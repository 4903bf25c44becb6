//! Payment-receiver endpoints.

use crate::Error;
use crate::client::RentalClient;
use crate::types::{ReceiverResponse, ReceiverUpsert};

impl RentalClient {
    pub async fn list_receivers(&self) -> Result<Vec<ReceiverResponse>, Error> {
        self.get("receivers").await
    }

    pub async fn get_receiver(&self, id: i64) -> Result<ReceiverResponse, Error> {
        self.get(&format!("receivers/{id}")).await
    }

    pub async fn create_receiver(&self, body: &ReceiverUpsert) -> Result<ReceiverResponse, Error> {
        self.post("receivers", body).await
    }

    pub async fn update_receiver(
        &self,
        id: i64,
        body: &ReceiverUpsert,
    ) -> Result<ReceiverResponse, Error> {
        self.put(&format!("receivers/{id}"), body).await
    }

    pub async fn delete_receiver(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("receivers/{id}")).await
    }
}
