//! Invoice / payment endpoints.

use crate::Error;
use crate::client::RentalClient;
use crate::types::{InvoicePaymentResponse, InvoicePaymentUpsert};

impl RentalClient {
    pub async fn list_invoice_payments(&self) -> Result<Vec<InvoicePaymentResponse>, Error> {
        self.get("invoice-payments").await
    }

    /// Invoices scoped to one home contract.
    pub async fn list_invoice_payments_for_contract(
        &self,
        home_contract_id: i64,
    ) -> Result<Vec<InvoicePaymentResponse>, Error> {
        self.get_with_params(
            "invoice-payments",
            &[("homeContractId", home_contract_id.to_string())],
        )
        .await
    }

    pub async fn get_invoice_payment(&self, id: i64) -> Result<InvoicePaymentResponse, Error> {
        self.get(&format!("invoice-payments/{id}")).await
    }

    pub async fn create_invoice_payment(
        &self,
        body: &InvoicePaymentUpsert,
    ) -> Result<InvoicePaymentResponse, Error> {
        self.post("invoice-payments", body).await
    }

    pub async fn update_invoice_payment(
        &self,
        id: i64,
        body: &InvoicePaymentUpsert,
    ) -> Result<InvoicePaymentResponse, Error> {
        self.put(&format!("invoice-payments/{id}"), body).await
    }

    pub async fn delete_invoice_payment(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("invoice-payments/{id}")).await
    }
}
