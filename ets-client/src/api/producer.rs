//! E-Mustahsil operations.

use serde::Serialize;

use crate::client::EtsClient;
use crate::envelope::{decode_data, decode_list};
use crate::error::EtsError;
use crate::models::{DocumentStatus, InvoiceResult, ProducerReceiptRequest};
use crate::transport::Transport;

use super::segment;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct BatchReceipts<'a> {
    receipts: &'a [ProducerReceiptRequest],
}

impl<T: Transport> EtsClient<T> {
    pub async fn send_producer_receipt(
        &self,
        request: &ProducerReceiptRequest,
    ) -> Result<InvoiceResult, EtsError> {
        let data = self.post("/producer", request).await?;
        Ok(decode_data(data, "send_producer_receipt"))
    }

    pub async fn send_producer_receipts(
        &self,
        requests: &[ProducerReceiptRequest],
    ) -> Result<Vec<InvoiceResult>, EtsError> {
        let data = self
            .post("/producer/batch", &BatchReceipts { receipts: requests })
            .await?;
        Ok(decode_list(data, "send_producer_receipts"))
    }

    pub async fn get_producer_receipt_status(&self, uuid: &str) -> Result<DocumentStatus, EtsError> {
        let data = self
            .get(&format!("/producer/{}/status", segment(uuid)))
            .await?;
        Ok(decode_data(data, "get_producer_receipt_status"))
    }
}
