//! E-SMM (freelance receipt) operations.

use crate::client::EtsClient;
use crate::envelope::decode_data;
use crate::error::EtsError;
use crate::models::{DocumentStatus, InvoiceResult, VoucherRequest};
use crate::transport::Transport;

use super::segment;

impl<T: Transport> EtsClient<T> {
    pub async fn send_voucher(&self, request: &VoucherRequest) -> Result<InvoiceResult, EtsError> {
        let data = self.post("/voucher", request).await?;
        Ok(decode_data(data, "send_voucher"))
    }

    pub async fn get_voucher_status(&self, uuid: &str) -> Result<DocumentStatus, EtsError> {
        let data = self
            .get(&format!("/voucher/{}/status", segment(uuid)))
            .await?;
        Ok(decode_data(data, "get_voucher_status"))
    }
}
