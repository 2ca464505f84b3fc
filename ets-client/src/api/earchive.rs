//! E-Arsiv operations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::client::EtsClient;
use crate::envelope::{decode_data, decode_list};
use crate::error::EtsError;
use crate::models::{
    ArchiveInfo, CancelResult, DocumentStatus, InvoiceListItem, InvoiceListQuery, InvoiceRequest,
    InvoiceResult, PdfResult,
};
use crate::transport::Transport;

use super::segment;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct BatchInvoices<'a> {
    invoices: &'a [InvoiceRequest],
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CancelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    cancel_date: Option<NaiveDate>,
}

/// E-archive sends always carry `ArchiveInfo`; paper delivery unless told otherwise.
fn with_archive_info(request: &InvoiceRequest) -> InvoiceRequest {
    let mut request = request.clone();
    request.archive_info.get_or_insert_with(ArchiveInfo::default);
    request
}

impl<T: Transport> EtsClient<T> {
    pub async fn send_e_archive_invoice(
        &self,
        request: &InvoiceRequest,
    ) -> Result<InvoiceResult, EtsError> {
        let data = self.post("/earchive", &with_archive_info(request)).await?;
        let result: InvoiceResult = decode_data(data, "send_e_archive_invoice");
        tracing::info!(uuid = ?result.uuid, invoice_number = ?result.invoice_number, "E-archive invoice sent");
        Ok(result)
    }

    /// Send several e-archive invoices in one call. Results come back in request order.
    pub async fn send_e_archive_invoices(
        &self,
        requests: &[InvoiceRequest],
    ) -> Result<Vec<InvoiceResult>, EtsError> {
        let invoices: Vec<InvoiceRequest> = requests.iter().map(with_archive_info).collect();
        let data = self
            .post("/earchive/batch", &BatchInvoices { invoices: &invoices })
            .await?;
        Ok(decode_list(data, "send_e_archive_invoices"))
    }

    pub async fn get_e_archive_status(&self, uuid: &str) -> Result<DocumentStatus, EtsError> {
        let data = self
            .get(&format!("/earchive/{}/status", segment(uuid)))
            .await?;
        Ok(decode_data(data, "get_e_archive_status"))
    }

    /// Cancel an e-archive invoice, optionally back-dated to `cancel_date`.
    pub async fn cancel_e_archive(
        &self,
        uuid: &str,
        cancel_date: Option<NaiveDate>,
    ) -> Result<CancelResult, EtsError> {
        let data = self
            .post(
                &format!("/earchive/{}/cancel", segment(uuid)),
                &CancelRequest { cancel_date },
            )
            .await?;
        Ok(decode_data(data, "cancel_e_archive"))
    }

    pub async fn get_e_archive_pdf(&self, uuid: &str) -> Result<PdfResult, EtsError> {
        let data = self.get(&format!("/earchive/{}/pdf", segment(uuid))).await?;
        Ok(decode_data(data, "get_e_archive_pdf"))
    }

    pub async fn get_e_archive_list(
        &self,
        query: &InvoiceListQuery,
    ) -> Result<Vec<InvoiceListItem>, EtsError> {
        let data = self.post("/earchive/list", query).await?;
        Ok(decode_list(data, "get_e_archive_list"))
    }
}
