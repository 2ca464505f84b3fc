//! E-Fatura operations.

use crate::client::EtsClient;
use crate::envelope::{decode_data, decode_list};
use crate::error::EtsError;
use crate::models::{
    DocumentStatus, InvoiceListItem, InvoiceListQuery, InvoiceRequest, InvoiceResult, PdfResult,
    RespondRequest, UserAliasResult, UserCheckResult,
};
use crate::transport::Transport;

use super::segment;

impl<T: Transport> EtsClient<T> {
    /// Whether `party_id` is a registered e-invoice user. A missing `isActive`
    /// reads as `false`.
    pub async fn check_e_invoice_user(&self, party_id: &str) -> Result<bool, EtsError> {
        let data = self
            .post_empty(&format!("/invoice/user/{}", segment(party_id)))
            .await?;
        Ok(decode_data::<UserCheckResult>(data, "check_e_invoice_user").is_active)
    }

    pub async fn get_user_aliases(&self, party_id: &str) -> Result<UserAliasResult, EtsError> {
        let data = self
            .post_empty(&format!("/invoice/user/{}/alias", segment(party_id)))
            .await?;
        Ok(decode_data(data, "get_user_aliases"))
    }

    pub async fn send_invoice(&self, request: &InvoiceRequest) -> Result<InvoiceResult, EtsError> {
        let data = self.post("/invoice", request).await?;
        let result: InvoiceResult = decode_data(data, "send_invoice");
        tracing::info!(uuid = ?result.uuid, invoice_number = ?result.invoice_number, "E-invoice sent");
        Ok(result)
    }

    /// Upload an invoice as a draft; the path alone marks it as such.
    pub async fn send_draft_invoice(
        &self,
        request: &InvoiceRequest,
    ) -> Result<InvoiceResult, EtsError> {
        let data = self.post("/invoice/draft", request).await?;
        Ok(decode_data(data, "send_draft_invoice"))
    }

    pub async fn get_invoice_status(&self, uuid: &str) -> Result<DocumentStatus, EtsError> {
        let data = self
            .get(&format!("/invoice/{}/status", segment(uuid)))
            .await?;
        Ok(decode_data(data, "get_invoice_status"))
    }

    /// Accept or reject a received commercial invoice.
    pub async fn respond_invoice(
        &self,
        uuid: &str,
        response: &RespondRequest,
    ) -> Result<InvoiceResult, EtsError> {
        let data = self
            .post(&format!("/invoice/{}/respond", segment(uuid)), response)
            .await?;
        Ok(decode_data(data, "respond_invoice"))
    }

    pub async fn get_inbox_invoices(
        &self,
        query: &InvoiceListQuery,
    ) -> Result<Vec<InvoiceListItem>, EtsError> {
        let data = self.post("/invoice/inbox", query).await?;
        Ok(decode_list(data, "get_inbox_invoices"))
    }

    pub async fn get_invoice_pdf(&self, uuid: &str) -> Result<PdfResult, EtsError> {
        let data = self.get(&format!("/invoice/{}/pdf", segment(uuid))).await?;
        Ok(decode_data(data, "get_invoice_pdf"))
    }
}
