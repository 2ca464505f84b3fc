//! E-Irsaliye operations.

use crate::client::EtsClient;
use crate::envelope::decode_data;
use crate::error::EtsError;
use crate::models::{DispatchRequest, DocumentStatus, InvoiceResult, UserAliasResult, UserCheckResult};
use crate::transport::Transport;

use super::segment;

impl<T: Transport> EtsClient<T> {
    /// Whether `party_id` is a registered e-dispatch user.
    pub async fn check_e_dispatch_user(&self, party_id: &str) -> Result<bool, EtsError> {
        let data = self
            .post_empty(&format!("/dispatch/user/{}", segment(party_id)))
            .await?;
        Ok(decode_data::<UserCheckResult>(data, "check_e_dispatch_user").is_active)
    }

    pub async fn get_dispatch_user_aliases(
        &self,
        party_id: &str,
    ) -> Result<UserAliasResult, EtsError> {
        let data = self
            .post_empty(&format!("/dispatch/user/{}/alias", segment(party_id)))
            .await?;
        Ok(decode_data(data, "get_dispatch_user_aliases"))
    }

    pub async fn send_dispatch(&self, request: &DispatchRequest) -> Result<InvoiceResult, EtsError> {
        let data = self.post("/dispatch", request).await?;
        let result: InvoiceResult = decode_data(data, "send_dispatch");
        tracing::info!(uuid = ?result.uuid, "E-dispatch sent");
        Ok(result)
    }

    pub async fn send_draft_dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<InvoiceResult, EtsError> {
        let data = self.post("/dispatch/draft", request).await?;
        Ok(decode_data(data, "send_draft_dispatch"))
    }

    pub async fn get_dispatch_status(&self, uuid: &str) -> Result<DocumentStatus, EtsError> {
        let data = self
            .get(&format!("/dispatch/{}/status", segment(uuid)))
            .await?;
        Ok(decode_data(data, "get_dispatch_status"))
    }
}
