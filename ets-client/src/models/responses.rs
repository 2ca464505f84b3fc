//! Payloads found in the `data` field of successful envelopes.
//!
//! Every field defaults, so missing or null values come back empty. A field
//! of the wrong type reads as absent without disturbing its neighbours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient::{lenient, lenient_list, lenient_string};

/// Outcome of a document send or an invoice reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceResult {
    #[serde(deserialize_with = "lenient_string")]
    pub uuid: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub invoice_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub code: Option<String>,
}

/// Processing state of any sent document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentStatus {
    #[serde(deserialize_with = "lenient_string")]
    pub uuid: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub invoice_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub status_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCheckResult {
    #[serde(deserialize_with = "lenient_string")]
    pub party_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAlias {
    #[serde(deserialize_with = "lenient")]
    pub alias: String,
    #[serde(deserialize_with = "lenient_string")]
    pub creation_time: Option<String>,
}

/// Registered sender (GB) and receiver (PK) mailboxes of a party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAliasResult {
    #[serde(deserialize_with = "lenient_string")]
    pub party_identification_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub user_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub register_time: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub senderbox_aliases: Vec<UserAlias>,
    #[serde(deserialize_with = "lenient_list")]
    pub receiverbox_aliases: Vec<UserAlias>,
}

impl UserAliasResult {
    /// Every alias, sender boxes first.
    pub fn all_aliases(&self) -> impl Iterator<Item = &str> {
        self.senderbox_aliases
            .iter()
            .chain(self.receiverbox_aliases.iter())
            .map(|a| a.alias.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExchangeRate {
    #[serde(deserialize_with = "lenient")]
    pub currency: String,
    #[serde(deserialize_with = "lenient")]
    pub rate: Option<Decimal>,
    #[serde(deserialize_with = "lenient")]
    pub buying_rate: Option<Decimal>,
    #[serde(deserialize_with = "lenient")]
    pub selling_rate: Option<Decimal>,
    #[serde(deserialize_with = "lenient")]
    pub effective_rate: Option<Decimal>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceListItem {
    #[serde(deserialize_with = "lenient_string")]
    pub uuid: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub invoice_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub issue_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub customer_tax_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub payable_amount: Option<Decimal>,
    #[serde(deserialize_with = "lenient_string")]
    pub currency_code: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfResult {
    /// Base64 encoded PDF.
    #[serde(deserialize_with = "lenient_string")]
    pub pdf_content: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelResult {
    #[serde(deserialize_with = "lenient")]
    pub success: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub message: Option<String>,
}
