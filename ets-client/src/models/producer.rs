//! E-Mustahsil producer receipts and E-SMM freelance vouchers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::party::{DocumentLine, LegalMonetaryTotal, Party};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProducerReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    pub profile_id: String,
    pub issue_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub supplier_party: Party,
    pub customer_party: Party,
    pub document_lines: Vec<DocumentLine>,
    pub legal_monetary_total: LegalMonetaryTotal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProducerReceiptRequest {
    pub producer_receipt: ProducerReceipt,
}

impl From<ProducerReceipt> for ProducerReceiptRequest {
    fn from(producer_receipt: ProducerReceipt) -> Self {
        Self { producer_receipt }
    }
}

/// Serbest meslek makbuzu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Voucher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_id: Option<String>,
    pub profile_id: String,
    pub issue_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub supplier_party: Party,
    pub customer_party: Party,
    pub document_lines: Vec<DocumentLine>,
    pub legal_monetary_total: LegalMonetaryTotal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoucherRequest {
    pub voucher: Voucher,
}

impl From<Voucher> for VoucherRequest {
    fn from(voucher: Voucher) -> Self {
        Self { voucher }
    }
}
