//! E-Fatura and E-Arsiv invoice documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::party::{DocumentLine, LegalMonetaryTotal, Party, TargetCustomer, Tax};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Invoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
    /// Invoice number; the integrator assigns one when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    /// SATIS, IADE, ISTISNA, TEVKIFAT, IHRACKAYITLI, OZELMATRAH.
    pub invoice_type_code: String,
    /// TEMELFATURA, TICARIFATURA, EARSIVFATURA, IHRACAT, ...
    pub profile_id: String,
    pub issue_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub supplier_party: Party,
    pub customer_party: Party,
    pub document_lines: Vec<DocumentLine>,
    pub legal_monetary_total: LegalMonetaryTotal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tax_totals: Vec<Tax>,
}

/// How an e-archive invoice reaches the buyer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendingType {
    #[serde(rename = "ELEKTRONIK")]
    Electronic,
    #[default]
    #[serde(rename = "KAGIT")]
    Paper,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArchiveInfo {
    pub sending_type: SendingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_internet_sales: Option<bool>,
}

/// Body of every invoice send call. The client adds `EtsToken` itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceRequest {
    pub invoice: Invoice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_customer: Option<TargetCustomer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_info: Option<ArchiveInfo>,
}

impl InvoiceRequest {
    pub fn new(invoice: Invoice) -> Self {
        Self {
            invoice,
            target_customer: None,
            archive_info: None,
        }
    }

    pub fn with_target_customer(mut self, target: TargetCustomer) -> Self {
        self.target_customer = Some(target);
        self
    }

    pub fn with_archive_info(mut self, info: ArchiveInfo) -> Self {
        self.archive_info = Some(info);
        self
    }
}

/// Answer to a received commercial invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseType {
    #[serde(rename = "KABUL")]
    Accept,
    #[serde(rename = "RED")]
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RespondRequest {
    pub response_type: ResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RespondRequest {
    pub fn accept() -> Self {
        Self {
            response_type: ResponseType::Accept,
            description: None,
        }
    }

    pub fn reject(description: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Reject,
            description: Some(description.into()),
        }
    }
}

/// Date window for inbox and archive listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceListQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl InvoiceListQuery {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            page_index: None,
            page_size: None,
        }
    }

    pub fn page(mut self, index: u32, size: u32) -> Self {
        self.page_index = Some(index);
        self.page_size = Some(size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_respond_request_wire_values() {
        let accept = serde_json::to_value(RespondRequest::accept()).unwrap();
        assert_eq!(accept, json!({ "ResponseType": "KABUL" }));

        let reject = serde_json::to_value(RespondRequest::reject("Hatali tutar")).unwrap();
        assert_eq!(
            reject,
            json!({ "ResponseType": "RED", "Description": "Hatali tutar" })
        );
    }

    #[test]
    fn test_archive_info_defaults_to_paper() {
        let info = serde_json::to_value(ArchiveInfo::default()).unwrap();
        assert_eq!(info, json!({ "SendingType": "KAGIT" }));
    }

    #[test]
    fn test_list_query_dates() {
        let query = InvoiceListQuery::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .page(0, 50);

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "StartDate": "2024-01-01",
                "EndDate": "2024-01-31",
                "PageIndex": 0,
                "PageSize": 50
            })
        );
    }
}
