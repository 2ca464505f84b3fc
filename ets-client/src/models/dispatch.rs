//! E-Irsaliye dispatch notes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::party::{DocumentLine, Party, TargetCustomer};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dispatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch_id: Option<String>,
    /// TEMELIRSALIYE.
    pub profile_id: String,
    pub issue_date: NaiveDate,
    /// SEVK or MATBUDAN.
    pub dispatch_type_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub supplier_party: Party,
    pub customer_party: Party,
    pub document_lines: Vec<DocumentLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DispatchRequest {
    pub dispatch: Dispatch,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_customer: Option<TargetCustomer>,
}

impl DispatchRequest {
    pub fn new(dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            target_customer: None,
        }
    }

    pub fn with_target_customer(mut self, target: TargetCustomer) -> Self {
        self.target_customer = Some(target);
        self
    }
}
