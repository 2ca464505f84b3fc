//! Parties, lines and totals shared by every document type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    /// District (ilce).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_subdivision_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_zone: Option<String>,
}

/// Natural person details, required when the party is identified by a TCKN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    pub first_name: String,
    pub family_name: String,
}

/// Supplier or customer of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Party {
    /// VKN (10 digits) or TCKN (11 digits).
    pub party_identification: String,
    pub party_name: String,
    /// Tax office name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_tax_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tax {
    /// GIB tax code, e.g. `0015` for KDV.
    pub tax_code: String,
    pub tax_name: String,
    pub percent: Decimal,
    pub tax_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_reason_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentLine {
    pub item_code: String,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub invoiced_quantity: Decimal,
    /// UN/ECE unit code, e.g. `C62` (piece) or `KGM`.
    pub iso_unit_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_extension_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<Tax>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegalMonetaryTotal {
    pub line_extension_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exclusive_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_inclusive_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowance_total_amount: Option<Decimal>,
    pub payable_amount: Decimal,
}

/// Receiving mailbox for e-invoice and e-dispatch delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetCustomer {
    pub party_name: String,
    pub party_identification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}
