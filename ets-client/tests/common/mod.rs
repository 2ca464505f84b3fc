//! Shared fixtures for ets-client integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use ets_client::models::{
    Address, DocumentLine, Invoice, LegalMonetaryTotal, Party, Tax,
};
use ets_client::{EtsClient, EtsSettings};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "tok-123";
pub const SUPPLIER_VKN: &str = "1234567890";
pub const CUSTOMER_VKN: &str = "9876543210";

pub struct TestServer {
    pub server: MockServer,
    pub client: EtsClient,
}

impl TestServer {
    /// Mock ETS server plus a client pointed at it, without a token.
    pub async fn spawn() -> Self {
        let server = MockServer::start().await;
        let settings = EtsSettings::default().with_base_url(server.uri());
        let client = EtsClient::new(settings).expect("Failed to build client");

        Self { server, client }
    }

    /// Same as [`spawn`](Self::spawn) with [`TEST_TOKEN`] already installed.
    pub async fn authenticated() -> Self {
        let mut app = Self::spawn().await;
        app.client.set_token(TEST_TOKEN);
        app
    }

    pub async fn requests(&self) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is disabled")
    }

    pub async fn last_body(&self) -> Value {
        let requests = self.requests().await;
        let last = requests.last().expect("No request received");
        serde_json::from_slice(&last.body).expect("Request body is not JSON")
    }

    pub async fn last_query(&self) -> Option<String> {
        let requests = self.requests().await;
        let last = requests.last().expect("No request received");
        last.url.query().map(|q| q.to_string())
    }
}

/// `success=true` envelope around `data`.
pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

/// `success=false` envelope with `message`, sent with `status`.
pub fn failed(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "success": false,
        "message": message,
        "data": null
    }))
}

pub fn party(vkn: &str, name: &str) -> Party {
    Party {
        party_identification: vkn.to_string(),
        party_name: name.to_string(),
        party_tax_scheme: Some("Kadikoy".to_string()),
        address: Some(Address {
            country: Some("Turkiye".to_string()),
            city_name: Some("Istanbul".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// One-line 20% KDV invoice for 100.00 TRY.
pub fn sample_invoice(profile_id: &str) -> Invoice {
    let kdv = Tax {
        tax_code: "0015".to_string(),
        tax_name: "KDV".to_string(),
        percent: Decimal::new(20, 0),
        tax_amount: Decimal::new(20, 0),
        ..Default::default()
    };

    Invoice {
        invoice_type_code: "SATIS".to_string(),
        profile_id: profile_id.to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        document_currency_code: Some("TRY".to_string()),
        notes: vec!["Test faturasidir".to_string()],
        supplier_party: party(SUPPLIER_VKN, "Satici A.S."),
        customer_party: party(CUSTOMER_VKN, "Alici Ltd."),
        document_lines: vec![DocumentLine {
            item_code: "URN001".to_string(),
            item_name: "Test Urun".to_string(),
            invoiced_quantity: Decimal::new(1, 0),
            iso_unit_code: "C62".to_string(),
            price: Decimal::new(100, 0),
            line_extension_amount: Some(Decimal::new(100, 0)),
            taxes: vec![kdv.clone()],
            ..Default::default()
        }],
        legal_monetary_total: LegalMonetaryTotal {
            line_extension_amount: Decimal::new(100, 0),
            tax_exclusive_amount: Some(Decimal::new(100, 0)),
            tax_inclusive_amount: Some(Decimal::new(120, 0)),
            payable_amount: Decimal::new(120, 0),
            ..Default::default()
        },
        tax_totals: vec![kdv],
        ..Default::default()
    }
}
