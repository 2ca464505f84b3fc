//! Exchange-rate lookups against a mock ETS server.

mod common;

use chrono::NaiveDate;
use common::{TEST_TOKEN, TestServer, ok};
use ets_client::models::ExchangeRate;
use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn get_exchange_rate_builds_query_and_returns_rate() {
    let app = TestServer::authenticated().await;

    Mock::given(method("GET"))
        .and(path("/currency/rate"))
        .and(query_param("currency", "USD"))
        .and(query_param("date", "2024-01-01"))
        .and(query_param("EtsToken", TEST_TOKEN))
        .respond_with(ok(json!({ "currency": "USD", "rate": 32.5 })))
        .expect(1)
        .mount(&app.server)
        .await;

    let rate = app
        .client
        .get_exchange_rate("USD", NaiveDate::from_ymd_opt(2024, 1, 1))
        .await
        .unwrap();

    assert_eq!(
        rate,
        ExchangeRate {
            currency: "USD".to_string(),
            rate: Some(Decimal::new(325, 1)),
            ..Default::default()
        }
    );
    assert_eq!(
        app.last_query().await.as_deref(),
        Some("currency=USD&date=2024-01-01&EtsToken=tok-123")
    );
}

#[tokio::test]
async fn get_exchange_rate_without_date() {
    let app = TestServer::authenticated().await;

    Mock::given(method("GET"))
        .and(path("/currency/rate"))
        .respond_with(ok(json!({ "Currency": "EUR", "BuyingRate": 35.1, "SellingRate": 35.2 })))
        .mount(&app.server)
        .await;

    let rate = app.client.get_exchange_rate("EUR", None).await.unwrap();

    assert_eq!(rate.currency, "EUR");
    assert_eq!(rate.selling_rate, Some(Decimal::new(352, 1)));
    assert_eq!(
        app.last_query().await.as_deref(),
        Some("currency=EUR&EtsToken=tok-123")
    );
}

#[tokio::test]
async fn get_all_exchange_rates() {
    let app = TestServer::authenticated().await;

    Mock::given(method("GET"))
        .and(path("/currency/rates"))
        .and(query_param("date", "2024-03-01"))
        .respond_with(ok(json!([
            { "currency": "USD", "effectiveRate": 31.9 },
            { "currency": "EUR", "effectiveRate": 34.6 }
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let rates = app
        .client
        .get_all_exchange_rates(NaiveDate::from_ymd_opt(2024, 3, 1))
        .await
        .unwrap();

    let currencies: Vec<&str> = rates.iter().map(|r| r.currency.as_str()).collect();
    assert_eq!(currencies, vec!["USD", "EUR"]);
    assert_eq!(rates[1].effective_rate, Some(Decimal::new(346, 1)));
}

#[tokio::test]
async fn get_exchange_rate_keeps_rate_when_currency_is_null() {
    let app = TestServer::authenticated().await;

    Mock::given(method("GET"))
        .and(path("/currency/rate"))
        .respond_with(ok(json!({ "currency": null, "rate": 32.5 })))
        .mount(&app.server)
        .await;

    let rate = app.client.get_exchange_rate("USD", None).await.unwrap();

    assert_eq!(rate.rate, Some(Decimal::new(325, 1)));
}

#[tokio::test]
async fn get_all_exchange_rates_keeps_decodable_entries() {
    let app = TestServer::authenticated().await;

    Mock::given(method("GET"))
        .and(path("/currency/rates"))
        .respond_with(ok(json!([
            { "currency": "USD", "rate": 32.5 },
            null,
            { "currency": "EUR", "rate": 35.0 }
        ])))
        .mount(&app.server)
        .await;

    let rates = app.client.get_all_exchange_rates(None).await.unwrap();

    let currencies: Vec<&str> = rates.iter().map(|r| r.currency.as_str()).collect();
    assert_eq!(currencies, vec!["USD", "EUR"]);
}
