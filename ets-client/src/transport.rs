//! The HTTP seam. [`EtsClient`](crate::EtsClient) only ever talks to a
//! [`Transport`]; [`HttpTransport`] is the reqwest-backed default.

use std::time::Duration;

use async_trait::async_trait;
use ets_core::observability::{extract_request_id, inject_request_id};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::Instrument;

use crate::error::TransportError;

#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    /// Absolute URL, query string included.
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// Strip the query string, which carries the token on GET calls.
pub(crate) fn loggable_url(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client (proxies, TLS roots, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let TransportRequest {
            method,
            url,
            mut headers,
            body,
        } = request;

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let request_id = inject_request_id(&mut headers, None);

        let span = tracing::debug_span!(
            "ets_http",
            request_id = %request_id,
            method = %method,
            url = %loggable_url(&url),
        );

        async move {
            let mut builder = self.client.request(method, &url).headers(headers);
            if let Some(body) = &body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(http_failure("send"))?;

            let status = response.status();
            let server_request_id = extract_request_id(response.headers());
            let body = response.text().await.map_err(http_failure("read body"))?;

            tracing::debug!(
                status = %status,
                server_request_id = server_request_id.as_deref().unwrap_or("-"),
                "ETS HTTP response received"
            );

            Ok::<_, TransportError>(TransportResponse { status, body })
        }
        .instrument(span)
        .await
    }
}

/// Log a reqwest failure at `stage` and wrap it.
fn http_failure(stage: &'static str) -> impl Fn(reqwest::Error) -> TransportError {
    move |e| {
        tracing::error!(stage, error = %e, "ETS HTTP request failed");
        TransportError::Http(e)
    }
}
