//! Request correlation IDs for outbound calls.

use reqwest::header::{HeaderMap, HeaderValue};
use uuid::Uuid;

/// Header name for request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Insert a request ID header, generating one when `request_id` is `None`.
///
/// Returns the ID that was written so callers can attach it to their log span.
pub fn inject_request_id(headers: &mut HeaderMap, request_id: Option<&str>) -> String {
    let request_id = request_id
        .map(|s| s.to_string())
        .unwrap_or_else(new_request_id);

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }

    request_id
}

/// Extract request ID from response or request headers.
pub fn extract_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
