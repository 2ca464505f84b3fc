//! The `{success, message, data}` wrapper around every ETS response.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{EtsError, TransportError};
use crate::transport::TransportResponse;

/// Response envelope. Keys are matched after [`normalize_keys`], so both
/// `success` and `Success` are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        serde_json::from_value(normalize_keys(value))
    }
}

/// Rewrite every object key to camelCase: `IsActive` becomes `isActive`,
/// `UUID` becomes `uuid`, `PDFContent` becomes `pdfContent`.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (camel_case_key(&k), normalize_keys(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

fn camel_case_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let upper_run = chars.iter().take_while(|c| c.is_ascii_uppercase()).count();

    let lower_until = match upper_run {
        0 => return key.to_string(),
        1 => 1,
        n if n == chars.len() => n,
        // Keep the last capital of an acronym prefix: it starts the next word.
        n if chars[n].is_ascii_lowercase() => n - 1,
        n => n,
    };

    chars
        .iter()
        .enumerate()
        .map(|(i, c)| if i < lower_until { c.to_ascii_lowercase() } else { *c })
        .collect()
}

/// Turn a raw response into the envelope's `data`.
///
/// A `success=false` envelope wins over the HTTP status, so the server message
/// is surfaced even on 4xx/5xx. A non-2xx response without one is a transport
/// error.
pub fn unwrap_envelope(response: TransportResponse) -> Result<Option<Value>, EtsError> {
    let parsed = Envelope::parse(&response.body);

    if let Ok(envelope) = &parsed {
        if !envelope.success {
            let message = envelope
                .message
                .clone()
                .unwrap_or_else(|| "no message provided".to_string());
            tracing::warn!(status = %response.status, message = %message, "ETS request rejected");
            return Err(EtsError::Api { message });
        }
    }

    if !response.status.is_success() {
        return Err(TransportError::Status {
            status: response.status,
            body: response.body,
        }
        .into());
    }

    parsed.map(|envelope| envelope.data).map_err(EtsError::Decode)
}

/// Decode `data` into `T`, falling back to `T::default()` when it is missing,
/// null or not an object. Single fields of the wrong type are handled by the
/// response models themselves.
pub fn decode_data<T>(data: Option<Value>, operation: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match data {
        None | Some(Value::Null) => {
            tracing::debug!(operation, "Envelope carried no data, using defaults");
            T::default()
        }
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!(operation, error = %e, "Unexpected data shape, using defaults");
            T::default()
        }),
    }
}

/// Decode a list payload item by item. Items that do not decode are dropped
/// with a warning; the rest are kept.
pub fn decode_list<T>(data: Option<Value>, operation: &str) -> Vec<T>
where
    T: DeserializeOwned,
{
    match data {
        None | Some(Value::Null) => {
            tracing::debug!(operation, "Envelope carried no data, using an empty list");
            Vec::new()
        }
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    tracing::warn!(operation, index, error = %e, "Skipping undecodable list item");
                    None
                }
            })
            .collect(),
        Some(_) => {
            tracing::warn!(operation, "Expected a list in data, using an empty list");
            Vec::new()
        }
    }
}
