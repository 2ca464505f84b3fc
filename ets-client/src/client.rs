//! `EtsClient`: token state plus the two request helpers every operation uses.

use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::{Method, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::config::{EtsCredentials, EtsSettings};
use crate::envelope::unwrap_envelope;
use crate::error::EtsError;
use crate::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

/// Field and query parameter name the token travels under.
pub const TOKEN_FIELD: &str = "EtsToken";

pub const AUTH_PATH: &str = "/auth/token";

/// Bearer credential returned by `/auth/token`. Redacted in `Debug`.
#[derive(Clone)]
pub struct EtsToken(Secret<String>);

impl EtsToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for EtsToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EtsToken([REDACTED])")
    }
}

impl PartialEq for EtsToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl From<String> for EtsToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for EtsToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct AuthRequest<'a> {
    party_identification_id: &'a str,
    username: &'a str,
    password: &'a str,
    software_id: &'a str,
    integrator: &'a str,
}

/// Append `EtsToken=<token>` to an endpoint, respecting an existing query string.
pub(crate) fn with_token_query(endpoint: &str, token: Option<&EtsToken>) -> String {
    match token {
        Some(token) => {
            let separator = if endpoint.contains('?') { '&' } else { '?' };
            format!(
                "{}{}{}={}",
                endpoint,
                separator,
                TOKEN_FIELD,
                urlencoding::encode(token.expose())
            )
        }
        None => endpoint.to_string(),
    }
}

/// Serialise `body` to a JSON object and set the token field on it.
/// Anything that is not an object becomes `{}` first.
pub(crate) fn with_token_field<B>(body: &B, token: Option<&EtsToken>) -> Result<Value, EtsError>
where
    B: Serialize + ?Sized,
{
    let mut object = match serde_json::to_value(body).map_err(EtsError::Encode)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let token = token.map_or(Value::Null, |t| Value::String(t.expose().to_string()));
    object.insert(TOKEN_FIELD.to_string(), token);

    Ok(Value::Object(object))
}

/// Client for the ETS REST API.
///
/// Remote operations borrow the client immutably, while installing a token
/// (`authenticate`, `set_token`, `clear_token`) needs `&mut self`. A token can
/// therefore never change underneath an in-flight call.
pub struct EtsClient<T = HttpTransport> {
    settings: EtsSettings,
    base_url: String,
    transport: T,
    token: Option<EtsToken>,
}

impl EtsClient<HttpTransport> {
    /// Build a client backed by reqwest, using the settings' timeout.
    pub fn new(settings: EtsSettings) -> Result<Self, EtsError> {
        let transport = HttpTransport::new(settings.timeout())?;
        Self::with_transport(settings, transport)
    }
}

impl<T: Transport> EtsClient<T> {
    pub fn with_transport(settings: EtsSettings, transport: T) -> Result<Self, EtsError> {
        Url::parse(&settings.base_url)
            .map_err(|e| EtsError::InvalidUrl(format!("{}: {}", settings.base_url, e)))?;

        let base_url = settings.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            settings,
            base_url,
            transport,
            token: None,
        })
    }

    pub fn settings(&self) -> &EtsSettings {
        &self.settings
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn token(&self) -> Option<&EtsToken> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Install a token obtained elsewhere, e.g. from a previous session.
    pub fn set_token(&mut self, token: impl Into<EtsToken>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Exchange credentials for an EtsToken and keep it for later calls.
    ///
    /// The software id and integrator code come from the client settings. On
    /// failure the previously stored token, if any, is left untouched.
    pub async fn authenticate(&mut self, credentials: &EtsCredentials) -> Result<EtsToken, EtsError> {
        let request = AuthRequest {
            party_identification_id: &credentials.party_id,
            username: &credentials.username,
            password: credentials.password.expose_secret(),
            software_id: &self.settings.software_id,
            integrator: self.settings.integrator.as_str(),
        };
        let body = serde_json::to_value(&request).map_err(EtsError::Encode)?;

        let response = self.send(Method::POST, AUTH_PATH, Some(body)).await?;

        let data = unwrap_envelope(response).map_err(|e| match e {
            EtsError::Api { message } => EtsError::Authentication(message),
            other => other,
        })?;

        let token = data
            .as_ref()
            .and_then(|d| d.get("token").or_else(|| d.get("etsToken")))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(EtsToken::new)
            .ok_or_else(|| {
                EtsError::Authentication("token missing from authentication response".to_string())
            })?;

        tracing::info!(
            party_id = %credentials.party_id,
            integrator = %self.settings.integrator,
            "Authenticated against ETS"
        );

        self.token = Some(token.clone());
        Ok(token)
    }

    /// GET `endpoint` with the token appended as a query parameter.
    pub(crate) async fn get(&self, endpoint: &str) -> Result<Option<Value>, EtsError> {
        let endpoint = with_token_query(endpoint, self.token.as_ref());
        let response = self.send(Method::GET, &endpoint, None).await?;
        unwrap_envelope(response)
    }

    /// POST `body` to `endpoint` with the token merged in under `EtsToken`.
    pub(crate) async fn post<B>(&self, endpoint: &str, body: &B) -> Result<Option<Value>, EtsError>
    where
        B: Serialize + ?Sized,
    {
        let body = with_token_field(body, self.token.as_ref())?;
        let response = self.send(Method::POST, endpoint, Some(body)).await?;
        unwrap_envelope(response)
    }

    pub(crate) async fn post_empty(&self, endpoint: &str) -> Result<Option<Value>, EtsError> {
        self.post(endpoint, &json!({})).await
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<TransportResponse, EtsError> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!(
            method = %method,
            path = %crate::transport::loggable_url(endpoint),
            "Sending ETS request"
        );

        let response = self
            .transport
            .send(TransportRequest {
                method,
                url,
                headers: HeaderMap::new(),
                body,
            })
            .await?;

        Ok(response)
    }
}
