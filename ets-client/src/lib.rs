//! ets-client: Typed async client for the ETS e-document REST API.
//!
//! ```ignore
//! use ets_client::{EtsClient, EtsCredentials, EtsSettings};
//!
//! let mut client = EtsClient::new(EtsSettings::load()?)?;
//! client.authenticate(&EtsCredentials::from_env()?).await?;
//! let active = client.check_e_invoice_user("1234567890").await?;
//! ```
pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{EtsClient, EtsToken, TOKEN_FIELD};
pub use config::{EtsCredentials, EtsSettings, Integrator};
pub use error::{EtsError, TransportError};
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
