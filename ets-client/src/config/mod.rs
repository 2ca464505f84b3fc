use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use config::ConfigError;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

/// Issuer code of the e-document integrator the account belongs to.
///
/// Deserialisation goes through [`FromStr`], so config files and env vars
/// accept the code in any case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Integrator {
    /// Uyumsoft.
    #[default]
    Uym,
    Uyk,
    Izi,
    Dgn,
    Mys,
}

impl Integrator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Integrator::Uym => "UYM",
            Integrator::Uyk => "UYK",
            Integrator::Izi => "IZI",
            Integrator::Dgn => "DGN",
            Integrator::Mys => "MYS",
        }
    }
}

impl fmt::Display for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Integrator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UYM" => Ok(Integrator::Uym),
            "UYK" => Ok(Integrator::Uyk),
            "IZI" => Ok(Integrator::Izi),
            "DGN" => Ok(Integrator::Dgn),
            "MYS" => Ok(Integrator::Mys),
            other => Err(ConfigError::Message(format!(
                "unknown integrator code '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Integrator {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EtsSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub integrator: Integrator,
    #[serde(default = "default_software_id")]
    pub software_id: String,
    /// Whole-request timeout applied by the HTTP transport.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://ets-test.bulutix.com".to_string()
}

fn default_software_id() -> String {
    "ETS-CLIENT".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for EtsSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            integrator: Integrator::default(),
            software_id: default_software_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EtsSettings {
    /// Load from an optional `ets.{yaml,toml,json}` file and `ETS__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        ets_core::config::load_layered("ets", "ETS")
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_integrator(mut self, integrator: Integrator) -> Self {
        self.integrator = integrator;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Account credentials exchanged for an EtsToken.
#[derive(Debug, Deserialize, Clone)]
pub struct EtsCredentials {
    /// VKN or TCKN of the account holder.
    pub party_id: String,
    pub username: String,
    pub password: Secret<String>,
}

impl EtsCredentials {
    pub fn new(
        party_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            party_id: party_id.into(),
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }

    /// Read `ETS_PARTY_ID`, `ETS_USERNAME` and `ETS_PASSWORD`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let var = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::NotFound(name.to_string()))
        };

        Ok(Self::new(
            var("ETS_PARTY_ID")?,
            var("ETS_USERNAME")?,
            var("ETS_PASSWORD")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let settings = EtsSettings::default();
        assert_eq!(settings.base_url, "https://ets-test.bulutix.com");
        assert_eq!(settings.integrator, Integrator::Uym);
        assert_eq!(settings.software_id, "ETS-CLIENT");
        assert_eq!(settings.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_integrator_codes() {
        assert_eq!("uyk".parse::<Integrator>().unwrap(), Integrator::Uyk);
        assert_eq!(Integrator::Dgn.to_string(), "DGN");
        assert_eq!(
            serde_json::to_value(Integrator::Mys).unwrap(),
            serde_json::json!("MYS")
        );
        assert!("XYZ".parse::<Integrator>().is_err());
    }

    #[test]
    fn test_integrator_deserialises_like_from_str() {
        let lower: Integrator = serde_json::from_value(serde_json::json!("izi")).unwrap();
        assert_eq!(lower, Integrator::Izi);
        assert!(serde_json::from_value::<Integrator>(serde_json::json!("XYZ")).is_err());
    }

    #[test]
    #[serial]
    fn test_load_lowercase_integrator_from_env() {
        std::env::set_var("ETS__INTEGRATOR", "izi");
        let settings = EtsSettings::load();
        std::env::remove_var("ETS__INTEGRATOR");

        assert_eq!(settings.unwrap().integrator, Integrator::Izi);
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        std::env::set_var("ETS__BASE_URL", "https://ets.bulutix.com");
        std::env::set_var("ETS__INTEGRATOR", "IZI");
        let settings = EtsSettings::load();
        std::env::remove_var("ETS__BASE_URL");
        std::env::remove_var("ETS__INTEGRATOR");

        let settings = settings.unwrap();
        assert_eq!(settings.base_url, "https://ets.bulutix.com");
        assert_eq!(settings.integrator, Integrator::Izi);
        assert_eq!(settings.software_id, "ETS-CLIENT");
    }

    #[test]
    #[serial]
    fn test_credentials_from_env() {
        std::env::set_var("ETS_PARTY_ID", "1234567890");
        std::env::set_var("ETS_USERNAME", "user");
        std::env::set_var("ETS_PASSWORD", "pass");
        let credentials = EtsCredentials::from_env().unwrap();

        assert_eq!(credentials.party_id, "1234567890");
        assert_eq!(credentials.password.expose_secret(), "pass");
        assert!(!format!("{:?}", credentials).contains("pass\""));

        std::env::remove_var("ETS_PASSWORD");
        let err = EtsCredentials::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(name) if name == "ETS_PASSWORD"));

        std::env::remove_var("ETS_PARTY_ID");
        std::env::remove_var("ETS_USERNAME");
    }
}
