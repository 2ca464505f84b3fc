use config::{Config, ConfigError, Environment, File};
use serde::de::DeserializeOwned;

/// Load settings layered as: struct defaults, an optional `<file_stem>.{yaml,toml,json}`
/// file, then `<PREFIX>__<KEY>` environment variables (nested keys use `__`).
///
/// A `.env` file in the working directory is read first when present.
pub fn load_layered<T: DeserializeOwned>(file_stem: &str, env_prefix: &str) -> Result<T, ConfigError> {
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .add_source(File::with_name(file_stem).required(false))
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serial_test::serial;
    use std::io::Write;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default = "default_name")]
        name: String,
        #[serde(default)]
        retries: u32,
    }

    fn default_name() -> String {
        "fallback".to_string()
    }

    #[test]
    #[serial]
    fn missing_file_and_env_uses_defaults() {
        let sample: Sample = load_layered("does-not-exist", "ETSCORE_NONE").unwrap();
        assert_eq!(sample.name, "fallback");
        assert_eq!(sample.retries, 0);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "name = \"from-file\"\nretries = 2").unwrap();

        let stem = dir.path().join("sample");
        let stem = stem.to_str().unwrap();

        let sample: Sample = load_layered(stem, "ETSCORE_LAYER").unwrap();
        assert_eq!(sample.name, "from-file");
        assert_eq!(sample.retries, 2);

        std::env::set_var("ETSCORE_LAYER__NAME", "from-env");
        let sample: Sample = load_layered(stem, "ETSCORE_LAYER").unwrap();
        std::env::remove_var("ETSCORE_LAYER__NAME");

        assert_eq!(sample.name, "from-env");
        assert_eq!(sample.retries, 2);
    }
}
