use crate::utils::exchange_factory::ExchangeType;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer};
use std::env;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials and connection settings for one exchange client.
///
/// Secrets are wrapped in [`Secret`] and redacted from `Debug` output.
/// The config is never serialized.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub exchange_type: ExchangeType,
    pub access_key: Secret<String>,
    pub secret_key: Secret<String>,
    pub server_url: Option<String>,
    pub timeout: Duration,
}

impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            exchange: String,
            access_key: String,
            secret_key: String,
            server_url: Option<String>,
            timeout_secs: Option<u64>,
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        let exchange_type = helper
            .exchange
            .parse::<ExchangeType>()
            .map_err(serde::de::Error::custom)?;

        Ok(Self {
            exchange_type,
            access_key: Secret::new(helper.access_key),
            secret_key: Secret::new(helper.secret_key),
            server_url: helper.server_url,
            timeout: helper
                .timeout_secs
                .map_or(DEFAULT_TIMEOUT, Duration::from_secs),
        })
    }
}

impl ExchangeConfig {
    /// Create a new configuration with API credentials
    #[must_use]
    pub fn new(exchange_type: ExchangeType, access_key: String, secret_key: String) -> Self {
        Self {
            exchange_type,
            access_key: Secret::new(access_key),
            secret_key: Secret::new(secret_key),
            server_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Configuration for public market data only. Private calls made with it
    /// fail with a credential error.
    #[must_use]
    pub fn read_only(exchange_type: ExchangeType) -> Self {
        Self::new(exchange_type, String::new(), String::new())
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_ACCESS_KEY`
    /// - `{PREFIX}_SECRET_KEY`
    /// - `{PREFIX}_EXCHANGE` (optional, defaults to the prefix itself)
    /// - `{PREFIX}_SERVER_URL` (optional)
    /// - `{PREFIX}_TIMEOUT_SECS` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let access_key_var = format!("{}_ACCESS_KEY", prefix);
        let secret_key_var = format!("{}_SECRET_KEY", prefix);

        let exchange_type = env::var(format!("{}_EXCHANGE", prefix))
            .unwrap_or_else(|_| prefix.clone())
            .parse::<ExchangeType>()?;

        let access_key = env::var(&access_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(access_key_var))?;
        let secret_key = env::var(&secret_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(secret_key_var))?;

        let timeout = match env::var(format!("{}_TIMEOUT_SECS", prefix)) {
            Ok(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                ConfigError::InvalidConfiguration(format!(
                    "{}_TIMEOUT_SECS must be a whole number of seconds: {}",
                    prefix, e
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            exchange_type,
            access_key: Secret::new(access_key),
            secret_key: Secret::new(secret_key),
            server_url: env::var(format!("{}_SERVER_URL", prefix)).ok(),
            timeout,
        })
    }

    /// Create configuration from a .env file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            // A missing file just means we rely on the process environment
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Check if this configuration has credentials for authenticated operations
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.access_key.expose_secret().is_empty() && !self.secret_key.expose_secret().is_empty()
    }

    /// Override the base server URL
    #[must_use]
    pub fn server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = Some(server_url.into());
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get access key (use carefully - exposes secret)
    pub fn access_key(&self) -> &str {
        self.access_key.expose_secret()
    }

    /// Get secret key (use carefully - exposes secret)
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unsupported exchange type: {0}")]
    UnsupportedExchange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_secrets() {
        let config = ExchangeConfig::new(
            ExchangeType::Upbit,
            "visible-access".to_string(),
            "very-secret".to_string(),
        );
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("visible-access"));
        assert!(!rendered.contains("very-secret"));
    }

    #[test]
    fn read_only_has_no_credentials() {
        let config = ExchangeConfig::read_only(ExchangeType::Bithumb);
        assert!(!config.has_credentials());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn deserialize_wraps_secrets_and_parses_exchange() {
        let json = r#"{
            "exchange": "Bithumb",
            "access_key": "ak",
            "secret_key": "sk",
            "timeout_secs": 5
        }"#;
        let config: ExchangeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.exchange_type, ExchangeType::Bithumb);
        assert_eq!(config.access_key(), "ak");
        assert_eq!(config.secret_key(), "sk");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.server_url.is_none());
    }

    #[test]
    fn deserialize_rejects_unknown_exchange() {
        let json = r#"{"exchange": "coinone", "access_key": "a", "secret_key": "b"}"#;
        let err = serde_json::from_str::<ExchangeConfig>(json).unwrap_err();
        assert!(err.to_string().contains("coinone"));
    }

    #[test]
    fn from_env_reads_prefixed_variables() {
        env::set_var("KXCFGTEST_EXCHANGE", "upbit");
        env::set_var("KXCFGTEST_ACCESS_KEY", "env-access");
        env::set_var("KXCFGTEST_SECRET_KEY", "env-secret");
        env::set_var("KXCFGTEST_SERVER_URL", "http://localhost:9999");
        env::set_var("KXCFGTEST_TIMEOUT_SECS", "7");

        let config = ExchangeConfig::from_env("kxcfgtest").unwrap();
        assert_eq!(config.exchange_type, ExchangeType::Upbit);
        assert_eq!(config.access_key(), "env-access");
        assert_eq!(config.server_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn from_env_uses_prefix_as_exchange_name() {
        env::remove_var("BITHUMB_EXCHANGE");
        env::set_var("BITHUMB_ACCESS_KEY", "a");
        env::set_var("BITHUMB_SECRET_KEY", "b");

        let config = ExchangeConfig::from_env("bithumb").unwrap();
        assert_eq!(config.exchange_type, ExchangeType::Bithumb);
    }

    #[test]
    fn from_env_reports_missing_keys() {
        env::set_var("KXMISSING_EXCHANGE", "upbit");
        let err = ExchangeConfig::from_env("KXMISSING").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingEnvironmentVariable(ref var) if var == "KXMISSING_ACCESS_KEY"
        ));
    }

    #[test]
    fn from_env_rejects_bad_timeout() {
        env::set_var("KXBADTIMEOUT_EXCHANGE", "upbit");
        env::set_var("KXBADTIMEOUT_ACCESS_KEY", "a");
        env::set_var("KXBADTIMEOUT_SECRET_KEY", "b");
        env::set_var("KXBADTIMEOUT_TIMEOUT_SECS", "soon");

        let err = ExchangeConfig::from_env("KXBADTIMEOUT").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration(_)));
    }
}
