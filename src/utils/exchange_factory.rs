use crate::core::config::{ConfigError, ExchangeConfig};
use crate::core::errors::ExchangeError;
use crate::core::traits::ExchangeConnector;
use crate::exchanges::{bithumb, upbit};
use std::fmt;
use std::str::FromStr;

/// Supported exchange types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeType {
    Upbit,
    Bithumb,
}

impl ExchangeType {
    pub const ALL: [Self; 2] = [Self::Upbit, Self::Bithumb];

    /// Lowercase identifier, as accepted by [`FromStr`]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upbit => "upbit",
            Self::Bithumb => "bithumb",
        }
    }

    pub const fn default_server_url(self) -> &'static str {
        match self {
            Self::Upbit => "https://api.upbit.com",
            Self::Bithumb => "https://api.bithumb.com",
        }
    }
}

impl fmt::Display for ExchangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upbit => write!(f, "Upbit"),
            Self::Bithumb => write!(f, "Bithumb"),
        }
    }
}

impl FromStr for ExchangeType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upbit" => Ok(Self::Upbit),
            "bithumb" => Ok(Self::Bithumb),
            _ => Err(ConfigError::UnsupportedExchange(s.to_string())),
        }
    }
}

/// Picks and builds the connector named by a config
pub struct ExchangeSelector;

impl ExchangeSelector {
    /// Build the connector for `config.exchange_type`, honouring its
    /// `server_url` override and timeout
    pub fn select(config: &ExchangeConfig) -> Result<Box<dyn ExchangeConnector>, ExchangeError> {
        match config.exchange_type {
            ExchangeType::Upbit => Ok(Box::new(upbit::build_connector(config.clone())?)),
            ExchangeType::Bithumb => Ok(Box::new(bithumb::build_connector(config.clone())?)),
        }
    }

    /// Resolve an exchange by name and build its connector. The name is checked
    /// before the credentials are touched.
    pub fn select_by_name(
        name: &str,
        access_key: String,
        secret_key: String,
    ) -> Result<Box<dyn ExchangeConnector>, ExchangeError> {
        let exchange_type = name.parse::<ExchangeType>()?;
        Self::select(&ExchangeConfig::new(exchange_type, access_key, secret_key))
    }

    pub fn available_exchanges() -> Vec<ExchangeType> {
        ExchangeType::ALL.to_vec()
    }
}
