use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{JwtSigner, ReqwestRest, RestClientBuilder, RestClientConfig, TokenScheme};
use crate::exchanges::upbit::connector::UpbitConnector;
use crate::utils::exchange_factory::ExchangeType;
use std::sync::Arc;

/// Builder for Upbit connectors
pub struct UpbitBuilder {
    config: ExchangeConfig,
}

impl Default for UpbitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpbitBuilder {
    /// Public market data only; set a config with keys for private endpoints
    pub fn new() -> Self {
        Self {
            config: ExchangeConfig::read_only(ExchangeType::Upbit),
        }
    }

    pub fn with_config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<UpbitConnector<ReqwestRest>, ExchangeError> {
        let base_url = self
            .config
            .server_url
            .clone()
            .unwrap_or_else(|| ExchangeType::Upbit.default_server_url().to_string());

        let rest_config =
            RestClientConfig::new(base_url, ExchangeType::Upbit.as_str().to_string())
                .with_timeout(self.config.timeout);

        let mut rest_builder = RestClientBuilder::new(rest_config);

        if self.config.has_credentials() {
            let signer = JwtSigner::new(
                self.config.access_key(),
                self.config.secret_key(),
                TokenScheme::Standard,
            )?;
            rest_builder = rest_builder.with_signer(Arc::new(signer));
        }

        Ok(UpbitConnector::new(rest_builder.build()?))
    }
}

/// Create an Upbit connector from a config
pub fn build_connector(config: ExchangeConfig) -> Result<UpbitConnector<ReqwestRest>, ExchangeError> {
    UpbitBuilder::new().with_config(config).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_without_credentials() {
        assert!(UpbitBuilder::new().build().is_ok());
    }

    #[test]
    fn builds_with_credentials_and_override() {
        let config = ExchangeConfig::new(
            ExchangeType::Upbit,
            "access".to_string(),
            "secret".to_string(),
        )
        .server_url("http://127.0.0.1:9/");
        assert!(build_connector(config).is_ok());
    }
}
