use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{JwtSigner, ReqwestRest, RestClientBuilder, RestClientConfig, TokenScheme};
use crate::exchanges::bithumb::connector::BithumbConnector;
use crate::utils::exchange_factory::ExchangeType;
use std::sync::Arc;

/// Endpoints whose tokens carry a timestamp but never a query hash.
pub const LEGACY_TOKEN_ENDPOINTS: [&str; 3] = [
    "/v1/api_keys",
    "/v1/deposits/coin_addresses",
    "/v1/status/wallet",
];

/// Bithumb signer: timestamped tokens, with the legacy shape on
/// [`LEGACY_TOKEN_ENDPOINTS`].
pub fn bithumb_signer(access_key: &str, secret_key: &str) -> Result<JwtSigner, ExchangeError> {
    let signer = JwtSigner::new(access_key, secret_key, TokenScheme::Timestamped)?;
    Ok(LEGACY_TOKEN_ENDPOINTS
        .iter()
        .fold(signer, |signer, endpoint| {
            signer.with_endpoint_scheme(endpoint, TokenScheme::LegacyTimestamped)
        }))
}

/// Builder for Bithumb connectors
pub struct BithumbBuilder {
    config: ExchangeConfig,
}

impl Default for BithumbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BithumbBuilder {
    pub fn new() -> Self {
        Self {
            config: ExchangeConfig::read_only(ExchangeType::Bithumb),
        }
    }

    pub fn with_config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<BithumbConnector<ReqwestRest>, ExchangeError> {
        let base_url = self
            .config
            .server_url
            .clone()
            .unwrap_or_else(|| ExchangeType::Bithumb.default_server_url().to_string());

        let rest_config =
            RestClientConfig::new(base_url, ExchangeType::Bithumb.as_str().to_string())
                .with_timeout(self.config.timeout);

        let mut rest_builder = RestClientBuilder::new(rest_config);

        if self.config.has_credentials() {
            let signer = bithumb_signer(self.config.access_key(), self.config.secret_key())?;
            rest_builder = rest_builder.with_signer(Arc::new(signer));
        }

        Ok(BithumbConnector::new(rest_builder.build()?))
    }
}

/// Create a Bithumb connector from a config
pub fn build_connector(
    config: ExchangeConfig,
) -> Result<BithumbConnector<ReqwestRest>, ExchangeError> {
    BithumbBuilder::new().with_config(config).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signer_uses_legacy_shape_only_on_listed_endpoints() {
        let signer = bithumb_signer("access", "secret").unwrap();
        for endpoint in LEGACY_TOKEN_ENDPOINTS {
            assert_eq!(signer.scheme_for(endpoint), TokenScheme::LegacyTimestamped);
        }
        assert_eq!(signer.scheme_for("/v1/orders"), TokenScheme::Timestamped);
        assert_eq!(signer.scheme_for("/v1/deposits/coin_address"), TokenScheme::Timestamped);
    }

    #[test]
    fn builds_without_credentials() {
        assert!(BithumbBuilder::new().build().is_ok());
    }
}
