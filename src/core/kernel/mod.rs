//! Transport layer shared by every exchange.
//!
//! The kernel knows nothing about Upbit or Bithumb endpoints. It provides:
//!
//! - [`QueryParams`]: ordered parameters with one canonical rendering, used
//!   both for the URL and for the token's `query_hash`.
//! - [`Signer`] / [`JwtSigner`]: per-request HS256 bearer tokens with a fresh
//!   nonce each time.
//! - [`RestClient`] / [`ReqwestRest`]: HTTP with a bounded timeout and uniform
//!   error mapping. No retries.
//!
//! ```rust,no_run
//! use koreax::core::kernel::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), koreax::ExchangeError> {
//! let signer = JwtSigner::new("access", "secret", TokenScheme::Standard)?;
//! let rest = RestClientBuilder::new(RestClientConfig::new(
//!     "https://api.upbit.com".to_string(),
//!     "upbit".to_string(),
//! ))
//! .with_signer(Arc::new(signer))
//! .build()?;
//!
//! let query = QueryParams::new().with("market", "KRW-BTC");
//! let chance: serde_json::Value = rest.get_json("/v1/orders/chance", &query, true).await?;
//! # let _ = chance;
//! # Ok(())
//! # }
//! ```
pub mod query;
pub mod rest;
pub mod signer;

pub use query::QueryParams;
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{
    query_hash, AuthPayload, JwtSigner, SignatureResult, Signer, TokenScheme, QUERY_HASH_ALG,
};
