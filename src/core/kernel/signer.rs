use crate::core::errors::ExchangeError;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use std::collections::HashMap;
use uuid::Uuid;

pub const QUERY_HASH_ALG: &str = "SHA512";

/// Result type for signing operations: headers to attach to the request
pub type SignatureResult = Result<HashMap<String, String>, ExchangeError>;

/// Signer trait for request authentication
///
/// Implementations turn an outgoing request into the headers that
/// authenticate it. `query_string` is the canonical parameter string,
/// for POST requests too, and is never empty-padded.
pub trait Signer: Send + Sync {
    /// Sign a request and return the headers to include
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, etc.)
    /// * `endpoint` - API endpoint path
    /// * `query_string` - Canonical query string (without leading '?')
    /// * `timestamp` - Request timestamp in milliseconds
    fn sign_request(
        &self,
        method: &str,
        endpoint: &str,
        query_string: &str,
        timestamp: u64,
    ) -> SignatureResult;
}

/// Shape of the JWT claims for a given endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScheme {
    /// `{access_key, nonce, [query_hash, query_hash_alg]}`
    Standard,
    /// Standard claims plus a millisecond `timestamp`.
    Timestamped,
    /// `{access_key, nonce, timestamp}`; never carries a query hash.
    LegacyTimestamped,
}

/// Claims signed into every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthPayload {
    pub access_key: String,
    pub nonce: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_hash_alg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// Hex-encoded SHA-512 digest of the query string bytes.
pub fn query_hash(query_string: &str) -> String {
    hex::encode(Sha512::digest(query_string.as_bytes()))
}

/// HS256 JWT signer holding one set of credentials.
#[derive(Debug)]
pub struct JwtSigner {
    access_key: Secret<String>,
    secret_key: Secret<String>,
    scheme: TokenScheme,
    endpoint_schemes: HashMap<String, TokenScheme>,
}

impl JwtSigner {
    /// Create a new JWT signer
    ///
    /// Fails with [`ExchangeError::CredentialError`] when either key is empty.
    pub fn new(
        access_key: &str,
        secret_key: &str,
        scheme: TokenScheme,
    ) -> Result<Self, ExchangeError> {
        if access_key.trim().is_empty() {
            return Err(ExchangeError::CredentialError(
                "access key is empty".to_string(),
            ));
        }
        if secret_key.is_empty() {
            return Err(ExchangeError::CredentialError(
                "secret key is empty".to_string(),
            ));
        }

        Ok(Self {
            access_key: Secret::new(access_key.to_string()),
            secret_key: Secret::new(secret_key.to_string()),
            scheme,
            endpoint_schemes: HashMap::new(),
        })
    }

    /// Use a different claim shape for one endpoint path.
    pub fn with_endpoint_scheme(mut self, endpoint: &str, scheme: TokenScheme) -> Self {
        self.endpoint_schemes.insert(endpoint.to_string(), scheme);
        self
    }

    pub fn scheme_for(&self, endpoint: &str) -> TokenScheme {
        self.endpoint_schemes
            .get(endpoint)
            .copied()
            .unwrap_or(self.scheme)
    }

    /// Build fresh claims for one request. Every call draws a new nonce.
    pub fn build_payload(&self, endpoint: &str, query_string: &str, timestamp: u64) -> AuthPayload {
        let scheme = self.scheme_for(endpoint);
        let hashed = scheme != TokenScheme::LegacyTimestamped && !query_string.is_empty();

        AuthPayload {
            access_key: self.access_key.expose_secret().clone(),
            nonce: Uuid::new_v4().to_string(),
            query_hash: hashed.then(|| query_hash(query_string)),
            query_hash_alg: hashed.then(|| QUERY_HASH_ALG.to_string()),
            timestamp: (scheme != TokenScheme::Standard).then_some(timestamp),
        }
    }

    pub fn encode_payload(&self, payload: &AuthPayload) -> Result<String, ExchangeError> {
        encode(
            &Header::new(Algorithm::HS256),
            payload,
            &EncodingKey::from_secret(self.secret_key.expose_secret().as_bytes()),
        )
        .map_err(|e| ExchangeError::CredentialError(format!("failed to sign token: {}", e)))
    }

    /// Signed bearer token for `endpoint` bound to `query_string`.
    pub fn token(
        &self,
        endpoint: &str,
        query_string: &str,
        timestamp: u64,
    ) -> Result<String, ExchangeError> {
        let payload = self.build_payload(endpoint, query_string, timestamp);
        self.encode_payload(&payload)
    }
}

impl Signer for JwtSigner {
    fn sign_request(
        &self,
        _method: &str,
        endpoint: &str,
        query_string: &str,
        timestamp: u64,
    ) -> SignatureResult {
        let token = self.token(endpoint, query_string, timestamp)?;

        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        Ok(headers)
    }
}
