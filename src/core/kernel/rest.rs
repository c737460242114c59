use crate::core::config::{ConfigError, DEFAULT_TIMEOUT};
use crate::core::errors::ExchangeError;
use crate::core::kernel::query::QueryParams;
use crate::core::kernel::signer::Signer;
use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{instrument, trace};

/// REST client trait for making HTTP requests
///
/// GET and DELETE requests carry their parameters in the URL query string.
/// POST requests carry the same parameters as a JSON body; when signed, the
/// token is bound to the query-string form of that body.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make a request and deserialize the response body
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - The API endpoint path
    /// * `params` - Ordered request parameters
    /// * `authenticated` - Whether to sign the request
    async fn request_json<T: DeserializeOwned + Send>(
        &self,
        method: Method,
        endpoint: &str,
        params: &QueryParams,
        authenticated: bool,
    ) -> Result<T, ExchangeError>;

    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &QueryParams,
        authenticated: bool,
    ) -> Result<T, ExchangeError> {
        self.request_json(Method::GET, endpoint, params, authenticated)
            .await
    }

    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &QueryParams,
        authenticated: bool,
    ) -> Result<T, ExchangeError> {
        self.request_json(Method::POST, endpoint, params, authenticated)
            .await
    }

    async fn delete_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &QueryParams,
        authenticated: bool,
    ) -> Result<T, ExchangeError> {
        self.request_json(Method::DELETE, endpoint, params, authenticated)
            .await
    }
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange name for tracing
    pub exchange_name: String,
    /// Upper bound on one request, connection through body
    pub timeout: Duration,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            exchange_name,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("koreax/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let client = Client::builder()
            .timeout(self.config.timeout)
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                ConfigError::InvalidConfiguration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    pub fn has_signer(&self) -> bool {
        self.signer.is_some()
    }

    fn get_timestamp() -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
    }

    /// Full URL; `query_string` is appended verbatim so the bytes on the
    /// wire are the bytes that were hashed.
    fn build_url(&self, endpoint: &str, query_string: &str) -> String {
        if query_string.is_empty() {
            format!("{}{}", self.config.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.config.base_url, endpoint, query_string)
        }
    }

    fn transport_error(err: &reqwest::Error) -> ExchangeError {
        if err.is_timeout() {
            ExchangeError::Timeout(err.to_string())
        } else {
            ExchangeError::RemoteRejection {
                status: err.status().map_or(0, |s| s.as_u16()),
                message: err.to_string(),
            }
        }
    }

    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Value, ExchangeError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        if !status.is_success() {
            return Err(ExchangeError::RemoteRejection {
                status: status.as_u16(),
                message: upstream_message(status, &response_text),
            });
        }

        trace!("Response body: {}", response_text);
        serde_json::from_str(&response_text).map_err(|e| {
            ExchangeError::Deserialization(format!("Failed to parse JSON response: {}", e))
        })
    }

    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, method = %method, endpoint = %endpoint, param_count = params.len()))]
    async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &QueryParams,
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        let query_string = params.to_query_string();
        let has_body = method == Method::POST;

        let url = if has_body {
            self.build_url(endpoint, "")
        } else {
            self.build_url(endpoint, &query_string)
        };
        let mut request = self.client.request(method.clone(), &url);

        if authenticated {
            let signer = self.signer.as_ref().ok_or_else(|| {
                ExchangeError::CredentialError(format!(
                    "{} requires API credentials",
                    endpoint
                ))
            })?;
            let headers = signer.sign_request(
                method.as_str(),
                endpoint,
                &query_string,
                Self::get_timestamp(),
            )?;
            for (key, value) in headers {
                request = request.header(key, value);
            }
        }

        if has_body {
            request = request
                .header("Content-Type", "application/json")
                .body(params.to_json_body().to_string());
        }

        let response = request
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    async fn request_json<T: DeserializeOwned + Send>(
        &self,
        method: Method,
        endpoint: &str,
        params: &QueryParams,
        authenticated: bool,
    ) -> Result<T, ExchangeError> {
        let value = self
            .make_request(method, endpoint, params, authenticated)
            .await?;
        serde_json::from_value(value).map_err(|e| {
            ExchangeError::Deserialization(format!("Failed to deserialize JSON: {}", e))
        })
    }
}

/// Upstream error text: `error.message`, then a top-level `message`, then
/// the raw body, then the HTTP reason phrase.
fn upstream_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let structured = value
            .pointer("/error/message")
            .or_else(|| value.get("message"))
            .and_then(Value::as_str);
        if let Some(message) = structured {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}
