use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Validation error on '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Credential error: {0}")]
    CredentialError(String),

    #[error("Remote rejection ({status}): {message}")]
    RemoteRejection { status: u16, message: String },

    #[error("{exchange} does not support {operation}")]
    UnsupportedOperation {
        exchange: String,
        operation: &'static str,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] crate::core::config::ConfigError),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl ExchangeError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported(exchange: impl Into<String>, operation: &'static str) -> Self {
        Self::UnsupportedOperation {
            exchange: exchange.into(),
            operation,
        }
    }

    /// Returns true for errors raised before any network I/O.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::CredentialError(_)
                | Self::UnsupportedOperation { .. }
                | Self::ConfigurationError(_)
        )
    }
}
