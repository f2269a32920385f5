//! Error types for provider calls

use thiserror::Error;

/// Errors returned by providers.
#[derive(Error, Debug)]
pub enum Error {
    /// No API key configured for the provider
    #[error("Missing API key for provider '{0}'")]
    MissingApiKey(String),

    /// Transport failure (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Provider answered 2xx with a body we cannot use
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn provider_error(message: impl Into<String>) -> Self {
        Error::ProviderError(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Error::InvalidResponse(message.into())
    }

    /// True when the underlying HTTP request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, Error>;
