//! Error types for gateway operations.
//!
//! These never escape the public gateway operations; they exist so failures
//! can be logged with enough structure to diagnose them.

use thiserror::Error;

/// Failure reported by an [`crate::HttpTransport`] implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    #[error("network request failed")]
    Network {
        /// Transport-specific failure detail.
        detail: String,
    },
    /// The upstream answered with a non-success status.
    #[error("unexpected http status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}

/// Failure of a single upstream call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport or HTTP status failure.
    #[error("upstream request failed")]
    Transport {
        /// Endpoint path (never the full URL, which carries the API key).
        endpoint: String,
        /// Underlying transport failure.
        source: TransportError,
    },
    /// Response body was not the expected JSON shape.
    #[error("upstream response could not be decoded")]
    Decode {
        /// Endpoint path.
        endpoint: String,
        /// Underlying serde error.
        source: serde_json::Error,
    },
}

impl GatewayError {
    /// Endpoint path the failure belongs to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Transport { endpoint, .. } | Self::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Configuration failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The upstream API key was not provided.
    #[error("upstream api key is not configured")]
    MissingApiKey {
        /// Name of the variable that should carry the key.
        variable: &'static str,
    },
}
