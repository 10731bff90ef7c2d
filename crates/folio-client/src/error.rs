//! Error types for folio-client.

use thiserror::Error;

/// Result type alias for folio-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-client.
///
/// The schema adapter never returns these for backend failures; it logs
/// them and falls back to the built-in catalog. They reach callers only
/// from [`TemplateSource`](crate::TemplateSource) directly and from admin
/// operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// Transport error (connection refused, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Response envelope reported failure or had an unexpected shape
    #[error("Envelope error: {message}")]
    Envelope {
        /// What was wrong with the envelope
        message: String,
    },

    /// JSON payload did not match the expected schema
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates a new envelope error.
    pub fn envelope<S: Into<String>>(message: S) -> Self {
        Error::Envelope {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error means the backend could not provide a
    /// usable answer (network failure, non-2xx, malformed payload).
    ///
    /// All of these are treated identically: fall back to the catalog.
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Status { .. } | Error::Envelope { .. } | Error::Serialization(_)
        )
    }
}
