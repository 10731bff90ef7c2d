//! Error types for folio-core.

/// Errors that can occur in folio-core.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No catalog entry exists for the (normalized) template id.
    #[error("Template not found: {id}")]
    TemplateNotFound {
        /// Template id as requested by the caller
        id: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for folio-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new template-not-found error.
    pub fn template_not_found<S: Into<String>>(id: S) -> Self {
        Error::TemplateNotFound { id: id.into() }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error means the requested template does not exist.
    ///
    /// Callers must surface this as "template not found" rather than
    /// swallowing it.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::TemplateNotFound { .. })
    }
}
