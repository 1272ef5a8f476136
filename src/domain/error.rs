use thiserror::Error;

/// Connector error taxonomy
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConnectorError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Invocation error: {backend} - {message}")]
    Invocation { backend: String, message: String },
}

impl ConnectorError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn invocation(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invocation {
            backend: backend.into(),
            message: message.into(),
        }
    }

    /// The underlying message text, without the variant prefix. In-band
    /// `{error}` records carry exactly this.
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration { message }
            | Self::Credential { message }
            | Self::Invocation { message, .. } => message,
        }
    }
}
