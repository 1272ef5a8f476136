use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

use super::error::ConnectorError;

/// Claude API credentials supplied by the host's credential store. Only
/// `api_key` is read on the execution path; `base_url` belongs to the host's
/// credential test request.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCredentials {
    api_key: String,
    #[serde(default)]
    base_url: Option<String>,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

impl fmt::Debug for ApiCredentials {
    // The key must never reach logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Source of the batch-level credentials (environment, host store, ...).
#[async_trait]
pub trait CredentialProvider: Send + Sync + fmt::Debug {
    /// Resolve the credentials. Called once per batch.
    async fn get_credentials(&self) -> Result<ApiCredentials, ConnectorError>;

    /// Provider name for logging/debugging.
    fn provider_name(&self) -> &'static str;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let credentials = ApiCredentials::new("sk-very-secret").with_base_url("http://localhost");
        let debug = format!("{:?}", credentials);

        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("***"));
        assert!(debug.contains("http://localhost"));
    }

    #[test]
    fn test_deserialize_credential_contract() {
        let credentials: ApiCredentials = serde_json::from_str(
            r#"{"apiKey": "sk-test", "baseUrl": "https://api.anthropic.com"}"#,
        )
        .unwrap();

        assert_eq!(credentials.api_key(), "sk-test");
        assert_eq!(credentials.base_url(), Some("https://api.anthropic.com"));
    }

    #[test]
    fn test_base_url_is_optional() {
        let credentials: ApiCredentials = serde_json::from_str(r#"{"apiKey": "sk-test"}"#).unwrap();
        assert!(credentials.base_url().is_none());
    }
}
