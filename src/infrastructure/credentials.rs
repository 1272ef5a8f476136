use std::env;

use async_trait::async_trait;

use crate::domain::{ApiCredentials, ConnectorError, CredentialProvider};

pub const DEFAULT_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const DEFAULT_BASE_URL_VAR: &str = "ANTHROPIC_BASE_URL";

/// Credential provider that reads the Claude API key from environment
/// variables.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    api_key_var: String,
    base_url_var: String,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self::with_vars(DEFAULT_API_KEY_VAR, DEFAULT_BASE_URL_VAR)
    }

    pub fn with_vars(api_key_var: impl Into<String>, base_url_var: impl Into<String>) -> Self {
        Self {
            api_key_var: api_key_var.into(),
            base_url_var: base_url_var.into(),
        }
    }

    fn read_credentials(&self) -> Result<ApiCredentials, ConnectorError> {
        let api_key = env::var(&self.api_key_var).map_err(|_| {
            ConnectorError::credential(format!(
                "Environment variable '{}' is not set",
                self.api_key_var
            ))
        })?;

        let mut credentials = ApiCredentials::new(api_key);

        if let Ok(base_url) = env::var(&self.base_url_var) {
            credentials = credentials.with_base_url(base_url);
        }

        Ok(credentials)
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_credentials(&self) -> Result<ApiCredentials, ConnectorError> {
        self.read_credentials()
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}
