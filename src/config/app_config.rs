use serde::Deserialize;

use crate::infrastructure::credentials::{DEFAULT_API_KEY_VAR, DEFAULT_BASE_URL_VAR};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub credentials: CredentialsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Transport timeout; the only bound on per-item latency.
    pub timeout_secs: u64,

    /// Optional override for the Claude endpoint (local gateways).
    pub llm_base_url: Option<String>,
}

/// Which environment variables the env credential provider reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub api_key_var: String,
    pub base_url_var: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            http: HttpConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            llm_base_url: None,
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
            base_url_var: DEFAULT_BASE_URL_VAR.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.http.timeout_secs, 30);
        assert!(config.http.llm_base_url.is_none());
        assert_eq!(config.credentials.api_key_var, "ANTHROPIC_API_KEY");
    }
}
