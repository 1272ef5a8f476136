mod app_config;

pub use app_config::{AppConfig, CredentialsConfig, HttpConfig, LogFormat, LoggingConfig};
