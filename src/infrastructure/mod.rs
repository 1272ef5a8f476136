//! Infrastructure layer - reqwest-backed backends and providers

pub mod backends;
pub mod connector;
pub mod credentials;
pub mod http_client;
pub mod invoker;
pub mod logging;

pub use backends::{AnthropicBackend, RagBackend};
pub use connector::ClaudeRagConnector;
pub use credentials::EnvCredentialProvider;
pub use http_client::{HttpClient, HttpClientTrait};
pub use invoker::BackendInvoker;
