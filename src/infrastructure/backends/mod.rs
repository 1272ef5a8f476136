//! Backend clients for the three outbound targets

mod anthropic;
mod rag;

pub use anthropic::AnthropicBackend;
pub use rag::RagBackend;
