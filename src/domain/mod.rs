//! Domain layer - connector entities, selection, and trait seams

pub mod credentials;
pub mod error;
pub mod executor;
pub mod item;
pub mod models;
pub mod params;
pub mod request;
pub mod response;
pub mod selection;

pub use credentials::{ApiCredentials, CredentialProvider};
pub use error::ConnectorError;
pub use executor::{ConnectorExecutor, ExecutionItem, FailurePolicy};
pub use item::{InputItem, OutputRecord, PairedItem};
pub use params::{AdditionalFields, NodeParameters};
pub use request::{
    AgentTaskRequest, LlmMessageRequest, RagQueryRequest, RequestDescriptor, build_request,
};
pub use response::{ContentBlock, MessageResponse, RawResponse, normalize};
pub use selection::{Action, Operation, Resource};
