//! Claude RAG connector
//!
//! A workflow-automation step that dispatches a batch of input items to one of
//! three backends - Claude message creation, a RAG query endpoint, or an agent
//! task endpoint - and normalizes every response into per-item output records:
//! - Two-level resource/operation selection resolved into a closed action set
//! - One outbound call per item, sequential, in input order
//! - Continue-on-fail or abort-batch failure policies

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    Action, AdditionalFields, ApiCredentials, ConnectorError, ConnectorExecutor,
    CredentialProvider, ExecutionItem, FailurePolicy, InputItem, NodeParameters, Operation,
    OutputRecord, PairedItem, RawResponse, RequestDescriptor, Resource, build_request, normalize,
};
pub use infrastructure::{BackendInvoker, ClaudeRagConnector, EnvCredentialProvider, HttpClient};
