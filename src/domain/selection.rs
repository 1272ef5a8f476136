use serde::{Deserialize, Serialize};

use super::error::ConnectorError;

/// Batch-level resource selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    #[default]
    Message,
    RagQuery,
    AgentTask,
}

/// Batch-level operation selector. Which values are valid depends on the
/// resource; `Action::resolve` is the single place that knows the pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    #[default]
    Send,
    Query,
    Execute,
}

/// The closed set of supported (resource, operation) combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SendMessage,
    QueryKnowledgeBase,
    ExecuteAgentTask,
}

impl Action {
    /// Resolve the two-level selection into a supported action. An
    /// unrecognized pair is a configuration error, never a silent skip.
    pub fn resolve(resource: Resource, operation: Operation) -> Result<Self, ConnectorError> {
        match (resource, operation) {
            (Resource::Message, Operation::Send) => Ok(Self::SendMessage),
            (Resource::RagQuery, Operation::Query) => Ok(Self::QueryKnowledgeBase),
            (Resource::AgentTask, Operation::Execute) => Ok(Self::ExecuteAgentTask),
            (resource, operation) => Err(ConnectorError::configuration(format!(
                "unsupported resource/operation pair: {:?}/{:?}",
                resource, operation
            ))),
        }
    }
}
