use super::params::NodeParameters;
use super::selection::Action;

/// Outbound call to the Claude message-creation endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmMessageRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system_prompt: Option<String>,
    pub user_prompt: String,
}

/// Outbound call to the RAG query endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RagQueryRequest {
    pub endpoint: String,
    pub knowledge_base_id: String,
    pub query: String,
    pub top_k: u32,
    pub include_sources: bool,
}

/// Outbound call to the agent execution endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentTaskRequest {
    pub endpoint: String,
    pub task: String,
    pub model: String,
}

/// One outbound request. Built fresh per item; has no identity beyond the
/// call it represents.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestDescriptor {
    LlmMessage(LlmMessageRequest),
    RagQuery(RagQueryRequest),
    AgentTask(AgentTaskRequest),
}

/// Map one item's resolved parameters onto the request for the selected
/// action.
pub fn build_request(action: Action, params: &NodeParameters) -> RequestDescriptor {
    match action {
        Action::SendMessage => {
            // An empty system prompt means "no system prompt"; the provider
            // treats empty and absent differently.
            let system_prompt = if params.system_prompt.is_empty() {
                None
            } else {
                Some(params.system_prompt.clone())
            };

            RequestDescriptor::LlmMessage(LlmMessageRequest {
                model: params.model.clone(),
                max_tokens: params.max_tokens,
                temperature: params.temperature,
                system_prompt,
                user_prompt: params.prompt.clone(),
            })
        }
        Action::QueryKnowledgeBase => RequestDescriptor::RagQuery(RagQueryRequest {
            endpoint: params.rag_endpoint.clone(),
            knowledge_base_id: params.knowledge_base_id.clone(),
            query: params.prompt.clone(),
            top_k: params.additional_fields.top_k_or_default(),
            include_sources: params.additional_fields.include_sources_or_default(),
        }),
        // The agent path forwards only the task and the model; sampling
        // parameters stay local.
        Action::ExecuteAgentTask => RequestDescriptor::AgentTask(AgentTaskRequest {
            endpoint: params.rag_endpoint.clone(),
            task: params.prompt.clone(),
            model: params.model.clone(),
        }),
    }
}
