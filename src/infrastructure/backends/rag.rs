use serde_json::{Value, json};
use tracing::debug;

use crate::domain::{AgentTaskRequest, ConnectorError, RagQueryRequest};
use crate::infrastructure::http_client::HttpClientTrait;

const RAG_QUERY_PATH: &str = "/api/rag/query";
const AGENT_EXECUTE_PATH: &str = "/api/agent/execute";

/// Client for the RAG API's query and agent endpoints. Both sit on a trusted
/// network and take no authentication header.
#[derive(Debug)]
pub struct RagBackend<C: HttpClientTrait> {
    client: C,
}

impl<C: HttpClientTrait> RagBackend<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    fn url(endpoint: &str, path: &str) -> String {
        format!("{}{}", endpoint.trim_end_matches('/'), path)
    }

    /// Query a knowledge base; the response body is returned untouched.
    pub async fn query(&self, request: &RagQueryRequest) -> Result<Value, ConnectorError> {
        debug!(knowledge_base = %request.knowledge_base_id, top_k = request.top_k, "sending RAG query");

        let body = json!({
            "query": request.query,
            "knowledgeBaseId": request.knowledge_base_id,
            "topK": request.top_k,
            "includeSources": request.include_sources,
        });

        self.client
            .post_json(&Self::url(&request.endpoint, RAG_QUERY_PATH), vec![], &body)
            .await
    }

    /// Hand a task to the agent endpoint; the response body is returned
    /// untouched.
    pub async fn execute_task(&self, request: &AgentTaskRequest) -> Result<Value, ConnectorError> {
        debug!(model = %request.model, "sending agent task");

        let body = json!({
            "task": request.task,
            "model": request.model,
        });

        self.client
            .post_json(
                &Self::url(&request.endpoint, AGENT_EXECUTE_PATH),
                vec![],
                &body,
            )
            .await
    }
}
