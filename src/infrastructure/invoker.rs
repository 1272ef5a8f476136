use crate::domain::{ApiCredentials, ConnectorError, RawResponse, RequestDescriptor};
use crate::infrastructure::backends::{AnthropicBackend, RagBackend};
use crate::infrastructure::http_client::HttpClientTrait;

/// Performs the single outbound call for one request descriptor. Constructed
/// once per batch from the batch-level credentials and shared read-only
/// across every item.
#[derive(Debug)]
pub struct BackendInvoker<C: HttpClientTrait> {
    llm: AnthropicBackend<C>,
    rag: RagBackend<C>,
}

impl<C: HttpClientTrait + Clone> BackendInvoker<C> {
    pub fn new(client: C, credentials: &ApiCredentials) -> Self {
        Self {
            llm: AnthropicBackend::new(client.clone(), credentials.api_key()),
            rag: RagBackend::new(client),
        }
    }

    /// Point the Claude backend at a non-default endpoint (local gateways,
    /// tests). The RAG endpoints are per-request and need no override.
    pub fn with_llm_base_url(
        client: C,
        credentials: &ApiCredentials,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            llm: AnthropicBackend::with_base_url(client.clone(), credentials.api_key(), base_url),
            rag: RagBackend::new(client),
        }
    }

    pub async fn invoke(&self, request: &RequestDescriptor) -> Result<RawResponse, ConnectorError> {
        match request {
            RequestDescriptor::LlmMessage(request) => {
                Ok(RawResponse::Message(self.llm.send(request).await?))
            }
            RequestDescriptor::RagQuery(request) => {
                Ok(RawResponse::RagQuery(self.rag.query(request).await?))
            }
            RequestDescriptor::AgentTask(request) => {
                Ok(RawResponse::AgentTask(self.rag.execute_task(request).await?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LlmMessageRequest, RagQueryRequest};
    use crate::infrastructure::http_client::mock::MockHttpClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_routes_message_request_to_llm_backend() {
        let client = MockHttpClient::new().with_response(
            "https://api.anthropic.com/v1/messages",
            json!({
                "content": [{"type": "text", "text": "pong"}],
                "usage": {},
                "model": "claude-3-5-sonnet-20241022",
                "stop_reason": "end_turn"
            }),
        );
        let invoker = BackendInvoker::new(client, &ApiCredentials::new("key"));

        let descriptor = RequestDescriptor::LlmMessage(LlmMessageRequest {
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 8,
            temperature: 0.5,
            system_prompt: None,
            user_prompt: "ping".to_string(),
        });
        let response = invoker.invoke(&descriptor).await.unwrap();

        let RawResponse::Message(message) = response else {
            panic!("expected a message response");
        };
        assert_eq!(message.primary_text(), "pong");
    }

    #[tokio::test]
    async fn test_routes_rag_request_to_rag_backend() {
        let client =
            MockHttpClient::new().with_response("http://rag/api/rag/query", json!({"hits": []}));
        let invoker = BackendInvoker::new(client, &ApiCredentials::new("key"));

        let descriptor = RequestDescriptor::RagQuery(RagQueryRequest {
            endpoint: "http://rag".to_string(),
            knowledge_base_id: "kb".to_string(),
            query: "q".to_string(),
            top_k: 5,
            include_sources: true,
        });
        let response = invoker.invoke(&descriptor).await.unwrap();

        let RawResponse::RagQuery(body) = response else {
            panic!("expected a RAG response");
        };
        assert_eq!(body, json!({"hits": []}));
    }

    #[tokio::test]
    async fn test_invocation_error_passes_through() {
        let client = MockHttpClient::new().with_error("http://rag/api/rag/query", "boom");
        let invoker = BackendInvoker::new(client, &ApiCredentials::new("key"));

        let descriptor = RequestDescriptor::RagQuery(RagQueryRequest {
            endpoint: "http://rag".to_string(),
            knowledge_base_id: "kb".to_string(),
            query: "q".to_string(),
            top_k: 5,
            include_sources: true,
        });
        let error = invoker.invoke(&descriptor).await.unwrap_err();

        assert_eq!(error.message(), "boom");
    }
}
