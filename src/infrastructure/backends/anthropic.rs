use serde_json::json;
use tracing::debug;

use crate::domain::{ConnectorError, LlmMessageRequest, MessageResponse};
use crate::infrastructure::http_client::HttpClientTrait;

const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude message-creation backend
#[derive(Debug)]
pub struct AnthropicBackend<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
}

impl<C: HttpClientTrait> AnthropicBackend<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_ANTHROPIC_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            api_key: api_key.into(),
            base_url,
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn build_body(request: &LlmMessageRequest) -> serde_json::Value {
        let mut body = json!({
            "model": request.model,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
            "messages": [{ "role": "user", "content": request.user_prompt }],
        });

        // Absent, not empty: the key is only present when a system prompt was
        // actually configured.
        if let Some(ref system) = request.system_prompt {
            body["system"] = json!(system);
        }

        body
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("x-api-key", self.api_key.as_str()),
            ("anthropic-version", ANTHROPIC_VERSION),
            ("Content-Type", "application/json"),
        ]
    }

    /// Send one message-creation request and parse the provider response.
    pub async fn send(
        &self,
        request: &LlmMessageRequest,
    ) -> Result<MessageResponse, ConnectorError> {
        debug!(model = %request.model, "sending message-creation request");

        let body = Self::build_body(request);
        let response = self
            .client
            .post_json(&self.messages_url(), self.headers(), &body)
            .await?;

        serde_json::from_value(response).map_err(|e| {
            ConnectorError::invocation("anthropic", format!("Failed to parse response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::mock::MockHttpClient;
    use serde_json::json;

    const TEST_URL: &str = "https://api.anthropic.com/v1/messages";

    fn request() -> LlmMessageRequest {
        LlmMessageRequest {
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 10,
            temperature: 1.0,
            system_prompt: None,
            user_prompt: "test".to_string(),
        }
    }

    fn success_response() -> serde_json::Value {
        json!({
            "id": "msg_123",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-5-sonnet-20241022",
            "content": [{"type": "text", "text": "hi"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 12, "output_tokens": 1}
        })
    }

    #[tokio::test]
    async fn test_send_parses_response() {
        let client = MockHttpClient::new().with_response(TEST_URL, success_response());
        let backend = AnthropicBackend::new(client, "test-api-key");

        let response = backend.send(&request()).await.unwrap();

        assert_eq!(response.primary_text(), "hi");
        assert_eq!(response.model, "claude-3-5-sonnet-20241022");
        assert_eq!(response.stop_reason.as_deref(), Some("end_turn"));
        assert_eq!(response.usage, json!({"input_tokens": 12, "output_tokens": 1}));
    }

    #[tokio::test]
    async fn test_body_has_no_system_key_when_prompt_absent() {
        let client = MockHttpClient::new().with_response(TEST_URL, success_response());
        let backend = AnthropicBackend::new(client.clone(), "test-api-key");

        backend.send(&request()).await.unwrap();

        let body = &client.requests()[0].body;
        assert_eq!(
            *body,
            json!({
                "model": "claude-3-5-sonnet-20241022",
                "max_tokens": 10,
                "temperature": 1.0,
                "messages": [{"role": "user", "content": "test"}],
            })
        );
        assert!(body.get("system").is_none());
    }

    #[tokio::test]
    async fn test_body_carries_configured_system_prompt() {
        let client = MockHttpClient::new().with_response(TEST_URL, success_response());
        let backend = AnthropicBackend::new(client.clone(), "test-api-key");

        let request = LlmMessageRequest {
            system_prompt: Some("You are terse.".to_string()),
            ..request()
        };
        backend.send(&request).await.unwrap();

        assert_eq!(client.requests()[0].body["system"], "You are terse.");
    }

    #[tokio::test]
    async fn test_auth_and_version_headers() {
        let client = MockHttpClient::new().with_response(TEST_URL, success_response());
        let backend = AnthropicBackend::new(client.clone(), "test-api-key");

        backend.send(&request()).await.unwrap();

        let headers = client.requests()[0].headers.clone();
        assert!(headers.contains(&("x-api-key".to_string(), "test-api-key".to_string())));
        assert!(headers.contains(&("anthropic-version".to_string(), "2023-06-01".to_string())));
    }

    #[tokio::test]
    async fn test_custom_base_url_trims_trailing_slash() {
        let custom_url = "http://localhost:8081/v1/messages";
        let client = MockHttpClient::new().with_response(custom_url, success_response());
        let backend =
            AnthropicBackend::with_base_url(client.clone(), "test-key", "http://localhost:8081/");

        backend.send(&request()).await.unwrap();

        assert_eq!(client.requests()[0].url, custom_url);
    }

    #[tokio::test]
    async fn test_unparseable_response_is_an_invocation_error() {
        let client = MockHttpClient::new().with_response(TEST_URL, json!({"content": "nope"}));
        let backend = AnthropicBackend::new(client, "test-key");

        let error = backend.send(&request()).await.unwrap_err();
        assert!(matches!(error, ConnectorError::Invocation { .. }));
    }
}
