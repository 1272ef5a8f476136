use serde::Deserialize;
use serde_json::{Value, json};

/// One content block of a Claude message response.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Parsed Claude message-creation response. `usage` is carried through
/// verbatim; only the content blocks get reshaped.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Value,
    pub model: String,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

impl MessageResponse {
    /// Text of the first content block when it is a text block; anything else
    /// yields an empty response string.
    pub fn primary_text(&self) -> &str {
        match self.content.first() {
            Some(block) if block.kind == "text" => block.text.as_deref().unwrap_or(""),
            _ => "",
        }
    }
}

/// Raw success payload from one of the three backends.
#[derive(Debug, Clone)]
pub enum RawResponse {
    Message(MessageResponse),
    RagQuery(Value),
    AgentTask(Value),
}

/// Map a backend response onto the uniform output payload. RAG and agent
/// bodies pass through unchanged.
pub fn normalize(response: RawResponse) -> Value {
    match response {
        RawResponse::Message(message) => json!({
            "response": message.primary_text(),
            "usage": message.usage,
            "model": message.model,
            "stopReason": message.stop_reason,
        }),
        RawResponse::RagQuery(body) | RawResponse::AgentTask(body) => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: Value) -> MessageResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_message_response() {
        let message = parse(json!({
            "content": [{"type": "text", "text": "hi"}],
            "usage": {"input_tokens": 4, "output_tokens": 1},
            "model": "claude-3-5-sonnet-20241022",
            "stop_reason": "end_turn"
        }));

        let normalized = normalize(RawResponse::Message(message));

        assert_eq!(
            normalized,
            json!({
                "response": "hi",
                "usage": {"input_tokens": 4, "output_tokens": 1},
                "model": "claude-3-5-sonnet-20241022",
                "stopReason": "end_turn"
            })
        );
    }

    #[test]
    fn test_non_text_first_block_yields_empty_response() {
        let message = parse(json!({
            "content": [{"type": "image"}],
            "usage": {},
            "model": "claude-3-5-sonnet-20241022",
            "stop_reason": "end_turn"
        }));

        let normalized = normalize(RawResponse::Message(message));
        assert_eq!(normalized["response"], "");
    }

    #[test]
    fn test_empty_content_yields_empty_response() {
        let message = parse(json!({
            "content": [],
            "usage": {},
            "model": "claude-3-5-haiku-20241022",
            "stop_reason": null
        }));

        assert_eq!(message.primary_text(), "");
        let normalized = normalize(RawResponse::Message(message));
        assert_eq!(normalized["stopReason"], Value::Null);
    }

    #[test]
    fn test_rag_and_agent_bodies_pass_through() {
        let body = json!({"answer": "42", "sources": [{"id": "doc-1"}]});

        assert_eq!(normalize(RawResponse::RagQuery(body.clone())), body);
        assert_eq!(normalize(RawResponse::AgentTask(body.clone())), body);
    }
}
