//! Model identifiers surfaced by the node's model selector.

pub const CLAUDE_3_5_SONNET: &str = "claude-3-5-sonnet-20241022";
pub const CLAUDE_3_5_HAIKU: &str = "claude-3-5-haiku-20241022";
pub const CLAUDE_3_OPUS: &str = "claude-3-opus-20240229";

/// Models offered for selection, in display order.
pub fn available_models() -> Vec<&'static str> {
    vec![CLAUDE_3_5_SONNET, CLAUDE_3_5_HAIKU, CLAUDE_3_OPUS]
}

pub fn default_model() -> String {
    CLAUDE_3_5_SONNET.to_string()
}
