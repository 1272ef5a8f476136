use serde::{Deserialize, Serialize};

use super::models;
use super::selection::{Operation, Resource};

pub const DEFAULT_RAG_ENDPOINT: &str = "http://localhost:8000";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TEMPERATURE: f32 = 1.0;
pub const DEFAULT_TOP_K: u32 = 5;

/// Host-resolved values of the node's configuration fields, one set per item.
/// Expression evaluation happens in the host; every field here is a plain
/// scalar by the time the connector reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeParameters {
    /// Batch-level selector, read from item 0 only.
    pub resource: Resource,
    /// Batch-level selector, read from item 0 only.
    pub operation: Operation,
    pub model: String,
    pub prompt: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub rag_endpoint: String,
    pub knowledge_base_id: String,
    pub additional_fields: AdditionalFields,
}

impl Default for NodeParameters {
    fn default() -> Self {
        Self {
            resource: Resource::default(),
            operation: Operation::default(),
            model: models::default_model(),
            prompt: String::new(),
            system_prompt: String::new(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            rag_endpoint: DEFAULT_RAG_ENDPOINT.to_string(),
            knowledge_base_id: String::new(),
            additional_fields: AdditionalFields::default(),
        }
    }
}

/// The optional "Additional Fields" collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalFields {
    pub top_k: Option<u32>,
    pub include_sources: Option<bool>,
    /// Read from configuration but not wired into any outbound request; kept
    /// for compatibility with saved workflows.
    pub stream: Option<bool>,
}

impl AdditionalFields {
    /// `topK` falls back to 5 when unset or zero.
    pub fn top_k_or_default(&self) -> u32 {
        match self.top_k {
            Some(top_k) if top_k > 0 => top_k,
            _ => DEFAULT_TOP_K,
        }
    }

    /// `includeSources` stays on unless explicitly disabled.
    pub fn include_sources_or_default(&self) -> bool {
        self.include_sources != Some(false)
    }
}
