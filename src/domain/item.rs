use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// One unit of the input batch. The payload is opaque to the connector;
/// pairing to outputs is purely positional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputItem {
    pub json: Value,
}

impl InputItem {
    pub fn new(json: Value) -> Self {
        Self { json }
    }
}

/// Positional linkage from an output record back to the input item that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    pub item: usize,
}

/// One record of the output batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub json: Value,
    pub paired_item: PairedItem,
}

impl OutputRecord {
    pub fn new(json: Value, item: usize) -> Self {
        Self {
            json,
            paired_item: PairedItem { item },
        }
    }

    /// In-band error record emitted under the continue-on-fail policy.
    pub fn from_error(message: impl Into<String>, item: usize) -> Self {
        Self::new(json!({ "error": message.into() }), item)
    }
}
