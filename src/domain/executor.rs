//! Batch executor trait and failure policy

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ConnectorError;
use super::item::{InputItem, OutputRecord};
use super::params::NodeParameters;

/// What to do when an item's outbound call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// The first failure terminates the batch (the host default).
    #[default]
    Abort,

    /// Failures become in-band `{error}` records and the batch continues.
    Continue,
}

impl FailurePolicy {
    pub fn continues_on_fail(&self) -> bool {
        matches!(self, Self::Continue)
    }
}

/// One input item together with its host-resolved parameter values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionItem {
    #[serde(default)]
    pub input: InputItem,
    #[serde(default)]
    pub parameters: NodeParameters,
}

impl ExecutionItem {
    pub fn new(input: InputItem, parameters: NodeParameters) -> Self {
        Self { input, parameters }
    }

    /// An item whose payload carries no data of its own.
    pub fn from_parameters(parameters: NodeParameters) -> Self {
        Self::new(InputItem::default(), parameters)
    }
}

/// Trait for executing one batch of items against the backends.
#[async_trait]
pub trait ConnectorExecutor: Send + Sync + std::fmt::Debug {
    /// Execute the batch sequentially, in input order. Under the continue
    /// policy the result holds exactly one record per item; under the abort
    /// policy the first failure is returned as the batch error.
    async fn execute(
        &self,
        items: &[ExecutionItem],
        policy: FailurePolicy,
    ) -> Result<Vec<OutputRecord>, ConnectorError>;
}
