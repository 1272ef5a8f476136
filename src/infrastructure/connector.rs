//! Dispatch-and-execution engine for the connector

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::{
    Action, ConnectorError, ConnectorExecutor, CredentialProvider, ExecutionItem, FailurePolicy,
    OutputRecord, build_request, normalize,
};
use crate::infrastructure::http_client::HttpClientTrait;
use crate::infrastructure::invoker::BackendInvoker;

/// The connector's batch executor. Collaborators are owned explicitly;
/// nothing is resolved from ambient state inside the per-item loop.
#[derive(Debug)]
pub struct ClaudeRagConnector<P, C>
where
    P: CredentialProvider,
    C: HttpClientTrait + Clone,
{
    credentials: P,
    client: C,
    llm_base_url: Option<String>,
}

impl<P, C> ClaudeRagConnector<P, C>
where
    P: CredentialProvider,
    C: HttpClientTrait + Clone,
{
    pub fn new(credentials: P, client: C) -> Self {
        Self {
            credentials,
            client,
            llm_base_url: None,
        }
    }

    /// Point the Claude backend at a non-default endpoint.
    pub fn with_llm_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.llm_base_url = Some(base_url.into());
        self
    }

    async fn build_invoker(&self) -> Result<BackendInvoker<C>, ConnectorError> {
        let credentials = self.credentials.get_credentials().await?;

        Ok(match self.llm_base_url {
            Some(ref base_url) => BackendInvoker::with_llm_base_url(
                self.client.clone(),
                &credentials,
                base_url.as_str(),
            ),
            None => BackendInvoker::new(self.client.clone(), &credentials),
        })
    }
}

#[async_trait]
impl<P, C> ConnectorExecutor for ClaudeRagConnector<P, C>
where
    P: CredentialProvider,
    C: HttpClientTrait + Clone,
{
    async fn execute(
        &self,
        items: &[ExecutionItem],
        policy: FailurePolicy,
    ) -> Result<Vec<OutputRecord>, ConnectorError> {
        let mut records = Vec::with_capacity(items.len());

        let Some(first) = items.first() else {
            return Ok(records);
        };

        // The two selectors are batch-level: read once from item 0, never per
        // item.
        let action = Action::resolve(first.parameters.resource, first.parameters.operation)?;

        // Credentials and backends are resolved once and shared read-only
        // across the batch.
        let invoker = self.build_invoker().await?;

        info!(
            items = items.len(),
            ?action,
            credential_provider = self.credentials.provider_name(),
            "executing batch"
        );

        for (i, item) in items.iter().enumerate() {
            let request = build_request(action, &item.parameters);

            match invoker.invoke(&request).await {
                Ok(response) => {
                    debug!(item = i, "item succeeded");
                    records.push(OutputRecord::new(normalize(response), i));
                }
                Err(error) if policy.continues_on_fail() => {
                    warn!(item = i, %error, "item failed, continuing");
                    records.push(OutputRecord::from_error(error.message(), i));
                }
                Err(error) => {
                    warn!(item = i, %error, "item failed, aborting batch");
                    return Err(error);
                }
            }
        }

        Ok(records)
    }
}
