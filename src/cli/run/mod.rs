use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use serde_json::Value;

use crate::config::AppConfig;
use crate::domain::{ConnectorExecutor, ExecutionItem, FailurePolicy, InputItem, NodeParameters};
use crate::infrastructure::logging::{self, LoggingConfig};
use crate::infrastructure::{ClaudeRagConnector, EnvCredentialProvider, HttpClient};

/// Arguments for the `run` command
#[derive(Args)]
pub struct RunArgs {
    /// Path to the resolved node parameters (a JSON object)
    #[arg(long)]
    pub params: PathBuf,

    /// Path to the input batch (a JSON array of item payloads); one empty
    /// item when omitted
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// Capture per-item failures as {"error": ...} records instead of
    /// aborting the batch
    #[arg(long)]
    pub continue_on_fail: bool,
}

pub async fn run(args: RunArgs) -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    logging::init_logging(&LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    let parameters = read_parameters(&args.params)?;
    let payloads = match args.items {
        Some(ref path) => read_items(path)?,
        None => vec![Value::Null],
    };

    // The CLI is a literal-parameter host: the same resolved values apply to
    // every item. Expression evaluation belongs to a real workflow host.
    let items: Vec<ExecutionItem> = payloads
        .into_iter()
        .map(|json| ExecutionItem::new(InputItem::new(json), parameters.clone()))
        .collect();

    let provider = EnvCredentialProvider::with_vars(
        &config.credentials.api_key_var,
        &config.credentials.base_url_var,
    );
    let client = HttpClient::with_timeout(Duration::from_secs(config.http.timeout_secs));

    let mut connector = ClaudeRagConnector::new(provider, client);
    if let Some(base_url) = config.http.llm_base_url {
        connector = connector.with_llm_base_url(base_url);
    }

    let policy = if args.continue_on_fail {
        FailurePolicy::Continue
    } else {
        FailurePolicy::Abort
    };

    let records = connector.execute(&items, policy).await?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn read_parameters(path: &Path) -> anyhow::Result<NodeParameters> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameters from {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid node parameters in {}", path.display()))
}

fn read_items(path: &Path) -> anyhow::Result<Vec<Value>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read items from {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Expected a JSON array of items in {}", path.display()))
}
