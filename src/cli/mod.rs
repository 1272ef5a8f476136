//! CLI module for the Claude RAG connector
//!
//! Provides subcommands for driving the connector outside a workflow host:
//! - `run`: execute one batch of items against the configured backends
//! - `models`: list the models the node offers for selection

pub mod models;
pub mod run;

use clap::{Parser, Subcommand};

/// Claude RAG connector - Claude messages, RAG queries and agent tasks as one workflow step
#[derive(Parser)]
#[command(name = "claude-rag-connector")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Execute one batch of items against the configured backends
    Run(run::RunArgs),

    /// List the models the node offers for selection
    Models,
}
