//! CLI module for the Dify DSL Generator
//!
//! Subcommands:
//! - `generate`: build a document from flags or a free-form prompt
//! - `request`: build a document from a JSON invocation object

pub mod generate;
pub mod request;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::WorkflowDocument;
use crate::infrastructure::logging;

/// Dify DSL Generator - Dify workflow documents from plain requests
#[derive(Parser)]
#[command(name = "dify-dsl-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a workflow from command-line parameters
    Generate(generate::GenerateArgs),

    /// Generate a workflow from a JSON request file (`-` for stdin)
    Request(request::RequestArgs),
}

/// Where and how to write the generated document
#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Load `.env`, configuration and logging shared by every subcommand
pub(crate) fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    config
}

pub(crate) async fn write_document(
    document: &WorkflowDocument,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let mut json = document.to_json(!output.compact)?;
    json.push('\n');

    match &output.output {
        Some(path) => {
            tokio::fs::write(path, json).await?;
            info!("Wrote workflow '{}' to {}", document.name, path.display());
        }
        None => {
            use tokio::io::AsyncWriteExt;

            let mut stdout = tokio::io::stdout();
            stdout.write_all(json.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}
