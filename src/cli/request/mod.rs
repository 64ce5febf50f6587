//! Request command - builds a workflow from a JSON invocation object

use anyhow::Context;
use clap::Args;
use tokio::io::AsyncReadExt;
use tracing::debug;

use super::{bootstrap, write_document, OutputArgs};

/// Arguments for the request command
#[derive(Args, Clone, Debug)]
pub struct RequestArgs {
    /// JSON file holding the request, or `-` to read stdin
    #[arg(value_name = "FILE|-")]
    pub input: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Run the request command
pub async fn run(args: RequestArgs) -> anyhow::Result<()> {
    let config = bootstrap();
    let service = crate::create_generator_service(&config)?;

    let raw = read_input(&args.input).await?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).context("Request is not valid JSON")?;
    debug!("Loaded request from {}", args.input);

    let document = service.generate_from_json(value).await?;
    write_document(&document, &args.output).await
}

async fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut raw = String::new();
        tokio::io::stdin().read_to_string(&mut raw).await?;
        return Ok(raw);
    }

    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read request file {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_input_from_file() {
        let path = std::env::temp_dir().join(format!(
            "dify-dsl-generator-request-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"node_types": []}"#).unwrap();

        let raw = read_input(path.to_str().unwrap()).await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(raw, r#"{"node_types": []}"#);
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let err = read_input("/nonexistent/request.json").await.unwrap_err();

        assert!(err.to_string().contains("/nonexistent/request.json"));
    }
}
