//! Generate command - builds a workflow from command-line parameters

use clap::Args;
use tracing::info;

use super::{bootstrap, write_document, OutputArgs};
use crate::domain::{IntentConfig, Language, NodeKind, Variable};
use crate::infrastructure::services::GenerateRequest;

/// Arguments for the generate command
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Free-form description of the workflow; analyzed by the configured LLM
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Workflow name
    #[arg(long)]
    pub name: Option<String>,

    /// Workflow description
    #[arg(long)]
    pub description: Option<String>,

    /// Node kind to append to the chain, in order (repeatable)
    #[arg(long = "node", value_name = "KIND")]
    pub nodes: Vec<NodeKind>,

    /// Input variable as NAME or NAME:TYPE (repeatable)
    #[arg(long = "var", value_name = "NAME:TYPE")]
    pub vars: Vec<Variable>,

    /// Output language (en or ja)
    #[arg(short, long)]
    pub language: Option<Language>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl GenerateArgs {
    /// Flags left unset stay unset so the service can apply its defaults
    pub fn to_request(&self) -> GenerateRequest {
        let params = IntentConfig {
            workflow_name: self.name.clone(),
            description: self.description.clone(),
            node_types: (!self.nodes.is_empty()).then(|| self.nodes.clone()),
            variables: (!self.vars.is_empty()).then(|| self.vars.clone()),
        };

        GenerateRequest {
            user_input: self.prompt.clone(),
            language: self.language,
            params,
        }
    }
}

/// Run the generate command
pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let config = bootstrap();
    let service = crate::create_generator_service(&config)?;

    info!(
        "Generating workflow ({} path)",
        if args.prompt.is_some() { "text" } else { "explicit" }
    );

    let document = service.generate(args.to_request()).await?;
    write_document(&document, &args.output).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VariableType;

    fn args() -> GenerateArgs {
        GenerateArgs {
            prompt: None,
            name: None,
            description: None,
            nodes: Vec::new(),
            vars: Vec::new(),
            language: None,
            output: OutputArgs::default(),
        }
    }

    #[test]
    fn test_unset_flags_stay_unset() {
        let request = args().to_request();

        assert_eq!(request, GenerateRequest::default());
    }

    #[test]
    fn test_flags_map_to_request() {
        let args = GenerateArgs {
            prompt: Some("route support tickets".to_string()),
            name: Some("Router".to_string()),
            nodes: vec![NodeKind::IfElse, NodeKind::Answer],
            vars: vec![Variable::new("ticket", VariableType::String)],
            language: Some(Language::Ja),
            ..args()
        };

        let request = args.to_request();

        assert_eq!(request.user_input.as_deref(), Some("route support tickets"));
        assert_eq!(request.language, Some(Language::Ja));
        assert_eq!(request.params.workflow_name.as_deref(), Some("Router"));
        assert!(request.params.description.is_none());
        assert_eq!(
            request.params.node_types,
            Some(vec![NodeKind::IfElse, NodeKind::Answer])
        );
        assert_eq!(request.params.variables.map(|v| v.len()), Some(1));
    }
}
