//! DSL generator service - turns an invocation into a workflow document

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{
    DomainError, IntentAnalyzer, IntentConfig, Language, NodeKind, Variable, WorkflowDocument,
};

const TEXT_PATH_NAME: &str = "Generated Workflow";
const EXPLICIT_PATH_NAME: &str = "Default Workflow";

/// One generation request.
///
/// A non-blank `user_input` is analyzed first; the explicit fields then fill
/// whatever the analysis left out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub user_input: Option<String>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(flatten)]
    pub params: IntentConfig,
}

impl GenerateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(user_input: impl Into<String>) -> Self {
        Self {
            user_input: Some(user_input.into()),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_params(mut self, params: IntentConfig) -> Self {
        self.params = params;
        self
    }

    fn text(&self) -> Option<&str> {
        self.user_input
            .as_deref()
            .map(str::trim)
            .filter(|input| !input.is_empty())
    }
}

/// Service generating workflow documents
#[derive(Clone)]
pub struct DslGeneratorService {
    analyzer: Arc<dyn IntentAnalyzer>,
    default_language: Language,
}

impl std::fmt::Debug for DslGeneratorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DslGeneratorService")
            .field("default_language", &self.default_language)
            .finish_non_exhaustive()
    }
}

impl DslGeneratorService {
    pub fn new(analyzer: Arc<dyn IntentAnalyzer>) -> Self {
        Self {
            analyzer,
            default_language: Language::default(),
        }
    }

    /// Language used when a request does not name one
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    pub async fn generate(&self, request: GenerateRequest) -> Result<WorkflowDocument, DomainError> {
        let language = request.language.unwrap_or(self.default_language);

        if let Some(variables) = &request.params.variables {
            validate_variables(variables)?;
        }

        let (resolved, fallback_name) = match request.text() {
            Some(input) => {
                debug!(
                    "Resolving workflow parameters from text ({} chars)",
                    input.chars().count()
                );
                let analyzed = self.analyzer.analyze(input, language).await;
                (analyzed.or(request.params.clone()), TEXT_PATH_NAME)
            }
            None => (request.params.clone(), EXPLICIT_PATH_NAME),
        };

        let name = resolved
            .workflow_name
            .unwrap_or_else(|| fallback_name.to_string());
        let description = resolved.description.unwrap_or_default();
        let node_types = resolved
            .node_types
            .unwrap_or_else(|| vec![NodeKind::Llm, NodeKind::Answer]);
        let variables = resolved.variables.unwrap_or_default();

        let document =
            WorkflowDocument::assemble(name, description, &node_types, &variables, language);
        document
            .graph
            .validate()
            .map_err(|e| DomainError::internal(format!("Generated graph is invalid: {}", e)))?;

        info!(
            "Generated workflow '{}' ({} nodes, {} edges, language: {})",
            document.name,
            document.graph.nodes.len(),
            document.graph.edges.len(),
            language
        );

        Ok(document)
    }

    /// Generate from an untyped invocation object
    pub async fn generate_from_json(
        &self,
        value: serde_json::Value,
    ) -> Result<WorkflowDocument, DomainError> {
        let request: GenerateRequest = serde_json::from_value(value)
            .map_err(|e| DomainError::validation(format!("Invalid request: {}", e)))?;

        self.generate(request).await
    }
}

/// Caller-supplied variables must be named
fn validate_variables(variables: &[Variable]) -> Result<(), DomainError> {
    if let Some(index) = variables.iter().position(|v| v.name.trim().is_empty()) {
        return Err(DomainError::validation(format!(
            "Variable at index {} has no name",
            index
        )));
    }

    Ok(())
}
