//! Structured workflow parameters

use serde::{Deserialize, Serialize};

use crate::domain::workflow::{Language, NodeKind, Variable, VariableType};

/// Workflow parameters, either extracted from free text or given explicitly.
///
/// Every field is optional so that a partial model reply can be completed
/// from the caller's explicit values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_types: Option<Vec<NodeKind>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<Variable>>,
}

impl IntentConfig {
    /// Basic question-answering pipeline used whenever analysis fails
    pub fn default_for(language: Language) -> Self {
        let (name, description, variable) = match language {
            Language::Ja => ("基本ワークフロー", "基本的な質問応答ワークフロー", "質問"),
            Language::En => ("Basic Workflow", "A basic question-answering workflow", "query"),
        };

        Self {
            workflow_name: Some(name.to_string()),
            description: Some(description.to_string()),
            node_types: Some(vec![NodeKind::Llm, NodeKind::Answer]),
            variables: Some(vec![Variable::new(variable, VariableType::String)]),
        }
    }

    pub fn with_workflow_name(mut self, name: impl Into<String>) -> Self {
        self.workflow_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_node_types(mut self, node_types: Vec<NodeKind>) -> Self {
        self.node_types = Some(node_types);
        self
    }

    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Fill every missing field from `fallback`; present fields win
    pub fn or(self, fallback: IntentConfig) -> Self {
        Self {
            workflow_name: self.workflow_name.or(fallback.workflow_name),
            description: self.description.or(fallback.description),
            node_types: self.node_types.or(fallback.node_types),
            variables: self.variables.or(fallback.variables),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_for_english() {
        let config = IntentConfig::default_for(Language::En);

        assert_eq!(config.workflow_name.as_deref(), Some("Basic Workflow"));
        assert_eq!(
            config.node_types,
            Some(vec![NodeKind::Llm, NodeKind::Answer])
        );
        assert_eq!(
            config.variables,
            Some(vec![Variable::new("query", VariableType::String)])
        );
    }

    #[test]
    fn test_default_for_japanese() {
        let config = IntentConfig::default_for(Language::Ja);

        assert_eq!(config.workflow_name.as_deref(), Some("基本ワークフロー"));
        assert_eq!(config.description.as_deref(), Some("基本的な質問応答ワークフロー"));
        assert_eq!(config.variables.unwrap()[0].name, "質問");
    }

    #[test]
    fn test_or_keeps_present_fields() {
        let resolved = IntentConfig::default()
            .with_workflow_name("From model")
            .with_node_types(vec![NodeKind::Code]);
        let explicit = IntentConfig::default()
            .with_workflow_name("Explicit")
            .with_description("Explicit description")
            .with_node_types(vec![NodeKind::Llm]);

        let merged = resolved.or(explicit);

        assert_eq!(merged.workflow_name.as_deref(), Some("From model"));
        assert_eq!(merged.description.as_deref(), Some("Explicit description"));
        assert_eq!(merged.node_types, Some(vec![NodeKind::Code]));
        assert_eq!(merged.variables, None);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: IntentConfig =
            serde_json::from_str(r#"{"workflow_name": "Only a name"}"#).unwrap();

        assert_eq!(config.workflow_name.as_deref(), Some("Only a name"));
        assert!(config.node_types.is_none());
        assert!(config.variables.is_none());
    }
}
