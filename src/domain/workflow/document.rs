//! Complete workflow document

use serde::Serialize;

use super::{synthesize_features, FeatureSet, Graph, GraphBuilder, Language, NodeKind, Variable};

/// Generated workflow: name, description, node graph and feature flags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowDocument {
    pub name: String,
    pub description: String,
    pub graph: Graph,
    pub features: FeatureSet,
}

impl WorkflowDocument {
    /// Build the graph and feature block for fully resolved parameters
    pub fn assemble(
        name: impl Into<String>,
        description: impl Into<String>,
        node_types: &[NodeKind],
        variables: &[Variable],
        language: Language,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            graph: GraphBuilder::new(language).build(node_types, variables),
            features: synthesize_features(node_types, language),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workflow::VariableType;

    #[test]
    fn test_assemble_is_deterministic() {
        let node_types = vec![NodeKind::KnowledgeRetrieval, NodeKind::Llm, NodeKind::Answer];
        let variables = vec![Variable::new("query", VariableType::String)];

        let first =
            WorkflowDocument::assemble("FAQ", "Answers FAQs", &node_types, &variables, Language::En);
        let second =
            WorkflowDocument::assemble("FAQ", "Answers FAQs", &node_types, &variables, Language::En);

        assert_eq!(first.to_json(true).unwrap(), second.to_json(true).unwrap());
        assert_eq!(first.to_json(false).unwrap(), second.to_json(false).unwrap());
    }

    #[test]
    fn test_top_level_shape() {
        let doc = WorkflowDocument::assemble("Test", "", &[], &[], Language::Ja);
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["name"], "Test");
        assert_eq!(value["description"], "");
        assert_eq!(value["graph"]["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(value["graph"]["edges"][0]["id"], "start-end");
        assert_eq!(value["graph"]["nodes"][0]["data"]["title"], "開始");
        assert_eq!(value["features"]["retriever_resource"], serde_json::json!({}));
    }
}
