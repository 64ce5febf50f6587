//! Workflow-level feature flags

use serde::Serialize;

use super::{Language, NodeKind};

/// Feature block of a workflow document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSet {
    pub opening_statement: String,
    pub suggested_questions: Vec<String>,
    pub suggested_questions_after_answer: Vec<String>,
    pub speech_to_text: bool,
    pub text_to_speech: bool,
    pub file_upload: bool,
    pub sensitive_word_avoidance: bool,
    pub retriever_resource: RetrieverResource,
}

/// Serializes as `{"enabled": true}` when retrieval is used, `{}` otherwise
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RetrieverResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl RetrieverResource {
    pub fn is_enabled(&self) -> bool {
        self.enabled == Some(true)
    }
}

/// Derive the feature block from the requested node kinds
pub fn synthesize_features(node_types: &[NodeKind], language: Language) -> FeatureSet {
    let retriever_resource = if node_types.contains(&NodeKind::KnowledgeRetrieval) {
        RetrieverResource {
            enabled: Some(true),
        }
    } else {
        RetrieverResource::default()
    };

    let (opening_statement, suggested_questions) = match language {
        Language::Ja => (
            "こんにちは、どのようにお手伝いできますか？",
            ["質問例1", "質問例2"],
        ),
        Language::En => (
            "Hello, how can I help you today?",
            ["Example question 1", "Example question 2"],
        ),
    };

    FeatureSet {
        opening_statement: opening_statement.to_string(),
        suggested_questions: suggested_questions.iter().map(|q| q.to_string()).collect(),
        suggested_questions_after_answer: Vec::new(),
        speech_to_text: false,
        text_to_speech: false,
        file_upload: false,
        sensitive_word_avoidance: false,
        retriever_resource,
    }
}
