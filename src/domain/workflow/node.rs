//! Graph nodes and their kind-specific payloads

use std::collections::BTreeMap;

use serde::Serialize;

use super::{NodeKind, VariableType};

/// Canvas coordinate of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A node in the workflow graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    /// Layout is left to the importer; generated nodes never carry one
    pub position: Option<Position>,
    pub data: NodeData,
}

impl Node {
    pub fn new(id: impl Into<String>, data: NodeData) -> Self {
        Self {
            id: id.into(),
            position: None,
            data,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.data.kind
    }

    pub fn title(&self) -> &str {
        &self.data.title
    }
}

/// Node payload: `title` and `type` followed by the kind-specific fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeData {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(flatten)]
    pub config: NodeConfig,
}

/// Kind-specific node configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeConfig {
    Start(StartConfig),
    End(EndConfig),
    Llm(LlmConfig),
    KnowledgeRetrieval(KnowledgeRetrievalConfig),
    HttpRequest(HttpRequestConfig),
    Code(CodeConfig),
    TemplateTransform(TemplateTransformConfig),
    Answer(AnswerConfig),
    IfElse(IfElseConfig),
    Iteration(IterationConfig),
    /// Unknown kinds carry nothing beyond `title` and `type`
    Empty(EmptyConfig),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmptyConfig {}

/// Binds a named variable to a `[node, field]` selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableSelector {
    pub variable: String,
    pub value_selector: Vec<String>,
}

impl VariableSelector {
    pub fn new(variable: impl Into<String>, value_selector: &[&str]) -> Self {
        Self {
            variable: variable.into(),
            value_selector: value_selector.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartConfig {
    pub variables: Vec<StartVariable>,
}

/// Input variable as declared on the start node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartVariable {
    pub variable: String,
    #[serde(rename = "type")]
    pub var_type: VariableType,
    pub required: bool,
    pub default: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndConfig {
    pub outputs: Vec<VariableSelector>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LlmConfig {
    pub model: ModelDescriptor,
    pub prompt_template: Vec<PromptMessage>,
    pub memory: MemoryConfig,
    pub context: ContextConfig,
    pub vision: VisionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub provider: String,
    pub name: String,
    pub mode: String,
    pub completion_params: CompletionParams,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionParams {
    pub temperature: f32,
    pub top_p: f32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptMessage {
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryConfig {
    pub role_prefix: Option<String>,
    pub window: MemoryWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryWindow {
    pub enabled: bool,
    pub max_messages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextConfig {
    pub enabled: bool,
    pub variable_selector: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisionConfig {
    pub enabled: bool,
    pub variable_selector: Option<Vec<String>>,
    pub configs: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeRetrievalConfig {
    pub query_variable_selector: Vec<String>,
    pub dataset_ids: Vec<String>,
    pub retrieval_mode: String,
    pub single_retrieval_config: Option<serde_json::Value>,
    pub multiple_retrieval_config: MultipleRetrievalConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultipleRetrievalConfig {
    pub top_k: u32,
    pub score_threshold: f32,
    pub reranking_model: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpRequestConfig {
    pub method: String,
    pub url: String,
    pub authorization: HttpAuthorization,
    pub headers: String,
    pub params: String,
    pub body: HttpBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpAuthorization {
    #[serde(rename = "type")]
    pub auth_type: String,
    pub config: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpBody {
    #[serde(rename = "type")]
    pub body_type: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeConfig {
    pub variables: Vec<VariableSelector>,
    pub code_language: String,
    pub code: String,
    pub outputs: BTreeMap<String, CodeOutput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeOutput {
    #[serde(rename = "type")]
    pub output_type: VariableType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateTransformConfig {
    pub variables: Vec<VariableSelector>,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerConfig {
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfElseConfig {
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    pub operator: String,
    pub left: Operand,
    pub right: Operand,
}

/// One side of an if-else comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Operand {
    Variable { value_selector: Vec<String> },
    Value { value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationConfig {
    pub iteration_type: String,
    pub for_each_config: ForEachConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForEachConfig {
    pub items_variable_selector: Vec<String>,
    pub item_variable: String,
}
