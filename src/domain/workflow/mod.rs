//! Workflow document domain module
//!
//! Generated documents follow the Dify workflow DSL shape:
//! - `graph.nodes`: `start` first, then one node per requested kind, then `end`
//! - `graph.edges`: one edge per consecutive node pair, id `source-target`
//! - `features`: opening statement, suggested questions and feature flags
//!
//! Node ids are `{kind}_{index}` except the fixed `start` and `end` ids.

mod document;
mod error;
mod features;
mod graph;
mod language;
mod node;
mod node_factory;
mod node_kind;
mod variable;

pub use document::WorkflowDocument;
pub use error::WorkflowError;
pub use features::{synthesize_features, FeatureSet, RetrieverResource};
pub use graph::{Edge, Graph, GraphBuilder};
pub use language::Language;
pub use node::{
    AnswerConfig, CodeConfig, CodeOutput, CompletionParams, Condition, ContextConfig, EmptyConfig,
    EndConfig, ForEachConfig, HttpAuthorization, HttpBody, HttpRequestConfig, IfElseConfig,
    IterationConfig, KnowledgeRetrievalConfig, LlmConfig, MemoryConfig, MemoryWindow,
    ModelDescriptor, MultipleRetrievalConfig, Node, NodeConfig, NodeData, Operand, Position,
    PromptMessage, StartConfig, StartVariable, TemplateTransformConfig, VariableSelector,
    VisionConfig,
};
pub use node_factory::{NodeFactory, END_NODE_ID, START_NODE_ID};
pub use node_kind::NodeKind;
pub use variable::{Variable, VariableType};
