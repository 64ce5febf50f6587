//! Domain layer - Core entities, traits and pure generation logic

pub mod error;
pub mod intent;
pub mod llm;
pub mod workflow;

pub use error::DomainError;
pub use intent::{
    FallbackIntentAnalyzer, FallbackReason, IntentAnalysis, IntentAnalyzer, IntentConfig,
    IntentSource,
};
pub use llm::{LlmProvider, LlmRequest, LlmResponse, Message, MessageRole};
pub use workflow::{
    Edge, FeatureSet, Graph, GraphBuilder, Language, Node, NodeFactory, NodeKind, Variable,
    VariableType, WorkflowDocument, WorkflowError,
};
