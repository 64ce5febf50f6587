//! Node kind tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Language;

/// Kind of a processing node in a workflow graph.
///
/// Tags outside the known set are preserved in `Unknown` so that a node
/// can still be emitted with a minimal payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Start,
    End,
    Llm,
    KnowledgeRetrieval,
    HttpRequest,
    Code,
    TemplateTransform,
    Answer,
    IfElse,
    Iteration,
    Unknown(String),
}

impl NodeKind {
    /// Every known kind, in the order they are offered to the model
    pub const KNOWN: [NodeKind; 10] = [
        NodeKind::Start,
        NodeKind::End,
        NodeKind::Llm,
        NodeKind::KnowledgeRetrieval,
        NodeKind::HttpRequest,
        NodeKind::Code,
        NodeKind::TemplateTransform,
        NodeKind::Answer,
        NodeKind::IfElse,
        NodeKind::Iteration,
    ];

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "start" => Self::Start,
            "end" => Self::End,
            "llm" => Self::Llm,
            "knowledge-retrieval" => Self::KnowledgeRetrieval,
            "http-request" => Self::HttpRequest,
            "code" => Self::Code,
            "template-transform" => Self::TemplateTransform,
            "answer" => Self::Answer,
            "if-else" => Self::IfElse,
            "iteration" => Self::Iteration,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Llm => "llm",
            Self::KnowledgeRetrieval => "knowledge-retrieval",
            Self::HttpRequest => "http-request",
            Self::Code => "code",
            Self::TemplateTransform => "template-transform",
            Self::Answer => "answer",
            Self::IfElse => "if-else",
            Self::Iteration => "iteration",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Localized display title for nodes of this kind
    pub fn title(&self, language: Language) -> String {
        let (en, ja) = match self {
            Self::Start => ("START", "開始"),
            Self::End => ("END", "終了"),
            Self::Llm => ("LLM", "言語モデル"),
            Self::KnowledgeRetrieval => ("KNOWLEDGE RETRIEVAL", "知識検索"),
            Self::HttpRequest => ("HTTP REQUEST", "HTTPリクエスト"),
            Self::Code => ("CODE", "コード"),
            Self::TemplateTransform => ("TEMPLATE TRANSFORM", "テンプレート変換"),
            Self::Answer => ("ANSWER", "回答"),
            Self::IfElse => ("IF-ELSE", "条件分岐"),
            Self::Iteration => ("ITERATION", "繰り返し"),
            Self::Unknown(tag) => return tag.to_uppercase(),
        };
        language.pick(en, ja).to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}
