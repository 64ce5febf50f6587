//! Default node payloads
//!
//! Every kind gets a fixed placeholder payload. The result is a scaffold meant
//! to be refined afterwards, not a finished workflow.

use std::collections::BTreeMap;

use super::node::{
    AnswerConfig, CodeConfig, CodeOutput, CompletionParams, Condition, ContextConfig, EmptyConfig,
    EndConfig, ForEachConfig, HttpAuthorization, HttpBody, HttpRequestConfig, IfElseConfig,
    IterationConfig, KnowledgeRetrievalConfig, LlmConfig, MemoryConfig, MemoryWindow,
    ModelDescriptor, MultipleRetrievalConfig, Node, NodeConfig, NodeData, Operand, PromptMessage,
    StartConfig, StartVariable, TemplateTransformConfig, VariableSelector, VisionConfig,
};
use super::{Language, NodeKind, Variable, VariableType};

/// Fixed id of the entry node
pub const START_NODE_ID: &str = "start";

/// Fixed id of the automatically appended exit node
pub const END_NODE_ID: &str = "end";

/// Node id the end node and answer node read from when no llm node id is known
const DEFAULT_LLM_SOURCE: &str = "llm";

const SYSTEM_QUERY_SELECTOR: [&str; 2] = ["sys", "query"];

/// Builds nodes with localized titles and default payloads
#[derive(Debug, Clone, Copy)]
pub struct NodeFactory {
    language: Language,
}

impl NodeFactory {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Entry node declaring the workflow inputs.
    ///
    /// Every variable is declared required with an empty default, whatever
    /// the caller asked for.
    pub fn start(&self, variables: &[Variable]) -> Node {
        let variables = variables
            .iter()
            .map(|var| StartVariable {
                variable: var.name.clone(),
                var_type: var.var_type,
                required: true,
                default: String::new(),
            })
            .collect();

        self.node(
            START_NODE_ID,
            NodeKind::Start,
            NodeConfig::Start(StartConfig { variables }),
        )
    }

    /// Exit node surfacing the `text` output of `output_source`
    pub fn end(&self, id: impl Into<String>, output_source: Option<&str>) -> Node {
        let source = output_source.unwrap_or(DEFAULT_LLM_SOURCE);
        let config = EndConfig {
            outputs: vec![VariableSelector::new("result", &[source, "text"])],
        };

        self.node(id, NodeKind::End, NodeConfig::End(config))
    }

    /// Node of any kind with its default payload. Never fails: unknown kinds
    /// get a payload holding only `title` and `type`.
    ///
    /// A requested `end` is not the appended exit node: it carries no outputs
    /// and the untranslated title `END`.
    pub fn create(&self, kind: &NodeKind, id: impl Into<String>) -> Node {
        let config = match kind {
            NodeKind::Start => NodeConfig::Start(StartConfig {
                variables: Vec::new(),
            }),
            NodeKind::End => {
                let data = NodeData {
                    title: kind.as_str().to_uppercase(),
                    kind: NodeKind::End,
                    config: NodeConfig::Empty(EmptyConfig::default()),
                };
                return Node::new(id, data);
            }
            NodeKind::Llm => NodeConfig::Llm(llm_defaults()),
            NodeKind::KnowledgeRetrieval => {
                NodeConfig::KnowledgeRetrieval(knowledge_retrieval_defaults())
            }
            NodeKind::HttpRequest => NodeConfig::HttpRequest(http_request_defaults()),
            NodeKind::Code => NodeConfig::Code(code_defaults()),
            NodeKind::TemplateTransform => {
                NodeConfig::TemplateTransform(template_transform_defaults())
            }
            NodeKind::Answer => NodeConfig::Answer(AnswerConfig {
                answer: format!("{{{{#{}.text#}}}}", DEFAULT_LLM_SOURCE),
            }),
            NodeKind::IfElse => NodeConfig::IfElse(if_else_defaults()),
            NodeKind::Iteration => NodeConfig::Iteration(iteration_defaults()),
            NodeKind::Unknown(_) => NodeConfig::Empty(EmptyConfig::default()),
        };

        self.node(id, kind.clone(), config)
    }

    fn node(&self, id: impl Into<String>, kind: NodeKind, config: NodeConfig) -> Node {
        let data = NodeData {
            title: kind.title(self.language),
            kind,
            config,
        };
        Node::new(id, data)
    }
}

fn system_query() -> Vec<String> {
    SYSTEM_QUERY_SELECTOR.iter().map(|s| s.to_string()).collect()
}

fn llm_defaults() -> LlmConfig {
    LlmConfig {
        model: ModelDescriptor {
            provider: "openai".to_string(),
            name: "gpt-3.5-turbo".to_string(),
            mode: "chat".to_string(),
            completion_params: CompletionParams {
                temperature: 0.7,
                top_p: 1.0,
                presence_penalty: 0.0,
                frequency_penalty: 0.0,
                max_tokens: 1000,
            },
        },
        prompt_template: vec![PromptMessage {
            role: "user".to_string(),
            text: "{{#sys.query#}}".to_string(),
        }],
        memory: MemoryConfig {
            role_prefix: None,
            window: MemoryWindow {
                enabled: true,
                max_messages: 10,
            },
        },
        context: ContextConfig {
            enabled: false,
            variable_selector: None,
        },
        vision: VisionConfig {
            enabled: false,
            variable_selector: None,
            configs: None,
        },
    }
}

fn knowledge_retrieval_defaults() -> KnowledgeRetrievalConfig {
    KnowledgeRetrievalConfig {
        query_variable_selector: system_query(),
        dataset_ids: Vec::new(),
        retrieval_mode: "multiple".to_string(),
        single_retrieval_config: None,
        multiple_retrieval_config: MultipleRetrievalConfig {
            top_k: 3,
            score_threshold: 0.5,
            reranking_model: None,
        },
    }
}

fn http_request_defaults() -> HttpRequestConfig {
    HttpRequestConfig {
        method: "get".to_string(),
        url: "https://api.example.com".to_string(),
        authorization: HttpAuthorization {
            auth_type: "none".to_string(),
            config: serde_json::Map::new(),
        },
        headers: String::new(),
        params: String::new(),
        body: HttpBody {
            body_type: "none".to_string(),
            data: String::new(),
        },
    }
}

fn code_defaults() -> CodeConfig {
    let mut outputs = BTreeMap::new();
    outputs.insert(
        "result".to_string(),
        CodeOutput {
            output_type: VariableType::String,
        },
    );

    CodeConfig {
        variables: Vec::new(),
        code_language: "python3".to_string(),
        code: "def main():\n    return {'result': 'Hello, World!'}\n".to_string(),
        outputs,
    }
}

fn template_transform_defaults() -> TemplateTransformConfig {
    TemplateTransformConfig {
        variables: vec![VariableSelector::new("input", &SYSTEM_QUERY_SELECTOR)],
        template: "{{ input }}".to_string(),
    }
}

fn if_else_defaults() -> IfElseConfig {
    IfElseConfig {
        condition: Condition {
            operator: "==".to_string(),
            left: Operand::Variable {
                value_selector: system_query(),
            },
            right: Operand::Value {
                value: String::new(),
            },
        },
    }
}

fn iteration_defaults() -> IterationConfig {
    IterationConfig {
        iteration_type: "for-each".to_string(),
        for_each_config: ForEachConfig {
            items_variable_selector: system_query(),
            item_variable: "item".to_string(),
        },
    }
}
