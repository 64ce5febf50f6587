//! Graph invariant violations

use thiserror::Error;

/// Structural problems detected in a workflow graph
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkflowError {
    #[error("Graph has no nodes")]
    EmptyGraph,

    #[error("First node must be '{expected}', found '{found}'")]
    MissingStart { expected: String, found: String },

    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),

    #[error("Edge '{edge}' references unknown node '{node}'")]
    DanglingEdge { edge: String, node: String },

    #[error("Edge '{edge}' breaks the chain: expected {expected}")]
    BrokenChain { edge: String, expected: String },

    #[error("Graph has {nodes} nodes but {edges} edges")]
    EdgeCount { nodes: usize, edges: usize },
}

impl WorkflowError {
    pub fn missing_start(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::MissingStart {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn duplicate_node_id(id: impl Into<String>) -> Self {
        Self::DuplicateNodeId(id.into())
    }

    pub fn dangling_edge(edge: impl Into<String>, node: impl Into<String>) -> Self {
        Self::DanglingEdge {
            edge: edge.into(),
            node: node.into(),
        }
    }

    pub fn broken_chain(edge: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::BrokenChain {
            edge: edge.into(),
            expected: expected.into(),
        }
    }
}
