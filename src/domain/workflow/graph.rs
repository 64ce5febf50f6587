//! Graph assembly
//!
//! Nodes are wired as a single linear chain in request order. Kinds that
//! branch or loop (`if-else`, `iteration`) still get exactly one inbound and
//! one outbound edge; the result is a scaffold to be rewired by hand.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::node_factory::{END_NODE_ID, START_NODE_ID};
use super::{Language, Node, NodeFactory, NodeKind, Variable, WorkflowError};

/// Directed edge between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{}-{}", source, target),
            source,
            target,
        }
    }
}

/// Ordered nodes and edges of a workflow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    /// Last node of the chain
    pub fn terminal_node(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// Check that ids are unique, edges only reference known nodes, and the
    /// edges form one chain from `start` through every node in order.
    pub fn validate(&self) -> Result<(), WorkflowError> {
        let first = self.nodes.first().ok_or(WorkflowError::EmptyGraph)?;
        if first.id != START_NODE_ID {
            return Err(WorkflowError::missing_start(START_NODE_ID, &first.id));
        }

        let mut seen = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(WorkflowError::duplicate_node_id(&node.id));
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !seen.contains(endpoint.as_str()) {
                    return Err(WorkflowError::dangling_edge(&edge.id, endpoint));
                }
            }
        }

        if self.edges.len() + 1 != self.nodes.len() {
            return Err(WorkflowError::EdgeCount {
                nodes: self.nodes.len(),
                edges: self.edges.len(),
            });
        }

        for (edge, pair) in self.edges.iter().zip(self.nodes.windows(2)) {
            if edge.source != pair[0].id || edge.target != pair[1].id {
                return Err(WorkflowError::broken_chain(
                    &edge.id,
                    format!("{} -> {}", pair[0].id, pair[1].id),
                ));
            }
        }

        Ok(())
    }
}

/// Assembles the node chain for a sequence of requested kinds
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    factory: NodeFactory,
}

impl GraphBuilder {
    pub fn new(language: Language) -> Self {
        Self {
            factory: NodeFactory::new(language),
        }
    }

    /// Build the graph. Never fails; an empty sequence yields `start -> end`.
    ///
    /// Node ids are `{kind}_{index}` where index is the position in
    /// `node_types`. A requested `start` is skipped since the start node is
    /// always emitted first. A requested `end` is emitted like any other kind
    /// and suppresses the automatic `end` node, wherever it appears.
    pub fn build(&self, node_types: &[NodeKind], variables: &[Variable]) -> Graph {
        let start = self.factory.start(variables);
        let mut previous_id = start.id.clone();
        let mut nodes = vec![start];
        let mut edges = Vec::with_capacity(node_types.len() + 1);
        let mut last_llm_id: Option<String> = None;

        for (index, kind) in node_types.iter().enumerate() {
            if *kind == NodeKind::Start {
                continue;
            }

            let node_id = format!("{}_{}", kind, index);
            let node = self.factory.create(kind, node_id.clone());
            if *kind == NodeKind::Llm {
                last_llm_id = Some(node_id.clone());
            }

            edges.push(Edge::between(&previous_id, &node_id));
            nodes.push(node);
            previous_id = node_id;
        }

        if !node_types.contains(&NodeKind::End) {
            let end = self.factory.end(END_NODE_ID, last_llm_id.as_deref());
            edges.push(Edge::between(&previous_id, &end.id));
            nodes.push(end);
        } else {
            debug!("Explicit end requested; not appending the fixed end node");
        }

        Graph { nodes, edges }
    }
}
