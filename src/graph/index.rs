//! petgraph-based directed index over the visual workflow.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::Workflow;
use crate::error::CompileError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLabel {
    pub edge_id: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

#[derive(Debug)]
pub struct WorkflowIndex {
    pub graph: DiGraph<String, EdgeLabel>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl WorkflowIndex {
    /// Build the index. A dangling edge endpoint is a hard error, never a
    /// silently skipped edge.
    pub fn build(workflow: &Workflow) -> Result<Self, Vec<CompileError>> {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut errors = Vec::new();

        for node in &workflow.nodes {
            let id = node.id().to_string();
            let idx = graph.add_node(id.clone());
            node_indices.insert(id, idx);
        }

        for edge in &workflow.edges {
            let source_idx = node_indices.get(&edge.source);
            let target_idx = node_indices.get(&edge.target);

            match (source_idx, target_idx) {
                (Some(&s), Some(&t)) => {
                    graph.add_edge(
                        s,
                        t,
                        EdgeLabel {
                            edge_id: edge.id.clone(),
                            source_handle: edge.source_handle.clone(),
                            target_handle: edge.target_handle.clone(),
                        },
                    );
                }
                (None, _) => {
                    errors.push(CompileError::DanglingSource {
                        edge_id: edge.id.clone(),
                        node_id: edge.source.clone(),
                    });
                }
                (_, None) => {
                    errors.push(CompileError::DanglingTarget {
                        edge_id: edge.id.clone(),
                        node_id: edge.target.clone(),
                    });
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(WorkflowIndex {
            graph,
            node_indices,
        })
    }

    pub fn successors(&self, node_id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .map(|n| self.graph[n].as_str())
            .collect()
    }

    pub fn predecessors(&self, node_id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .map(|n| self.graph[n].as_str())
            .collect()
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        self.predecessors(node_id).len()
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        self.successors(node_id).len()
    }

    /// True if the node appears as an endpoint of at least one edge.
    pub fn is_connected(&self, node_id: &str) -> bool {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return false;
        };
        self.graph.neighbors_undirected(idx).next().is_some()
    }
}
