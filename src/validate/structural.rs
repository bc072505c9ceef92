//! Whole-graph validation rules: required kinds, connectivity, self-loops.

use std::collections::HashSet;

use crate::graph::types::{NodeKind, Workflow};

/// A crew needs at least one agent and one task to run at all.
pub fn check_required_kinds(workflow: &Workflow, errors: &mut Vec<String>) {
    let has_agent = workflow.nodes.iter().any(|n| n.kind() == NodeKind::Agent);
    let has_task = workflow.nodes.iter().any(|n| n.kind() == NodeKind::Task);

    if !has_agent {
        errors.push("Workflow must contain at least one agent".to_string());
    }
    if !has_task {
        errors.push("Workflow must contain at least one task".to_string());
    }
}

/// Nodes that are an endpoint of no edge at all are reported as a single
/// aggregate count. Data I/O nodes are exempt: they are legitimately placed
/// before being wired up.
pub fn check_disconnected_nodes(workflow: &Workflow, warnings: &mut Vec<String>) {
    let mut connected: HashSet<&str> = HashSet::new();
    for edge in &workflow.edges {
        connected.insert(edge.source.as_str());
        connected.insert(edge.target.as_str());
    }

    let disconnected = workflow
        .nodes
        .iter()
        .filter(|n| {
            !connected.contains(n.id())
                && !matches!(n.kind(), NodeKind::DataInput | NodeKind::DataOutput)
        })
        .count();

    if disconnected > 0 {
        warnings.push(format!("Found {disconnected} disconnected nodes"));
    }
}

/// Self-loops are structurally legal but almost certainly a drawing mistake;
/// flag each one rather than compiling it away silently.
pub fn check_self_loops(workflow: &Workflow, warnings: &mut Vec<String>) {
    for edge in &workflow.edges {
        if edge.source == edge.target {
            warnings.push(format!(
                "Edge '{}' is a self-loop on node '{}'",
                edge.id, edge.source
            ));
        }
    }
}
