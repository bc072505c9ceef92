//! Derives the ordered upstream context references for a task node.

use crate::graph::types::{Workflow, WorkflowNode};

/// Collect context strings for `task` from its incoming edges, in the
/// workflow's stored edge order.
///
/// Only agent, task and data-input sources contribute; every other source
/// kind is omitted from context. An empty result is an empty vec — the
/// converter drops the key entirely when nothing qualifies.
pub fn resolve_context(task: &WorkflowNode, workflow: &Workflow) -> Vec<String> {
    let mut context = Vec::new();

    for edge in &workflow.edges {
        if edge.target != task.id() {
            continue;
        }
        let Some(source) = workflow.node(&edge.source) else {
            // Dangling sources are rejected by the structural gate before
            // compilation reaches this point.
            continue;
        };
        match source {
            WorkflowNode::Agent(n) => context.push(format!("Agent: {}", n.name)),
            WorkflowNode::Task(n) => context.push(format!("Previous task: {}", n.name)),
            WorkflowNode::DataInput(n) => context.push(format!("Input: {}", n.name)),
            _ => {}
        }
    }

    context
}
