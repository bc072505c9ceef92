//! Per-node required-field rules for agent and task configs.

use crate::graph::types::WorkflowNode;

/// Check one node's configuration. Other kinds carry no required fields.
pub fn check_node_config(node: &WorkflowNode, errors: &mut Vec<String>) {
    match node {
        WorkflowNode::Agent(n) => {
            if is_blank(&n.config.role) {
                errors.push(format!("Agent '{}' must have a role", n.name));
            }
            if is_blank(&n.config.goal) {
                errors.push(format!("Agent '{}' must have a goal", n.name));
            }
        }
        WorkflowNode::Task(n) => {
            if is_blank(&n.config.description) {
                errors.push(format!("Task '{}' must have a description", n.name));
            }
            if is_blank(&n.config.expected_output) {
                errors.push(format!("Task '{}' must have expected output", n.name));
            }
        }
        _ => {}
    }
}

/// Missing and empty both count as blank.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
