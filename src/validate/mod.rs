//! Graph validation: pre-flight checks independent of compilation.
//!
//! Validation never mutates the graph and never gates compilation itself;
//! callers are expected to check `valid` before allowing execution or export.

pub mod node_rules;
pub mod structural;

use serde::{Deserialize, Serialize};

use crate::graph::types::Workflow;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validate the entire workflow graph (structural + node configs).
pub fn validate(workflow: &Workflow) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    structural::check_required_kinds(workflow, &mut errors);
    for node in &workflow.nodes {
        node_rules::check_node_config(node, &mut errors);
    }
    structural::check_disconnected_nodes(workflow, &mut warnings);
    structural::check_self_loops(workflow, &mut warnings);

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}
