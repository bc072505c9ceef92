//! Whole-graph process classification: sequential vs hierarchical.

use super::types::Process;
use crate::graph::types::{NodeKind, Workflow};

/// Classify the execution process from the edge kind-pairs present.
///
/// Any task→agent edge wins: tasks delegating work back to agents means a
/// hierarchical crew. Task→task chaining alone stays sequential, as does a
/// graph with neither signal. Agent→task fan-out never influences the
/// decision. Only the set of pairs present matters, so edge order is
/// irrelevant.
pub fn classify_process(workflow: &Workflow) -> Process {
    let mut task_to_task = 0usize;
    let mut task_to_agent = 0usize;

    for edge in &workflow.edges {
        let source = workflow.node(&edge.source).map(|n| n.kind());
        let target = workflow.node(&edge.target).map(|n| n.kind());

        match (source, target) {
            (Some(NodeKind::Task), Some(NodeKind::Agent)) => task_to_agent += 1,
            (Some(NodeKind::Task), Some(NodeKind::Task)) => task_to_task += 1,
            _ => {}
        }
    }

    if task_to_agent > 0 {
        Process::Hierarchical
    } else if task_to_task > 0 {
        // Explicit task chaining.
        Process::Sequential
    } else {
        // Default.
        Process::Sequential
    }
}
