//! Compile phase: Workflow → CrewConfig.
//!
//! A pure function of the graph snapshot: no I/O, no shared state, and
//! byte-identical renderer input for structurally identical graphs.

pub mod context;
pub mod convert;
pub mod process;
pub mod types;

pub use types::*;

use indexmap::IndexMap;

use crate::error::CompileError;
use crate::graph::WorkflowIndex;
use crate::graph::types::{Workflow, WorkflowNode};

/// Compile a workflow graph into its canonical crew configuration.
pub fn compile(workflow: &Workflow) -> Result<CrewConfig, Vec<CompileError>> {
    // Structural gate: dangling edge endpoints abort compilation.
    WorkflowIndex::build(workflow)?;

    let mut config = CrewConfig {
        name: workflow.name.clone(),
        description: workflow.description.clone().unwrap_or_default(),
        agents: IndexMap::new(),
        tasks: IndexMap::new(),
        tools: IndexMap::new(),
        process: Process::Sequential,
        verbose: true,
    };

    for node in &workflow.nodes {
        match node {
            // Duplicate display names overwrite the earlier entry's value
            // while keeping its position in the mapping.
            WorkflowNode::Agent(n) => {
                config
                    .agents
                    .insert(n.name.clone(), convert::convert_agent(&n.config));
            }
            WorkflowNode::Task(n) => {
                let ctx = context::resolve_context(node, workflow);
                config
                    .tasks
                    .insert(n.name.clone(), convert::convert_task(&n.config, ctx));
            }
            WorkflowNode::Tool(n) => {
                config
                    .tools
                    .insert(n.name.clone(), convert::convert_tool(&n.name, &n.config));
            }
            // Structural kinds stay in the graph but compile to nothing.
            WorkflowNode::Conditional(_)
            | WorkflowNode::Loop(_)
            | WorkflowNode::DataInput(_)
            | WorkflowNode::DataOutput(_)
            | WorkflowNode::Integration(_)
            | WorkflowNode::Webhook(_) => {}
        }
    }

    config.process = process::classify_process(workflow);

    Ok(config)
}
