//! Parse phase: JSON → Rust types + structural index construction.

pub mod index;
pub mod types;

pub use index::WorkflowIndex;
pub use types::*;

use crate::error::CompileError;

/// Deserialize a workflow JSON string into a `Workflow` struct.
///
/// An unrecognized node kind fails here: the kind enumeration is closed, so
/// out-of-enumeration kinds are rejected loudly at construction time.
pub fn parse(json: &str) -> Result<Workflow, Vec<CompileError>> {
    serde_json::from_str::<Workflow>(json).map_err(|e| vec![CompileError::Parse(e.to_string())])
}

/// Parse JSON and build the structural index in one step.
pub fn parse_and_index(json: &str) -> Result<(Workflow, WorkflowIndex), Vec<CompileError>> {
    let workflow = parse(json)?;
    let index = WorkflowIndex::build(&workflow)?;
    Ok((workflow, index))
}
