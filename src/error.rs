//! Unified compiler error type used across all phases.

use thiserror::Error;

/// A compilation failure. These propagate synchronously to the caller as
/// discriminated values; the compiler never returns a partial configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("Failed to parse workflow JSON: {0}")]
    Parse(String),

    #[error("Edge '{edge_id}' references unknown source node '{node_id}'")]
    DanglingSource { edge_id: String, node_id: String },

    #[error("Edge '{edge_id}' references unknown target node '{node_id}'")]
    DanglingTarget { edge_id: String, node_id: String },
}

impl CompileError {
    /// Stable discriminator string for host-facing error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CompileError::Parse(_) => "parse",
            CompileError::DanglingSource { .. } | CompileError::DanglingTarget { .. } => {
                "structural"
            }
        }
    }
}
