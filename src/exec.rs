//! Execution seam around the downstream crew engine.
//!
//! The engine is an independently-versioned external dependency that may be
//! unavailable at runtime. Hosts pick an `Executor` implementation once, at
//! process configuration time; business logic never branches on engine
//! availability itself.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::compile::types::CrewConfig;

/// Capability boundary to the multi-agent execution engine.
pub trait Executor: Send + Sync {
    fn execute(&self, config: &CrewConfig, inputs: &Map<String, Value>) -> ExecutionResult;
}

/// Result envelope returned by every executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,
    pub outputs: ExecutionOutputs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// True for synthetic results produced without a real engine.
    pub mock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutputs {
    pub raw: String,
    pub tasks_output: Vec<String>,
    pub token_usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub total: u64,
    pub prompt: u64,
    pub completion: u64,
}

/// Deterministic stand-in used when the crew engine is unavailable. Produces
/// a clearly-marked synthetic result; performs no I/O and never blocks.
pub struct StubExecutor;

impl Executor for StubExecutor {
    fn execute(&self, config: &CrewConfig, _inputs: &Map<String, Value>) -> ExecutionResult {
        ExecutionResult {
            success: true,
            outputs: ExecutionOutputs {
                raw: format!("Mock execution of workflow '{}'", config.name),
                tasks_output: config
                    .tasks
                    .keys()
                    .map(|task| format!("Mock output for task '{task}'"))
                    .collect(),
                token_usage: TokenUsage::default(),
            },
            error: None,
            mock: true,
        }
    }
}
