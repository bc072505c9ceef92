//! Per-kind node converters: raw node config → canonical crew record.
//!
//! Pure transformations. Missing optional keys use the stated defaults;
//! optional keys are copied through only when present.

use super::types::{AgentSpec, TaskSpec, ToolSpec};
use crate::graph::types::{AgentNodeConfig, TaskNodeConfig, ToolNodeConfig};

pub fn convert_agent(config: &AgentNodeConfig) -> AgentSpec {
    AgentSpec {
        role: config.role.clone().unwrap_or_else(|| "AI Agent".to_string()),
        goal: config
            .goal
            .clone()
            .unwrap_or_else(|| "Complete assigned tasks".to_string()),
        backstory: config.backstory.clone().unwrap_or_default(),
        llm: config.llm_model.clone(),
        tools: config.tools.clone(),
        memory: config.memory,
        verbose: config.verbose,
    }
}

pub fn convert_task(config: &TaskNodeConfig, context: Vec<String>) -> TaskSpec {
    TaskSpec {
        description: config
            .description
            .clone()
            .unwrap_or_else(|| "Complete the assigned task".to_string()),
        expected_output: config
            .expected_output
            .clone()
            .unwrap_or_else(|| "Task results".to_string()),
        agent: config.agent.clone(),
        context,
        tools: config.tools.clone(),
        output_file: config.output_file.clone(),
    }
}

pub fn convert_tool(name: &str, config: &ToolNodeConfig) -> ToolSpec {
    ToolSpec {
        name: name.to_string(),
        description: config.description.clone().unwrap_or_default(),
        tool_type: config
            .tool_type
            .clone()
            .unwrap_or_else(|| "custom".to_string()),
        parameters: config.parameters.clone(),
        api_key: config.api_key.clone(),
    }
}
