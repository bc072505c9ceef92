#![allow(dead_code)]

use crew_compiler::graph::types::*;
use serde_json::Map;

// =============================================================================
// Workflow builders
// =============================================================================

pub fn workflow(nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Workflow {
    Workflow {
        id: "wf-1".into(),
        name: "Research Pipeline".into(),
        description: Some("Two-step research crew".into()),
        owner_id: Some("user-1".into()),
        version: 1,
        nodes,
        edges,
    }
}

pub fn base<C>(id: &str, name: &str, config: C) -> NodeBase<C> {
    NodeBase {
        id: id.into(),
        name: name.into(),
        position: Position { x: 0.0, y: 0.0 },
        data: Map::new(),
        config,
    }
}

// =============================================================================
// Node builders
// =============================================================================

pub fn agent(id: &str, name: &str, role: &str, goal: &str) -> WorkflowNode {
    WorkflowNode::Agent(base(
        id,
        name,
        AgentNodeConfig {
            role: Some(role.into()),
            goal: Some(goal.into()),
            ..Default::default()
        },
    ))
}

pub fn task(id: &str, name: &str, description: &str, expected_output: &str) -> WorkflowNode {
    WorkflowNode::Task(base(
        id,
        name,
        TaskNodeConfig {
            description: Some(description.into()),
            expected_output: Some(expected_output.into()),
            ..Default::default()
        },
    ))
}

pub fn tool(id: &str, name: &str) -> WorkflowNode {
    WorkflowNode::Tool(base(
        id,
        name,
        ToolNodeConfig {
            description: Some("Web search".into()),
            tool_type: Some("search".into()),
            ..Default::default()
        },
    ))
}

pub fn data_input(id: &str, name: &str) -> WorkflowNode {
    WorkflowNode::DataInput(base(id, name, InertNodeConfig::default()))
}

pub fn data_output(id: &str, name: &str) -> WorkflowNode {
    WorkflowNode::DataOutput(base(id, name, InertNodeConfig::default()))
}

pub fn webhook(id: &str, name: &str) -> WorkflowNode {
    WorkflowNode::Webhook(base(id, name, InertNodeConfig::default()))
}

pub fn conditional(id: &str, name: &str) -> WorkflowNode {
    WorkflowNode::Conditional(base(id, name, InertNodeConfig::default()))
}

// =============================================================================
// Edge builder
// =============================================================================

pub fn edge(id: &str, source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
        source_handle: None,
        target_handle: None,
        data: Map::new(),
    }
}

// =============================================================================
// Scenario: one agent feeding one task
// =============================================================================

/// Agent "Researcher" → Task "Summarize", the smallest valid crew.
pub fn researcher_summarize() -> Workflow {
    workflow(
        vec![
            agent("agent-1", "Researcher", "Analyst", "Find facts"),
            task("task-1", "Summarize", "Summarize findings", "A summary"),
        ],
        vec![edge("edge-1", "agent-1", "task-1")],
    )
}
