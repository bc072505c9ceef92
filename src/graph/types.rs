//! Serde model of the visual workflow aggregate.
//!
//! These types are the serde target for the editor/persistence workflow JSON.
//! Node kinds form a closed tagged union: a kind outside the enumeration is
//! rejected at deserialization time rather than silently carried along.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// TOP-LEVEL WORKFLOW
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Owning principal, opaque to the compiler.
    #[serde(default)]
    pub owner_id: Option<String>,
    /// Bumped on every structural mutation.
    #[serde(default = "default_version")]
    pub version: u64,
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
}

fn default_version() -> u64 {
    1
}

impl Workflow {
    /// Look up a node by id.
    pub fn node(&self, node_id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id() == node_id)
    }

    pub fn add_node(&mut self, node: WorkflowNode) {
        self.nodes.push(node);
        self.version += 1;
    }

    pub fn add_edge(&mut self, edge: WorkflowEdge) {
        self.edges.push(edge);
        self.version += 1;
    }

    /// Remove a node and every edge touching it.
    pub fn remove_node(&mut self, node_id: &str) {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id() != node_id);
        if self.nodes.len() != before {
            self.edges
                .retain(|e| e.source != node_id && e.target != node_id);
            self.version += 1;
        }
    }

    pub fn remove_edge(&mut self, edge_id: &str) {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != edge_id);
        if self.edges.len() != before {
            self.version += 1;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Sub-port discriminators, opaque to the compiler.
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub target_handle: Option<String>,
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// Layout position. Presentational only: round-trips through serialization
/// but never affects compilation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

// =============================================================================
// NODE KINDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Agent,
    Task,
    Tool,
    Conditional,
    Loop,
    DataInput,
    DataOutput,
    Integration,
    Webhook,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Agent => "agent",
            NodeKind::Task => "task",
            NodeKind::Tool => "tool",
            NodeKind::Conditional => "conditional",
            NodeKind::Loop => "loop",
            NodeKind::DataInput => "data_input",
            NodeKind::DataOutput => "data_output",
            NodeKind::Integration => "integration",
            NodeKind::Webhook => "webhook",
        }
    }
}

// =============================================================================
// NODE BASE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeBase<C> {
    pub id: String,
    /// Display name. Non-empty, not required to be unique.
    pub name: String,
    pub position: Position,
    /// Free-form UI metadata, opaque to the compiler.
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default)]
    pub config: C,
}

// =============================================================================
// WORKFLOW NODE — tagged union over the 9 node kinds
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkflowNode {
    #[serde(rename = "agent")]
    Agent(NodeBase<AgentNodeConfig>),
    #[serde(rename = "task")]
    Task(NodeBase<TaskNodeConfig>),
    #[serde(rename = "tool")]
    Tool(NodeBase<ToolNodeConfig>),
    #[serde(rename = "conditional")]
    Conditional(NodeBase<InertNodeConfig>),
    #[serde(rename = "loop")]
    Loop(NodeBase<InertNodeConfig>),
    #[serde(rename = "data_input")]
    DataInput(NodeBase<InertNodeConfig>),
    #[serde(rename = "data_output")]
    DataOutput(NodeBase<InertNodeConfig>),
    #[serde(rename = "integration")]
    Integration(NodeBase<InertNodeConfig>),
    #[serde(rename = "webhook")]
    Webhook(NodeBase<InertNodeConfig>),
}

impl WorkflowNode {
    pub fn id(&self) -> &str {
        match self {
            WorkflowNode::Agent(n) => &n.id,
            WorkflowNode::Task(n) => &n.id,
            WorkflowNode::Tool(n) => &n.id,
            WorkflowNode::Conditional(n) => &n.id,
            WorkflowNode::Loop(n) => &n.id,
            WorkflowNode::DataInput(n) => &n.id,
            WorkflowNode::DataOutput(n) => &n.id,
            WorkflowNode::Integration(n) => &n.id,
            WorkflowNode::Webhook(n) => &n.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            WorkflowNode::Agent(n) => &n.name,
            WorkflowNode::Task(n) => &n.name,
            WorkflowNode::Tool(n) => &n.name,
            WorkflowNode::Conditional(n) => &n.name,
            WorkflowNode::Loop(n) => &n.name,
            WorkflowNode::DataInput(n) => &n.name,
            WorkflowNode::DataOutput(n) => &n.name,
            WorkflowNode::Integration(n) => &n.name,
            WorkflowNode::Webhook(n) => &n.name,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            WorkflowNode::Agent(n) => n.position,
            WorkflowNode::Task(n) => n.position,
            WorkflowNode::Tool(n) => n.position,
            WorkflowNode::Conditional(n) => n.position,
            WorkflowNode::Loop(n) => n.position,
            WorkflowNode::DataInput(n) => n.position,
            WorkflowNode::DataOutput(n) => n.position,
            WorkflowNode::Integration(n) => n.position,
            WorkflowNode::Webhook(n) => n.position,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            WorkflowNode::Agent(_) => NodeKind::Agent,
            WorkflowNode::Task(_) => NodeKind::Task,
            WorkflowNode::Tool(_) => NodeKind::Tool,
            WorkflowNode::Conditional(_) => NodeKind::Conditional,
            WorkflowNode::Loop(_) => NodeKind::Loop,
            WorkflowNode::DataInput(_) => NodeKind::DataInput,
            WorkflowNode::DataOutput(_) => NodeKind::DataOutput,
            WorkflowNode::Integration(_) => NodeKind::Integration,
            WorkflowNode::Webhook(_) => NodeKind::Webhook,
        }
    }
}

// =============================================================================
// KIND-SPECIFIC CONFIGS
// =============================================================================
//
// Each config is a fixed set of named optional fields plus a residual opaque
// map, so unknown keys survive a round-trip instead of being dropped.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentNodeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backstory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskNodeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    /// Name of the agent this task is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolNodeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    /// Credential reference, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Config for the structural kinds the compiler leaves inert
/// (conditional, loop, data I/O, integration, webhook).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InertNodeConfig {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
