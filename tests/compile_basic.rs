//! Integration tests for compilation: converter dispatch, context resolution,
//! duplicate-name handling, structural errors.

mod helpers;

use crew_compiler::compile::{Process, compile};
use crew_compiler::error::CompileError;
use crew_compiler::graph::types::*;
use helpers::*;

#[test]
fn agent_feeding_task_compiles_with_context() {
    let config = compile(&researcher_summarize()).expect("Should compile");

    assert_eq!(config.name, "Research Pipeline");
    assert_eq!(config.process, Process::Sequential);
    assert!(config.verbose);

    let agent = &config.agents["Researcher"];
    assert_eq!(agent.role, "Analyst");
    assert_eq!(agent.goal, "Find facts");
    assert_eq!(agent.backstory, "");
    assert_eq!(agent.llm, None);

    let task = &config.tasks["Summarize"];
    assert_eq!(task.description, "Summarize findings");
    assert_eq!(task.expected_output, "A summary");
    assert_eq!(task.context, vec!["Agent: Researcher"]);
}

#[test]
fn compiled_config_snapshot() {
    let config = compile(&researcher_summarize()).expect("Should compile");
    insta::assert_json_snapshot!(config, @r#"
    {
      "name": "Research Pipeline",
      "description": "Two-step research crew",
      "agents": {
        "Researcher": {
          "role": "Analyst",
          "goal": "Find facts",
          "backstory": ""
        }
      },
      "tasks": {
        "Summarize": {
          "description": "Summarize findings",
          "expected_output": "A summary",
          "context": [
            "Agent: Researcher"
          ]
        }
      },
      "tools": {},
      "process": "sequential",
      "verbose": true
    }
    "#);
}

#[test]
fn missing_config_fields_use_defaults() {
    let wf = workflow(
        vec![
            WorkflowNode::Agent(base("agent-1", "Helper", AgentNodeConfig::default())),
            WorkflowNode::Task(base("task-1", "Work", TaskNodeConfig::default())),
            WorkflowNode::Tool(base("tool-1", "Gadget", ToolNodeConfig::default())),
        ],
        vec![],
    );
    let config = compile(&wf).expect("Should compile");

    let agent = &config.agents["Helper"];
    assert_eq!(agent.role, "AI Agent");
    assert_eq!(agent.goal, "Complete assigned tasks");
    assert_eq!(agent.backstory, "");

    let task = &config.tasks["Work"];
    assert_eq!(task.description, "Complete the assigned task");
    assert_eq!(task.expected_output, "Task results");
    assert!(task.context.is_empty());

    let tool = &config.tools["Gadget"];
    assert_eq!(tool.name, "Gadget");
    assert_eq!(tool.description, "");
    assert_eq!(tool.tool_type, "custom");
}

#[test]
fn optional_fields_pass_through_when_present() {
    let wf = workflow(
        vec![
            WorkflowNode::Agent(base(
                "agent-1",
                "Researcher",
                AgentNodeConfig {
                    role: Some("Analyst".into()),
                    goal: Some("Find facts".into()),
                    backstory: Some("Veteran analyst".into()),
                    llm_model: Some("gpt-4".into()),
                    tools: Some(vec!["search".into()]),
                    memory: Some(false),
                    verbose: Some(true),
                    ..Default::default()
                },
            )),
            WorkflowNode::Task(base(
                "task-1",
                "Summarize",
                TaskNodeConfig {
                    description: Some("Summarize findings".into()),
                    expected_output: Some("A summary".into()),
                    agent: Some("Researcher".into()),
                    tools: Some(vec![]),
                    output_file: Some("summary.md".into()),
                    ..Default::default()
                },
            )),
        ],
        vec![],
    );
    let config = compile(&wf).expect("Should compile");

    let agent = &config.agents["Researcher"];
    assert_eq!(agent.llm.as_deref(), Some("gpt-4"));
    assert_eq!(agent.tools.as_deref(), Some(&["search".to_string()][..]));
    // Presence gates emission, not truthiness.
    assert_eq!(agent.memory, Some(false));
    assert_eq!(agent.verbose, Some(true));

    let task = &config.tasks["Summarize"];
    assert_eq!(task.agent.as_deref(), Some("Researcher"));
    assert_eq!(task.tools.as_deref(), Some(&[][..]));
    assert_eq!(task.output_file.as_deref(), Some("summary.md"));
}

#[test]
fn context_collects_agent_task_and_input_sources_in_edge_order() {
    let wf = workflow(
        vec![
            agent("agent-1", "Researcher", "Analyst", "Find facts"),
            task("task-1", "Gather", "Gather data", "Raw data"),
            task("task-2", "Summarize", "Summarize findings", "A summary"),
            data_input("input-1", "Topic"),
            webhook("hook-1", "Notify"),
        ],
        vec![
            edge("edge-1", "agent-1", "task-2"),
            edge("edge-2", "task-1", "task-2"),
            edge("edge-3", "input-1", "task-2"),
            // Webhook sources contribute no context.
            edge("edge-4", "hook-1", "task-2"),
        ],
    );
    let config = compile(&wf).expect("Should compile");

    assert_eq!(
        config.tasks["Summarize"].context,
        vec!["Agent: Researcher", "Previous task: Gather", "Input: Topic"]
    );
}

#[test]
fn task_with_no_qualifying_edges_gets_empty_context() {
    let wf = workflow(
        vec![
            agent("agent-1", "Researcher", "Analyst", "Find facts"),
            task("task-1", "Summarize", "Summarize findings", "A summary"),
            webhook("hook-1", "Notify"),
        ],
        vec![edge("edge-1", "hook-1", "task-1")],
    );
    let config = compile(&wf).expect("Should compile");
    assert!(config.tasks["Summarize"].context.is_empty());
}

#[test]
fn inert_kinds_are_excluded_from_the_crew() {
    let wf = workflow(
        vec![
            agent("agent-1", "Researcher", "Analyst", "Find facts"),
            task("task-1", "Summarize", "Summarize findings", "A summary"),
            conditional("cond-1", "Branch"),
            data_input("input-1", "Topic"),
            data_output("output-1", "Report"),
            webhook("hook-1", "Notify"),
        ],
        vec![],
    );
    let config = compile(&wf).expect("Should compile");

    assert_eq!(config.agents.len(), 1);
    assert_eq!(config.tasks.len(), 1);
    assert!(config.tools.is_empty());
}

#[test]
fn duplicate_names_overwrite_keeping_first_position() {
    let wf = workflow(
        vec![
            agent("agent-1", "Helper", "First role", "First goal"),
            agent("agent-2", "Scout", "Scout role", "Scout goal"),
            agent("agent-3", "Helper", "Second role", "Second goal"),
            task("task-1", "Summarize", "Summarize findings", "A summary"),
        ],
        vec![],
    );
    let config = compile(&wf).expect("Should compile");

    assert_eq!(config.agents.len(), 2);
    // Second "Helper" wins, but keeps the first insertion position.
    let names: Vec<&String> = config.agents.keys().collect();
    assert_eq!(names, vec!["Helper", "Scout"]);
    assert_eq!(config.agents["Helper"].role, "Second role");
    assert_eq!(config.agents["Helper"].goal, "Second goal");
}

#[test]
fn dangling_edge_target_aborts_compilation() {
    let mut wf = researcher_summarize();
    wf.add_edge(edge("edge-2", "task-1", "ghost"));

    let errors = compile(&wf).unwrap_err();
    assert_eq!(
        errors,
        vec![CompileError::DanglingTarget {
            edge_id: "edge-2".into(),
            node_id: "ghost".into(),
        }]
    );
}

#[test]
fn dangling_edge_source_aborts_compilation() {
    let mut wf = researcher_summarize();
    wf.add_edge(edge("edge-2", "ghost", "task-1"));

    let errors = compile(&wf).unwrap_err();
    assert_eq!(
        errors,
        vec![CompileError::DanglingSource {
            edge_id: "edge-2".into(),
            node_id: "ghost".into(),
        }]
    );
}

#[test]
fn compile_is_deterministic() {
    let wf = researcher_summarize();
    let a = compile(&wf).expect("Should compile");
    let b = compile(&wf).expect("Should compile");
    assert_eq!(a, b);
}

#[test]
fn missing_description_compiles_to_empty_string() {
    let mut wf = researcher_summarize();
    wf.description = None;
    let config = compile(&wf).expect("Should compile");
    assert_eq!(config.description, "");
}
