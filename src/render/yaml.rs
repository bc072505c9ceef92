//! Declarative renderer: CrewConfig → YAML document.
//!
//! Hand-emitted block-style YAML with a fixed top-level key order:
//! name, description, agents, tasks, tools, process, verbose. Mapping keys
//! preserve compilation insertion order. Output is stable across repeated
//! calls on the same input.

use serde_json::Value;

use super::writer::CodeWriter;
use crate::compile::types::{AgentSpec, CrewConfig, TaskSpec, ToolSpec};

pub fn render_yaml(config: &CrewConfig) -> String {
    let mut w = CodeWriter::new("  ");

    w.line(&format!("name: {}", scalar(&config.name)));
    w.line(&format!("description: {}", scalar(&config.description)));

    if config.agents.is_empty() {
        w.line("agents: {}");
    } else {
        w.line("agents:");
        w.indent();
        for (name, agent) in &config.agents {
            w.line(&format!("{}:", scalar(name)));
            w.indent();
            emit_agent(agent, &mut w);
            w.dedent();
        }
        w.dedent();
    }

    if config.tasks.is_empty() {
        w.line("tasks: {}");
    } else {
        w.line("tasks:");
        w.indent();
        for (name, task) in &config.tasks {
            w.line(&format!("{}:", scalar(name)));
            w.indent();
            emit_task(task, &mut w);
            w.dedent();
        }
        w.dedent();
    }

    if config.tools.is_empty() {
        w.line("tools: {}");
    } else {
        w.line("tools:");
        w.indent();
        for (name, tool) in &config.tools {
            w.line(&format!("{}:", scalar(name)));
            w.indent();
            emit_tool(tool, &mut w);
            w.dedent();
        }
        w.dedent();
    }

    w.line(&format!("process: {}", config.process.as_str()));
    w.line(&format!("verbose: {}", config.verbose));

    w.finish()
}

fn emit_agent(agent: &AgentSpec, w: &mut CodeWriter) {
    w.line(&format!("role: {}", scalar(&agent.role)));
    w.line(&format!("goal: {}", scalar(&agent.goal)));
    w.line(&format!("backstory: {}", scalar(&agent.backstory)));
    if let Some(llm) = &agent.llm {
        w.line(&format!("llm: {}", scalar(llm)));
    }
    if let Some(tools) = &agent.tools {
        emit_string_seq("tools", tools, w);
    }
    if let Some(memory) = agent.memory {
        w.line(&format!("memory: {memory}"));
    }
    if let Some(verbose) = agent.verbose {
        w.line(&format!("verbose: {verbose}"));
    }
}

fn emit_task(task: &TaskSpec, w: &mut CodeWriter) {
    w.line(&format!("description: {}", scalar(&task.description)));
    w.line(&format!("expected_output: {}", scalar(&task.expected_output)));
    if let Some(agent) = &task.agent {
        w.line(&format!("agent: {}", scalar(agent)));
    }
    if !task.context.is_empty() {
        emit_string_seq("context", &task.context, w);
    }
    if let Some(tools) = &task.tools {
        emit_string_seq("tools", tools, w);
    }
    if let Some(output_file) = &task.output_file {
        w.line(&format!("output_file: {}", scalar(output_file)));
    }
}

fn emit_tool(tool: &ToolSpec, w: &mut CodeWriter) {
    w.line(&format!("name: {}", scalar(&tool.name)));
    w.line(&format!("description: {}", scalar(&tool.description)));
    w.line(&format!("type: {}", scalar(&tool.tool_type)));
    if let Some(parameters) = &tool.parameters {
        if parameters.is_empty() {
            w.line("parameters: {}");
        } else {
            w.line("parameters:");
            w.indent();
            for (key, value) in parameters {
                emit_value(key, value, w);
            }
            w.dedent();
        }
    }
    if let Some(api_key) = &tool.api_key {
        w.line(&format!("api_key: {}", scalar(api_key)));
    }
}

/// Block sequence with items at the key's indent level.
fn emit_string_seq(key: &str, items: &[String], w: &mut CodeWriter) {
    if items.is_empty() {
        w.line(&format!("{key}: []"));
        return;
    }
    w.line(&format!("{key}:"));
    for item in items {
        w.line(&format!("- {}", scalar(item)));
    }
}

/// Emit an arbitrary JSON value under `key` in block style.
fn emit_value(key: &str, value: &Value, w: &mut CodeWriter) {
    let key = scalar(key);
    match value {
        Value::Null => w.line(&format!("{key}: null")),
        Value::Bool(b) => w.line(&format!("{key}: {b}")),
        Value::Number(n) => w.line(&format!("{key}: {n}")),
        Value::String(s) => w.line(&format!("{key}: {}", scalar(s))),
        Value::Array(items) => {
            if items.is_empty() {
                w.line(&format!("{key}: []"));
                return;
            }
            w.line(&format!("{key}:"));
            for item in items {
                w.line(&format!("- {}", value_inline(item)));
            }
        }
        Value::Object(map) => {
            if map.is_empty() {
                w.line(&format!("{key}: {{}}"));
                return;
            }
            w.line(&format!("{key}:"));
            w.indent();
            for (k, v) in map {
                emit_value(k, v, w);
            }
            w.dedent();
        }
    }
}

fn value_inline(value: &Value) -> String {
    match value {
        Value::String(s) => scalar(s),
        Value::Null => "null".to_string(),
        // Nested collections inside a sequence fall back to flow (JSON)
        // form, which is valid YAML.
        other => other.to_string(),
    }
}

/// Quote a scalar only when the plain form would be ambiguous.
fn scalar(s: &str) -> String {
    if needs_quoting(s) { quote(s) } else { s.to_string() }
}

fn needs_quoting(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.starts_with(' ') || s.ends_with(' ') || s.starts_with("- ") {
        return true;
    }
    // Plain forms that YAML would read as something other than a string.
    if matches!(
        s,
        "true" | "True" | "false" | "False" | "yes" | "no" | "on" | "off" | "null" | "Null" | "~"
    ) {
        return true;
    }
    if s.parse::<f64>().is_ok() {
        return true;
    }
    s.chars().any(|c| {
        !(c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-' | '.' | ',' | '/' | '(' | ')'))
    })
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
