//! Program renderer: CrewConfig → standalone CrewAI Python script.
//!
//! Field emission order is a compatibility contract: agents emit role, goal,
//! backstory, llm, tools, memory, verbose; tasks emit description,
//! expected_output, agent, context, tools, output_file. Optional fields
//! appear only when present.

use super::writer::CodeWriter;
use crate::compile::types::CrewConfig;

pub fn render_python(config: &CrewConfig) -> String {
    let mut w = CodeWriter::new("    ");

    w.line("\"\"\"");
    w.line(&config.name);
    if config.description.is_empty() {
        w.line("Generated from the visual workflow builder");
    } else {
        w.line(&config.description);
    }
    w.line("\"\"\"");
    w.blank();
    w.line("from crewai import Agent, Task, Crew, Process");
    w.line("from crewai_tools import SerperDevTool, FileReadTool");
    w.blank();
    w.line("# Agents");

    for (name, agent) in &config.agents {
        w.blank();
        w.line(&format!("{name} = Agent("));
        w.indent();
        w.line(&format!("role={},", py_str(&agent.role)));
        w.line(&format!("goal={},", py_str(&agent.goal)));
        w.line(&format!("backstory=\"\"\"{}\"\"\",", agent.backstory));
        if let Some(llm) = &agent.llm {
            w.line(&format!("llm={},", py_str(llm)));
        }
        if let Some(tools) = &agent.tools {
            w.line(&format!("tools={},", py_str_list(tools)));
        }
        if let Some(memory) = agent.memory {
            w.line(&format!("memory={},", py_bool(memory)));
        }
        if let Some(verbose) = agent.verbose {
            w.line(&format!("verbose={},", py_bool(verbose)));
        }
        w.dedent();
        w.line(")");
    }

    w.blank();
    w.line("# Tasks");

    for (name, task) in &config.tasks {
        w.blank();
        w.line(&format!("{name} = Task("));
        w.indent();
        w.line(&format!("description=\"\"\"{}\"\"\",", task.description));
        w.line(&format!(
            "expected_output=\"\"\"{}\"\"\",",
            task.expected_output
        ));
        if let Some(agent) = &task.agent {
            // Bare reference to the agent declaration above.
            w.line(&format!("agent={agent},"));
        }
        if !task.context.is_empty() {
            w.line(&format!("context={},", py_str_list(&task.context)));
        }
        if let Some(tools) = &task.tools {
            w.line(&format!("tools={},", py_str_list(tools)));
        }
        if let Some(output_file) = &task.output_file {
            w.line(&format!("output_file={},", py_str(output_file)));
        }
        w.dedent();
        w.line(")");
    }

    w.blank();
    w.line("# Crew");
    w.line("crew = Crew(");
    w.indent();
    w.line(&format!("agents=[{}],", join_names(config.agents.keys())));
    w.line(&format!("tasks=[{}],", join_names(config.tasks.keys())));
    w.line(&format!(
        "process=Process.{},",
        config.process.as_str().to_uppercase()
    ));
    w.line(&format!("verbose={},", py_bool(config.verbose)));
    w.dedent();
    w.line(")");
    w.blank();
    w.line("# Execute");
    w.line("result = crew.kickoff()");
    w.line("print(result)");

    w.finish()
}

fn join_names<'a>(names: impl Iterator<Item = &'a String>) -> String {
    names.map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn py_str(s: &str) -> String {
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

fn py_str_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|i| py_str(i)).collect();
    format!("[{}]", quoted.join(", "))
}

fn py_bool(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}
