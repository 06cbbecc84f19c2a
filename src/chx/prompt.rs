//! Prompt generation
//!
//!     Flattens a parsed program into a plain-text prompt with up to three sections, always in
//!     this order:
//!
//!         === SYSTEM ===         role sentence and bulleted rules
//!         === CONTEXT FILES ===  one `[Include: path]` line per included path
//!         === TASKS ===          task names with their goals
//!
//!     Extraction walks the top-level statements and descends into context bodies only. A
//!     task is looked into one level deep for its `@goal`; includes or rules nested inside a
//!     task do not reach the outer sections. When several roles are seen the last one wins.

use crate::chx::ast::{Node, Program, SimpleKind, Task};
use tracing::debug;

/// A task as it appears in the TASKS section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    pub name: String,
    pub goal: Option<String>,
}

impl From<&Task> for TaskSummary {
    fn from(task: &Task) -> Self {
        let goal = task
            .body
            .iter()
            .filter_map(|node| match node {
                Node::SimpleDirective(d) if d.name == SimpleKind::Goal => Some(d.value.clone()),
                _ => None,
            })
            .last()
            .flatten();

        TaskSummary {
            name: task.name.clone(),
            goal,
        }
    }
}

/// Everything the generator collects from a program, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub role: Option<String>,
    pub rules: Vec<String>,
    pub includes: Vec<String>,
    pub tasks: Vec<TaskSummary>,
}

impl Extraction {
    pub fn from_program(program: &Program) -> Self {
        let mut extraction = Extraction::default();
        extraction.collect(&program.body);
        extraction
    }

    fn collect(&mut self, body: &[Node]) {
        for node in body {
            match node {
                Node::Context(context) => self.collect(&context.body),
                Node::Role(role) => self.role = Some(role.value.clone()),
                Node::Rules(rules) => self.rules.extend(rules.rules.iter().cloned()),
                Node::Include(include) => self.includes.extend(include.paths.iter().cloned()),
                Node::Task(task) => self.tasks.push(TaskSummary::from(task)),
                _ => {}
            }
        }
    }

    /// The role, unless it is missing or empty.
    fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|role| !role.is_empty())
    }
}

/// Renders programs as prompt text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptGenerator;

impl PromptGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, program: &Program) -> String {
        let extraction = Extraction::from_program(program);
        debug!(
            rules = extraction.rules.len(),
            includes = extraction.includes.len(),
            tasks = extraction.tasks.len(),
            "extracted prompt content"
        );
        render(&extraction)
    }
}

/// Shorthand for `PromptGenerator::new().generate(program)`.
pub fn generate_prompt(program: &Program) -> String {
    PromptGenerator::new().generate(program)
}

fn render(extraction: &Extraction) -> String {
    let mut parts: Vec<String> = Vec::new();
    let role = extraction.role();

    if role.is_some() || !extraction.rules.is_empty() {
        parts.push("=== SYSTEM ===".into());
        if let Some(role) = role {
            parts.push(format!("You are a {}.", role));
        }
        if !extraction.rules.is_empty() {
            parts.push("\nRules:".into());
            parts.extend(extraction.rules.iter().map(|rule| format!("• {}", rule)));
        }
    }

    if !extraction.includes.is_empty() {
        parts.push("\n=== CONTEXT FILES ===".into());
        parts.extend(
            extraction
                .includes
                .iter()
                .map(|path| format!("[Include: {}]", path)),
        );
    }

    if !extraction.tasks.is_empty() {
        parts.push("\n=== TASKS ===".into());
        for task in &extraction.tasks {
            parts.push(format!("Task: {}", task.name));
            if let Some(goal) = task.goal.as_deref().filter(|goal| !goal.is_empty()) {
                parts.push(format!("Goal: {}", goal));
            }
        }
    }

    parts.join("\n")
}
