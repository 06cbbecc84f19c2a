//! Tree formatter for programs
//!
//! One line per statement, nesting shown as two spaces of indentation per level. Detail lines
//! (a context's type, rule texts, paths, options) sit under their statement at the same
//! prefix plus three spaces.
//!
//! Example:
//!
//!     📄 Program
//!       📦 Context: "app" extends base
//!          type: @context:system
//!         👤 Role: "reviewer"
//!         📋 Rules (critical)
//!            • Be brief
//!         📥 Include
//!            └ ./src
//!            options: {"depth":2}
//!         ✅ Task: "review"
//!           🔹 SimpleDirective
//!
//! Icons
//!     Program: 📄
//!     Context: 📦
//!     Role: 👤
//!     Rules: 📋
//!     Include: 📥
//!     Exclude: 📤
//!     Task: ✅
//!     Anything else: 🔹 followed by the node type

use super::registry::{FormatError, Formatter};
use crate::chx::ast::{Node, Program};

/// Render a whole program, starting at depth 0.
pub fn to_tree_str(program: &Program) -> String {
    let mut out = String::from("📄 Program\n");
    out.push_str(&nodes_to_tree_str(&program.body, 1));
    out
}

/// Render a list of statements at the given depth.
pub fn nodes_to_tree_str(nodes: &[Node], depth: usize) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, depth);
    }
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let prefix = "  ".repeat(depth);

    match node {
        Node::Context(context) => {
            out.push_str(&format!("{}📦 Context: \"{}\"", prefix, context.name));
            if let Some(extends) = context.extends.as_deref().filter(|e| !e.is_empty()) {
                out.push_str(&format!(" extends {}", extends));
            }
            out.push('\n');
            out.push_str(&format!("{}   type: {}\n", prefix, context.context_type));
            out.push_str(&nodes_to_tree_str(&context.body, depth + 1));
        }
        Node::Role(role) => {
            out.push_str(&format!("{}👤 Role: \"{}\"\n", prefix, role.value));
        }
        Node::Rules(rules) => {
            out.push_str(&format!("{}📋 Rules ({})\n", prefix, rules.priority));
            for rule in &rules.rules {
                out.push_str(&format!("{}   • {}\n", prefix, rule));
            }
        }
        Node::Include(include) => {
            out.push_str(&format!("{}📥 Include\n", prefix));
            write_paths(out, &prefix, &include.paths);
            if let Some(options) = include.options.as_ref().filter(|o| !o.is_empty()) {
                // Option values are plain strings, numbers and arrays; this cannot fail.
                let json = serde_json::to_string(options).unwrap_or_default();
                out.push_str(&format!("{}   options: {}\n", prefix, json));
            }
        }
        Node::Exclude(exclude) => {
            out.push_str(&format!("{}📤 Exclude\n", prefix));
            write_paths(out, &prefix, &exclude.paths);
        }
        Node::Task(task) => {
            out.push_str(&format!("{}✅ Task: \"{}\"\n", prefix, task.name));
            out.push_str(&nodes_to_tree_str(&task.body, depth + 1));
        }
        other => {
            out.push_str(&format!("{}🔹 {}\n", prefix, other.type_name()));
        }
    }
}

fn write_paths(out: &mut String, prefix: &str, paths: &[String]) {
    for path in paths {
        out.push_str(&format!("{}   └ {}\n", prefix, path));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeFormatter;

impl Formatter for TreeFormatter {
    fn name(&self) -> &str {
        "tree"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(to_tree_str(program))
    }

    fn description(&self) -> &str {
        "Indented outline with one icon per statement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chx::parsing::parse_program;

    #[test]
    fn test_empty_program() {
        assert_eq!(to_tree_str(&Program::default()), "📄 Program\n");
    }

    #[test]
    fn test_context_with_children() {
        let program = parse_program(
            r#"@context:system "app" extends base {
                @role "reviewer"
                @rules:critical { - Be brief }
                @include ./src { depth: 2 }
                @exclude [./target]
            }"#,
        );
        assert_eq!(
            to_tree_str(&program),
            "📄 Program\n\
             \x20 📦 Context: \"app\" extends base\n\
             \x20    type: @context:system\n\
             \x20   👤 Role: \"reviewer\"\n\
             \x20   📋 Rules (critical)\n\
             \x20      • Be brief\n\
             \x20   📥 Include\n\
             \x20      └ ./src\n\
             \x20      options: {\"depth\":2}\n\
             \x20   📤 Exclude\n\
             \x20      └ ./target\n"
        );
    }

    #[test]
    fn test_fallback_and_task_body() {
        let program = parse_program(r#"@task "t" { @goal "g" } @frobnicate"#);
        assert_eq!(
            to_tree_str(&program),
            "📄 Program\n  ✅ Task: \"t\"\n    🔹 SimpleDirective\n  🔹 Directive\n"
        );
    }

    #[test]
    fn test_nodes_at_depth() {
        let program = parse_program("@include ./a { }");
        assert_eq!(
            nodes_to_tree_str(&program.body, 2),
            "    📥 Include\n       └ ./a\n"
        );
    }
}
