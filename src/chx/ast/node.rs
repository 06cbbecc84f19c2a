//! Statement node
//!
//! `Node` is the common wrapper for every statement that can appear in a program or a
//! block body. It lets the prompt generator and the formatters walk mixed bodies uniformly.

use super::elements::{
    Apply, Comment, Context, Directive, Exclude, If, Import, Include, Let, Mixin, Output, Role,
    Rules, SimpleDirective, Task,
};
use serde::{Deserialize, Serialize};

/// Node represents any statement in a chx program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Comment(Comment),
    Context(Context),
    Role(Role),
    Rules(Rules),
    Include(Include),
    Exclude(Exclude),
    Task(Task),
    Let(Let),
    If(If),
    Import(Import),
    Mixin(Mixin),
    Apply(Apply),
    Output(Output),
    SimpleDirective(SimpleDirective),
    Directive(Directive),
}

impl Node {
    /// The serialized `"type"` tag of this node.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Comment(_) => "Comment",
            Node::Context(_) => "Context",
            Node::Role(_) => "Role",
            Node::Rules(_) => "Rules",
            Node::Include(_) => "Include",
            Node::Exclude(_) => "Exclude",
            Node::Task(_) => "Task",
            Node::Let(_) => "Let",
            Node::If(_) => "If",
            Node::Import(_) => "Import",
            Node::Mixin(_) => "Mixin",
            Node::Apply(_) => "Apply",
            Node::Output(_) => "Output",
            Node::SimpleDirective(_) => "SimpleDirective",
            Node::Directive(_) => "Directive",
        }
    }

    /// Nested statements, for the variants that have them.
    pub fn body(&self) -> Option<&[Node]> {
        match self {
            Node::Context(c) => Some(&c.body),
            Node::Task(t) => Some(&t.body),
            Node::If(i) => Some(&i.body),
            Node::Mixin(m) => Some(&m.body),
            Node::Role(r) => r.expertise.as_deref(),
            _ => None,
        }
    }
}
