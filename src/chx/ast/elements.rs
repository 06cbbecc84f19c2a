//! Element definitions for the chx AST
//!
//!     One struct per statement kind. Field names follow the serialized form, with
//!     `contextType` the only camel-cased one.
//!
//!     Statements fall into three groups:
//!         - Containers hold a body of further statements: Context, Task, If, Mixin (and Role,
//!           whose optional block is kept as `expertise`).
//!         - Collections hold ordered lists or maps: Rules, Include, Exclude, Import, Output.
//!         - Leaves carry a single value: Comment, Let, Apply, SimpleDirective, Directive.

use super::node::Node;
use super::value::{LetValue, Options};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `#` line comment or `/* */` block comment, delimiters included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub value: String,
}

/// Which `@context` spelling opened a context block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextKind {
    #[serde(rename = "@context")]
    Plain,
    #[serde(rename = "@context:system")]
    System,
    #[serde(rename = "@context:user")]
    User,
    #[serde(rename = "@context:assistant")]
    Assistant,
}

impl ContextKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKind::Plain => "@context",
            ContextKind::System => "@context:system",
            ContextKind::User => "@context:user",
            ContextKind::Assistant => "@context:assistant",
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named block grouping role, rules, includes and tasks.
///
/// `extends` records the name of another context; it is never resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "contextType")]
    pub context_type: ContextKind,
    pub name: String,
    pub extends: Option<String>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub value: String,
    pub expertise: Option<Vec<Node>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    Normal,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Critical => f.write_str("critical"),
            Priority::Normal => f.write_str("normal"),
        }
    }
}

/// `@rules { - ... }`. Each rule is rebuilt from its tokens, so spacing is normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub priority: Priority,
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Include {
    pub paths: Vec<String>,
    pub options: Option<Options>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exclude {
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Let {
    pub name: String,
    pub value: Option<LetValue>,
}

/// A conditional block. The condition is the raw token text between the parentheses and is
/// never evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub condition: String,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub imports: Vec<String>,
    pub from: Option<String>,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mixin {
    pub name: String,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apply {
    pub mixin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub options: Options,
}

/// The single-value directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimpleKind {
    #[serde(rename = "@goal")]
    Goal,
    #[serde(rename = "@prefer")]
    Prefer,
    #[serde(rename = "@tone")]
    Tone,
    #[serde(rename = "@template")]
    Template,
    #[serde(rename = "@reference")]
    Reference,
}

impl SimpleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimpleKind::Goal => "@goal",
            SimpleKind::Prefer => "@prefer",
            SimpleKind::Tone => "@tone",
            SimpleKind::Template => "@template",
            SimpleKind::Reference => "@reference",
        }
    }
}

impl fmt::Display for SimpleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleDirective {
    pub name: SimpleKind,
    pub value: Option<String>,
}

/// Fallback for directive spellings the parser does not know. Only the name is kept; the
/// tokens after it are parsed as ordinary statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,
}
