//! Directive dispatch
//!
//! Maps the exact spelling of a directive token (colon variants included) to the
//! production that parses it. Anything not listed is `Unknown`.

use crate::chx::ast::{ContextKind, Priority, SimpleKind};

/// The production a directive spelling selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Context(ContextKind),
    Role,
    Rules(Priority),
    Include,
    Exclude,
    Task,
    Let,
    If,
    Import,
    Mixin,
    Apply,
    Output,
    Simple(SimpleKind),
    Unknown,
}

impl DirectiveKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "@context" => DirectiveKind::Context(ContextKind::Plain),
            "@context:system" => DirectiveKind::Context(ContextKind::System),
            "@context:user" => DirectiveKind::Context(ContextKind::User),
            "@context:assistant" => DirectiveKind::Context(ContextKind::Assistant),
            "@role" => DirectiveKind::Role,
            "@rules" => DirectiveKind::Rules(Priority::Normal),
            "@rules:critical" => DirectiveKind::Rules(Priority::Critical),
            "@include" => DirectiveKind::Include,
            "@exclude" => DirectiveKind::Exclude,
            "@task" => DirectiveKind::Task,
            "@let" => DirectiveKind::Let,
            "@if" => DirectiveKind::If,
            "@import" => DirectiveKind::Import,
            "@mixin" => DirectiveKind::Mixin,
            "@apply" => DirectiveKind::Apply,
            "@output" => DirectiveKind::Output,
            "@goal" => DirectiveKind::Simple(SimpleKind::Goal),
            "@prefer" => DirectiveKind::Simple(SimpleKind::Prefer),
            "@tone" => DirectiveKind::Simple(SimpleKind::Tone),
            "@template" => DirectiveKind::Simple(SimpleKind::Template),
            "@reference" => DirectiveKind::Simple(SimpleKind::Reference),
            _ => DirectiveKind::Unknown,
        }
    }
}
