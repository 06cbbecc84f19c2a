//! Parsing module for the chx format
//!
//!     Source text goes through two stages:
//!         1. Lexing: the hand-written scanner in [lexing](crate::chx::lexing) produces a flat
//!            token list.
//!         2. Parsing: a single-pass recursive-descent [`Parser`] walks that list with one
//!            cursor and builds the [`Program`].
//!
//! Leniency
//!
//!     The grammar is total: there is no parse error type. Tokens that cannot start a
//!     statement are skipped, missing names and values fall back to defaults
//!     (`"anonymous"`, empty strings, empty lists, absent options), and an unknown directive
//!     becomes a bare [`Directive`](crate::chx::ast::Directive) node whose trailing tokens are
//!     read as ordinary statements. This keeps editor-buffer input, which is usually half
//!     written, always renderable.
//!
//! Cursor
//!
//!     The cursor only moves forward, so parsing is linear in the number of tokens. Looking
//!     past the end yields no token rather than a fault, which is what lets every production
//!     degrade instead of aborting.

pub mod dispatch;
pub mod parser;

pub use dispatch::DirectiveKind;
pub use parser::Parser;

pub use crate::chx::ast::{Node, Program};

/// Parse chx source into a program using a fresh parser.
pub fn parse_program(source: &str) -> Program {
    Parser::new().parse(source)
}
