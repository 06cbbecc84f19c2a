//! # chx
//!
//! A parser and prompt compiler for ChX, a small directive-based markup language for
//! describing language-model contexts (roles, rules, included files, tasks).
//!
//! File Layout
//!
//!     src/chx
//!       ├── token      Token model and the detokenizer
//!       ├── lexing     Hand-written tokenizer
//!       ├── ast        Closed AST sum type and literal values
//!       ├── parsing    Recursive-descent parser over the token stream
//!       ├── prompt     AST to prompt text compiler
//!       ├── formats    Output formats (tree, json, yaml, prompt) behind a registry
//!       └── config     Layered configuration for the command-line tool
//!
//! Data flows one way: source text → tokens → AST → {JSON/YAML AST, prompt, tree}. Nothing
//! downstream of the parser mutates the AST.
//!
//! The grammar is total. Every input, including empty input and arbitrary bytes, produces a
//! `Program`; malformed constructs degrade to defaults instead of raising errors.

#![allow(rustdoc::invalid_html_tags)]

pub mod chx;

pub use chx::ast::{Node, Program};
pub use chx::formats::{to_tree_str, FormatRegistry};
pub use chx::lexing::tokenize;
pub use chx::parsing::{parse_program, Parser};
pub use chx::prompt::{generate_prompt, PromptGenerator};
