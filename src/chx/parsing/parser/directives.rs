//! Per-directive productions
//!
//! Each production runs right after its directive token has been consumed. None of them
//! fail: a missing piece is replaced by its default and parsing moves on.

use super::Parser;
use crate::chx::ast::{
    Apply, Context, ContextKind, Exclude, If, Import, Include, Let, LetValue, Mixin, Output,
    Priority, Role, Rules, SimpleDirective, SimpleKind, Task,
};
use crate::chx::token::{Token, TokenKind};

const ANONYMOUS: &str = "anonymous";

impl Parser {
    /// `@context[:variant] STRING? (extends NAME)? block?`
    pub(super) fn parse_context(&mut self, context_type: ContextKind) -> Context {
        let name = self
            .text_if(TokenKind::String)
            .unwrap_or_else(|| ANONYMOUS.to_string());

        let mut extends = None;
        if self.check_keyword("extends") {
            self.advance();
            extends = self.advance().map(|t| t.value.to_string());
        }

        let body = self.parse_block();
        Context {
            context_type,
            name,
            extends,
            body,
        }
    }

    /// `@role STRING? block?`, the block kept as expertise.
    pub(super) fn parse_role(&mut self) -> Role {
        let value = self.text_if(TokenKind::String).unwrap_or_default();
        let expertise = if self.check(TokenKind::LBrace) {
            Some(self.parse_block())
        } else {
            None
        };
        Role { value, expertise }
    }

    /// `@rules { - text - text ... }`
    ///
    /// Only dash-led spans count; a span ends at the next dash or the closing brace. Rule
    /// text is rebuilt from the span's tokens joined by single spaces.
    pub(super) fn parse_rules(&mut self, priority: Priority) -> Rules {
        let mut rules = Vec::new();

        if self.advance_if(TokenKind::LBrace).is_some() {
            while self.before(TokenKind::RBrace) {
                if self.advance_if(TokenKind::Dash).is_none() {
                    self.advance();
                    continue;
                }

                let mut words = Vec::new();
                while self
                    .peek()
                    .is_some_and(|t| !t.is(TokenKind::Dash) && !t.is(TokenKind::RBrace))
                {
                    if let Some(token) = self.advance() {
                        words.push(rule_word(&token));
                    }
                }
                rules.push(words.join(" ").trim().to_string());
            }
            self.advance_if(TokenKind::RBrace);
        }

        Rules { priority, rules }
    }

    /// `@include (pathlist | PATH) options?`
    pub(super) fn parse_include(&mut self) -> Include {
        let paths = self.parse_paths();
        let options = if self.check(TokenKind::LBrace) {
            Some(self.parse_options())
        } else {
            None
        };
        Include { paths, options }
    }

    /// `@exclude (pathlist | PATH)`
    pub(super) fn parse_exclude(&mut self) -> Exclude {
        Exclude {
            paths: self.parse_paths(),
        }
    }

    /// `[ (PATH | STRING)* ]` or a single bare PATH.
    fn parse_paths(&mut self) -> Vec<String> {
        let mut paths = Vec::new();

        if self.advance_if(TokenKind::LBracket).is_some() {
            while self.before(TokenKind::RBracket) {
                if let Some(token) = self.advance() {
                    if token.is(TokenKind::Path) || token.is(TokenKind::String) {
                        paths.push(token.value.to_string());
                    }
                }
            }
            self.advance_if(TokenKind::RBracket);
        } else if let Some(path) = self.text_if(TokenKind::Path) {
            paths.push(path);
        }

        paths
    }

    /// `@task STRING? block?`
    pub(super) fn parse_task(&mut self) -> Task {
        let name = self
            .text_if(TokenKind::String)
            .unwrap_or_else(|| ANONYMOUS.to_string());
        let body = self.parse_block();
        Task { name, body }
    }

    /// `@let NAME =? (STRING | NUMBER | @call ( (STRING | PATH)* )?)`
    pub(super) fn parse_let(&mut self) -> Let {
        let name = self.text_if(TokenKind::Identifier).unwrap_or_default();
        self.advance_if(TokenKind::Equals);

        let value = match self.peek().map(|t| t.kind) {
            Some(TokenKind::String) => self.advance().map(|t| LetValue::String {
                value: t.value.to_string(),
            }),
            Some(TokenKind::Number) => self
                .advance()
                .and_then(|t| t.value.as_number())
                .map(|value| LetValue::Number { value }),
            Some(TokenKind::Directive) => self.parse_function_call(),
            _ => None,
        };

        Let { name, value }
    }

    fn parse_function_call(&mut self) -> Option<LetValue> {
        let name = self.advance()?.value.to_string();

        let args = if self.advance_if(TokenKind::LParen).is_some() {
            let mut args = Vec::new();
            while self.before(TokenKind::RParen) {
                if let Some(token) = self.advance() {
                    if token.is(TokenKind::String) || token.is(TokenKind::Path) {
                        args.push(token.value.to_string());
                    }
                }
            }
            self.advance_if(TokenKind::RParen);
            Some(args)
        } else {
            None
        };

        Some(LetValue::FunctionCall { name, args })
    }

    /// `@if ( raw tokens ) block?`
    ///
    /// Parentheses are balanced with a depth counter; everything inside the outer pair is
    /// kept as text. Falsy values (`""`, `0`, `false`) contribute an empty word.
    pub(super) fn parse_if(&mut self) -> If {
        let mut words = Vec::new();

        if self.advance_if(TokenKind::LParen).is_some() {
            let mut depth = 1usize;
            while let Some(kind) = self.peek().map(|t| t.kind) {
                match kind {
                    TokenKind::LParen => depth += 1,
                    TokenKind::RParen => depth -= 1,
                    _ => {}
                }
                let token = self.advance();
                if depth == 0 {
                    break;
                }
                if let Some(token) = token {
                    if token.value.is_falsy() {
                        words.push(String::new());
                    } else {
                        words.push(token.value.to_string());
                    }
                }
            }
        }

        let body = self.parse_block();
        If {
            condition: words.join(" ").trim().to_string(),
            body,
        }
    }

    /// `@import PATH`, `@import { NAME* } (from X)?` or `@import * (as X)? (from X)?`
    pub(super) fn parse_import(&mut self) -> Import {
        let mut imports = Vec::new();
        let mut from = None;
        let mut alias = None;

        match self.peek().map(|t| t.kind) {
            Some(TokenKind::Path) => {
                from = self.text_if(TokenKind::Path);
            }
            Some(TokenKind::LBrace) => {
                self.advance();
                while self.before(TokenKind::RBrace) {
                    if let Some(token) = self.advance() {
                        if token.is(TokenKind::Identifier) {
                            imports.push(token.value.to_string());
                        }
                    }
                }
                self.advance_if(TokenKind::RBrace);
                from = self.keyword_operand("from");
            }
            Some(TokenKind::Star) => {
                self.advance();
                alias = self.keyword_operand("as");
                from = self.keyword_operand("from");
            }
            _ => {}
        }

        Import {
            imports,
            from,
            alias,
        }
    }

    /// `KEYWORD operand`, where the operand is whatever token follows.
    fn keyword_operand(&mut self, keyword: &str) -> Option<String> {
        if !self.check_keyword(keyword) {
            return None;
        }
        self.advance();
        self.advance().map(|t| t.value.to_string())
    }

    /// `@mixin NAME block?`
    pub(super) fn parse_mixin(&mut self) -> Mixin {
        let name = self.text_if(TokenKind::Identifier).unwrap_or_default();
        let body = self.parse_block();
        Mixin { name, body }
    }

    /// `@apply NAME`
    pub(super) fn parse_apply(&mut self) -> Apply {
        Apply {
            mixin: self.text_if(TokenKind::Identifier).unwrap_or_default(),
        }
    }

    /// `@output options?`
    pub(super) fn parse_output(&mut self) -> Output {
        Output {
            options: self.parse_options(),
        }
    }

    /// `@goal | @prefer | @tone | @template | @reference` followed by a STRING, a PATH, or a
    /// comma separated run of identifiers.
    pub(super) fn parse_simple(&mut self, name: SimpleKind) -> SimpleDirective {
        let value = match self.peek().map(|t| t.kind) {
            Some(TokenKind::String) | Some(TokenKind::Path) => {
                self.advance().map(|t| t.value.to_string())
            }
            Some(TokenKind::Identifier) => {
                let mut values = Vec::new();
                while let Some(ident) = self.text_if(TokenKind::Identifier) {
                    values.push(ident);
                    self.advance_if(TokenKind::Comma);
                }
                Some(values.join(", "))
            }
            _ => None,
        };

        SimpleDirective { name, value }
    }
}

/// A token's contribution to rule text: its value, or its kind name when the value is falsy.
fn rule_word(token: &Token) -> String {
    if token.value.is_falsy() {
        token.kind.name().to_string()
    } else {
        token.value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::chx::ast::{
        Context, ContextKind, Import, LetValue, Node, Priority, SimpleDirective, SimpleKind,
    };
    use crate::chx::parsing::parse_program;

    fn single(source: &str) -> Node {
        let mut program = parse_program(source);
        assert_eq!(program.body.len(), 1, "expected one node for {:?}", source);
        program.body.remove(0)
    }

    #[test]
    fn test_context_defaults() {
        let node = single("@context:assistant");
        assert_eq!(
            node,
            Node::Context(Context {
                context_type: ContextKind::Assistant,
                name: "anonymous".into(),
                extends: None,
                body: vec![],
            })
        );
    }

    #[test]
    fn test_context_extends() {
        match single(r#"@context "child" extends base { }"#) {
            Node::Context(ctx) => {
                assert_eq!(ctx.name, "child");
                assert_eq!(ctx.extends.as_deref(), Some("base"));
            }
            other => panic!("expected context, got {:?}", other),
        }
    }

    #[test]
    fn test_extends_at_end_of_input() {
        match single(r#"@context "c" extends"#) {
            Node::Context(ctx) => assert_eq!(ctx.extends, None),
            other => panic!("expected context, got {:?}", other),
        }
    }

    #[test]
    fn test_role_with_expertise() {
        match single(r#"@role "architect" { @tone "calm" }"#) {
            Node::Role(role) => {
                assert_eq!(role.value, "architect");
                let expertise = role.expertise.expect("expertise block");
                assert_eq!(expertise.len(), 1);
            }
            other => panic!("expected role, got {:?}", other),
        }
    }

    #[test]
    fn test_rules_text_is_rebuilt_from_tokens() {
        match single("@rules:critical {\n - Use   ./src paths\n - Max 3 files: ok\n}") {
            Node::Rules(rules) => {
                assert_eq!(rules.priority, Priority::Critical);
                assert_eq!(rules.rules, vec!["Use ./src paths", "Max 3 files : ok"]);
            }
            other => panic!("expected rules, got {:?}", other),
        }
    }

    #[test]
    fn test_rules_empty_string_uses_kind_name() {
        match single(r#"@rules { - say "" twice }"#) {
            Node::Rules(rules) => assert_eq!(rules.rules, vec!["say STRING twice"]),
            other => panic!("expected rules, got {:?}", other),
        }
    }

    #[test]
    fn test_rules_zero_and_false_use_kind_name() {
        match single("@rules { - retry 0 times - strict false - keep true }") {
            Node::Rules(rules) => assert_eq!(
                rules.rules,
                vec!["retry NUMBER times", "strict BOOLEAN", "keep true"]
            ),
            other => panic!("expected rules, got {:?}", other),
        }
    }

    #[test]
    fn test_rules_ignore_text_before_first_dash() {
        match single("@rules { preamble - one }") {
            Node::Rules(rules) => assert_eq!(rules.rules, vec!["one"]),
            other => panic!("expected rules, got {:?}", other),
        }
    }

    #[test]
    fn test_include_list_and_options() {
        match single(r#"@include [./a.rs "b.md" ident] { max_tokens: 5000 }"#) {
            Node::Include(include) => {
                assert_eq!(include.paths, vec!["./a.rs", "b.md"]);
                let options = include.options.expect("options");
                assert_eq!(
                    serde_json::to_string(&options).unwrap(),
                    r#"{"max_tokens":5000}"#
                );
            }
            other => panic!("expected include, got {:?}", other),
        }
    }

    #[test]
    fn test_include_without_path() {
        match single("@include") {
            Node::Include(include) => {
                assert!(include.paths.is_empty());
                assert!(include.options.is_none());
            }
            other => panic!("expected include, got {:?}", other),
        }
    }

    #[test]
    fn test_exclude_single_path() {
        match single("@exclude ./src/**/*.test.*") {
            Node::Exclude(exclude) => assert_eq!(exclude.paths, vec!["./src/**/*.test.*"]),
            other => panic!("expected exclude, got {:?}", other),
        }
    }

    #[test]
    fn test_let_forms() {
        match single(r#"@let greeting = "hi""#) {
            Node::Let(binding) => {
                assert_eq!(binding.name, "greeting");
                assert_eq!(
                    binding.value,
                    Some(LetValue::String {
                        value: "hi".into()
                    })
                );
            }
            other => panic!("expected let, got {:?}", other),
        }

        match single("@let limit 10") {
            Node::Let(binding) => {
                assert_eq!(binding.value, Some(LetValue::Number { value: 10.0 }))
            }
            other => panic!("expected let, got {:?}", other),
        }

        match single("@let project = @json(./package.json \"x\" other)") {
            Node::Let(binding) => assert_eq!(
                binding.value,
                Some(LetValue::FunctionCall {
                    name: "@json".into(),
                    args: Some(vec!["./package.json".into(), "x".into()]),
                })
            ),
            other => panic!("expected let, got {:?}", other),
        }

        match single("@let now = @now") {
            Node::Let(binding) => assert_eq!(
                binding.value,
                Some(LetValue::FunctionCall {
                    name: "@now".into(),
                    args: None,
                })
            ),
            other => panic!("expected let, got {:?}", other),
        }
    }

    #[test]
    fn test_if_condition_is_raw_text() {
        match single("@if (@exists(./src) and (x)) { @include ./src }") {
            Node::If(cond) => {
                assert_eq!(cond.condition, "@exists ( ./src ) and ( x )");
                assert_eq!(cond.body.len(), 1);
            }
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_if_condition_drops_falsy_values() {
        match single("@if (x == 0) { }") {
            Node::If(cond) => assert_eq!(cond.condition, "x = ="),
            other => panic!("expected if, got {:?}", other),
        }
        match single(r#"@if (flag = false or name = "" or n = 1) { }"#) {
            Node::If(cond) => assert_eq!(cond.condition, "flag =  or name =  or n = 1"),
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_if_without_parens() {
        match single("@if { }") {
            Node::If(cond) => {
                assert_eq!(cond.condition, "");
                assert!(cond.body.is_empty());
            }
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_import_forms() {
        assert_eq!(
            single("@import ./shared.chx"),
            Node::Import(Import {
                imports: vec![],
                from: Some("./shared.chx".into()),
                alias: None,
            })
        );
        assert_eq!(
            single("@import { a, b } from ./lib.chx"),
            Node::Import(Import {
                imports: vec!["a".into(), "b".into()],
                from: Some("./lib.chx".into()),
                alias: None,
            })
        );
        assert_eq!(
            single("@import * as lib from ./lib.chx"),
            Node::Import(Import {
                imports: vec![],
                from: Some("./lib.chx".into()),
                alias: Some("lib".into()),
            })
        );
    }

    #[test]
    fn test_mixin_and_apply() {
        let program = parse_program("@mixin strict { @tone \"formal\" } @apply strict");
        assert_eq!(program.body.len(), 2);
        match (&program.body[0], &program.body[1]) {
            (Node::Mixin(mixin), Node::Apply(apply)) => {
                assert_eq!(mixin.name, "strict");
                assert_eq!(mixin.body.len(), 1);
                assert_eq!(apply.mixin, "strict");
            }
            other => panic!("expected mixin and apply, got {:?}", other),
        }
    }

    #[test]
    fn test_simple_directive_values() {
        assert_eq!(
            single("@prefer typescript, rust go"),
            Node::SimpleDirective(SimpleDirective {
                name: SimpleKind::Prefer,
                value: Some("typescript, rust, go".into()),
            })
        );
        assert_eq!(
            single("@template ./templates/readme.md"),
            Node::SimpleDirective(SimpleDirective {
                name: SimpleKind::Template,
                value: Some("./templates/readme.md".into()),
            })
        );
        assert_eq!(
            single("@reference"),
            Node::SimpleDirective(SimpleDirective {
                name: SimpleKind::Reference,
                value: None,
            })
        );
    }
}
