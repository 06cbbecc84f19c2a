//! Recursive-descent parser
//!
//!     `Parser` owns the token list of the current parse and a single cursor into it. `peek`
//!     looks at the token under the cursor, `advance` consumes it. Each directive has its own
//!     production in `directives`; the option map and array literal readers live in
//!     `values`.
//!
//!     A parser can be reused for any number of sequential parses: `parse` replaces the token
//!     list and rewinds the cursor before it starts.

mod directives;
mod values;

use super::dispatch::DirectiveKind;
use crate::chx::ast::{Comment, Directive, Node, Program};
use crate::chx::lexing::tokenize;
use crate::chx::token::{Token, TokenKind};
use tracing::{debug, trace};

/// Parser state for one parse at a time.
#[derive(Debug, Default)]
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize without parsing.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        tokenize(source)
    }

    /// Parse `source` into a fresh program. Never fails.
    pub fn parse(&mut self, source: &str) -> Program {
        self.tokens = tokenize(source);
        self.current = 0;

        let mut body = Vec::new();
        while self.peek().is_some() {
            if let Some(node) = self.parse_statement() {
                body.push(node);
            }
        }

        let program = Program::new(body);
        debug!(
            tokens = self.tokens.len(),
            statements = program.body.len(),
            nodes = program.walk().count(),
            "parsed program"
        );
        program
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.current).cloned();
        if token.is_some() {
            self.current += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.is(kind))
    }

    fn check_keyword(&self, word: &str) -> bool {
        self.peek().is_some_and(|t| t.is_keyword(word))
    }

    /// Consume the current token if it has the given kind.
    fn advance_if(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Consume a token of the given kind and return its value as text.
    fn text_if(&mut self, kind: TokenKind) -> Option<String> {
        self.advance_if(kind).map(|t| t.value.to_string())
    }

    /// True while there are tokens left and the current one is not `close`.
    fn before(&self, close: TokenKind) -> bool {
        self.peek().is_some_and(|t| !t.is(close))
    }

    fn parse_statement(&mut self) -> Option<Node> {
        let kind = self.peek()?.kind;
        match kind {
            TokenKind::Comment => {
                let token = self.advance()?;
                Some(Node::Comment(Comment {
                    value: token.value.to_string(),
                }))
            }
            TokenKind::Directive => self.parse_directive(),
            _ => {
                let skipped = self.advance();
                trace!(?skipped, "discarding token outside a directive");
                None
            }
        }
    }

    fn parse_directive(&mut self) -> Option<Node> {
        let name = self.advance()?.value.to_string();

        let node = match DirectiveKind::from_name(&name) {
            DirectiveKind::Context(kind) => Node::Context(self.parse_context(kind)),
            DirectiveKind::Role => Node::Role(self.parse_role()),
            DirectiveKind::Rules(priority) => Node::Rules(self.parse_rules(priority)),
            DirectiveKind::Include => Node::Include(self.parse_include()),
            DirectiveKind::Exclude => Node::Exclude(self.parse_exclude()),
            DirectiveKind::Task => Node::Task(self.parse_task()),
            DirectiveKind::Let => Node::Let(self.parse_let()),
            DirectiveKind::If => Node::If(self.parse_if()),
            DirectiveKind::Import => Node::Import(self.parse_import()),
            DirectiveKind::Mixin => Node::Mixin(self.parse_mixin()),
            DirectiveKind::Apply => Node::Apply(self.parse_apply()),
            DirectiveKind::Output => Node::Output(self.parse_output()),
            DirectiveKind::Simple(kind) => Node::SimpleDirective(self.parse_simple(kind)),
            DirectiveKind::Unknown => {
                debug!(directive = %name, "unknown directive, keeping name only");
                Node::Directive(Directive { name })
            }
        };
        Some(node)
    }

    /// `{ statement* }`, or an empty body when no block follows.
    fn parse_block(&mut self) -> Vec<Node> {
        let mut body = Vec::new();
        if self.advance_if(TokenKind::LBrace).is_none() {
            return body;
        }

        while self.before(TokenKind::RBrace) {
            if let Some(node) = self.parse_statement() {
                body.push(node);
            }
        }
        self.advance_if(TokenKind::RBrace);

        body
    }
}
