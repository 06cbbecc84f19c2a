//! Lexer
//!
//!     Turns chx source text into a flat token sequence. The scanner is hand-written: at each
//!     position it tries a fixed cascade of recognizers and the first one that applies wins.
//!
//! Recognition Order
//!
//!     1. Whitespace (Unicode white space and the byte-order mark) is skipped.
//!     2. `#` starts a line comment running to the end of the line.
//!     3. `/*` starts a block comment running to `*/`, or to the end of input.
//!     4. `@` starts a directive: `@` followed by `[a-zA-Z0-9_:]*`.
//!     5. `"` starts a string. `"""` opens a verbatim multi-line string closed by `"""` (or
//!        the end of input). A plain string copies backslash escapes through untouched: the
//!        backslash and the escaped character both land in the value.
//!     6. `./` or `../` starts a path, greedily taking `[a-zA-Z0-9_./*{},-]`.
//!     7. A digit starts a number: a run of digits and dots, converted leniently so that
//!        `1.2.3` is 1.2.
//!     8. `[a-zA-Z_]` starts a word: `true`/`false` are BOOLEAN, `extends`/`from`/`as` are
//!        KEYWORD, anything else is IDENTIFIER.
//!     9. One of `{}[]():,=-*>` is a punctuation token.
//!     10. Any other character is dropped.
//!
//!     The order matters. Paths are tried before punctuation and numbers so the leading `.`
//!     of `./src` is never read on its own, and numbers only start on a digit so `1 ./a` is a
//!     number followed by a path.
//!
//!     Tokenizing never fails. Unterminated comments and strings run to the end of input.

use crate::chx::token::{Token, TokenKind};
use tracing::trace;

/// Tokenize chx source text.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).run()
}

struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn run(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(c) = self.peek() {
            if is_whitespace(c) {
                self.pos += c.len_utf8();
                continue;
            }
            if let Some(token) = self.next_token(c) {
                tokens.push(token);
            }
        }
        tokens
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume characters while `pred` holds and return the consumed slice.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.source[start..self.pos]
    }

    fn next_token(&mut self, c: char) -> Option<Token> {
        let rest = self.rest();

        if c == '#' {
            return Some(self.line_comment());
        }
        if rest.starts_with("/*") {
            return Some(self.block_comment());
        }
        if c == '@' {
            return Some(self.directive());
        }
        if c == '"' {
            return Some(self.string());
        }
        if rest.starts_with("./") || rest.starts_with("../") {
            return Some(self.path());
        }
        if c.is_ascii_digit() {
            return Some(self.number());
        }
        if c.is_ascii_alphabetic() || c == '_' {
            return Some(self.word());
        }
        if let Some(kind) = TokenKind::from_punct(c) {
            self.pos += c.len_utf8();
            return Some(Token::text(kind, c.to_string()));
        }

        trace!(character = ?c, offset = self.pos, "dropping unrecognized character");
        self.pos += c.len_utf8();
        None
    }

    fn line_comment(&mut self) -> Token {
        let text = self.eat_while(|c| c != '\n');
        Token::text(TokenKind::Comment, text)
    }

    fn block_comment(&mut self) -> Token {
        let start = self.pos;
        let body = &self.source[start + 2..];
        self.pos = match body.find("*/") {
            Some(end) => start + 2 + end + 2,
            None => self.source.len(),
        };
        Token::text(TokenKind::Comment, &self.source[start..self.pos])
    }

    fn directive(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;
        self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':');
        Token::text(TokenKind::Directive, &self.source[start..self.pos])
    }

    fn string(&mut self) -> Token {
        if self.rest().starts_with("\"\"\"") {
            return self.triple_quoted_string();
        }

        self.pos += 1;
        let body = self.rest();
        let mut end = body.len();
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '"' => {
                    end = i;
                    break;
                }
                '\\' => {
                    chars.next();
                }
                _ => {}
            }
        }

        let value = &body[..end];
        // Skip the closing quote when there is one.
        self.pos += (end + 1).min(body.len());
        Token::text(TokenKind::String, value)
    }

    fn triple_quoted_string(&mut self) -> Token {
        self.pos += 3;
        let body = self.rest();
        let (value, consumed) = match body.find("\"\"\"") {
            Some(end) => (&body[..end], end + 3),
            None => (body, body.len()),
        };
        self.pos += consumed;
        Token::text(TokenKind::String, value)
    }

    fn path(&mut self) -> Token {
        let text = self.eat_while(is_path_char);
        Token::text(TokenKind::Path, text)
    }

    fn number(&mut self) -> Token {
        let text = self.eat_while(|c| c.is_ascii_digit() || c == '.');
        Token::number(parse_float_prefix(text))
    }

    fn word(&mut self) -> Token {
        let text = self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        match text {
            "true" => Token::boolean(true),
            "false" => Token::boolean(false),
            "extends" | "from" | "as" => Token::text(TokenKind::Keyword, text),
            _ => Token::text(TokenKind::Identifier, text),
        }
    }
}

fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | '*' | '{' | '}' | ',' | '-')
}

/// Convert a digit/dot run by its longest valid decimal prefix.
///
/// `"1.2.3"` reads as 1.2 and `"7."` as 7; the run always starts with a digit so some
/// prefix always parses.
fn parse_float_prefix(text: &str) -> f64 {
    let mut seen_dot = false;
    let end = text
        .char_indices()
        .find(|&(_, c)| {
            if c != '.' {
                return false;
            }
            if seen_dot {
                return true;
            }
            seen_dot = true;
            false
        })
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .unwrap_or(0.0)
}
