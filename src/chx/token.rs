//! Core token types shared by the tokenizer, the parser and tooling.
//!
//!     A token is a `{ type, value }` pair. The type is one of a fixed set of twenty kinds;
//!     the value is text for most kinds, a number for NUMBER and a boolean for BOOLEAN.
//!     Punctuation tokens carry their own character as text, so every token has a value.
//!
//!     Tokens serialize to JSON as `{"type": "DIRECTIVE", "value": "@context"}`, which is the
//!     shape consumers of the token stream expect.

pub mod formatting;

pub use formatting::{detokenize, ToChxString};

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Comment,
    Directive,
    String,
    Path,
    Number,
    Boolean,
    Identifier,
    Keyword,
    #[serde(rename = "LBRACE")]
    LBrace,
    #[serde(rename = "RBRACE")]
    RBrace,
    #[serde(rename = "LBRACKET")]
    LBracket,
    #[serde(rename = "RBRACKET")]
    RBracket,
    #[serde(rename = "LPAREN")]
    LParen,
    #[serde(rename = "RPAREN")]
    RParen,
    Colon,
    Comma,
    Equals,
    Dash,
    Star,
    Arrow,
}

impl TokenKind {
    /// The upper-case spelling used in serialized token streams.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "COMMENT",
            TokenKind::Directive => "DIRECTIVE",
            TokenKind::String => "STRING",
            TokenKind::Path => "PATH",
            TokenKind::Number => "NUMBER",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Equals => "EQUALS",
            TokenKind::Dash => "DASH",
            TokenKind::Star => "STAR",
            TokenKind::Arrow => "ARROW",
        }
    }

    /// Kind of a single punctuation character, if it is one.
    pub fn from_punct(c: char) -> Option<Self> {
        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '=' => TokenKind::Equals,
            '-' => TokenKind::Dash,
            '*' => TokenKind::Star,
            '>' => TokenKind::Arrow,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The payload of a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Number(#[serde(serialize_with = "serialize_number")] f64),
    Boolean(bool),
}

impl TokenValue {
    /// True when the value renders as an empty string.
    pub fn is_empty(&self) -> bool {
        matches!(self, TokenValue::Text(s) if s.is_empty())
    }

    /// True for values that count as missing in rule text and `@if` conditions:
    /// the empty string, zero and `false`.
    pub fn is_falsy(&self) -> bool {
        match self {
            TokenValue::Text(s) => s.is_empty(),
            TokenValue::Number(n) => *n == 0.0 || n.is_nan(),
            TokenValue::Boolean(b) => !b,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => f.write_str(s),
            TokenValue::Number(n) => f.write_str(&format_number(*n)),
            TokenValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: TokenValue,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue) -> Self {
        Self { kind, value }
    }

    pub fn text(kind: TokenKind, value: impl Into<String>) -> Self {
        Self::new(kind, TokenValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(TokenKind::Number, TokenValue::Number(value))
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(TokenKind::Boolean, TokenValue::Boolean(value))
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True for a KEYWORD token spelled `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value.as_text() == Some(word)
    }
}

/// Largest magnitude at which every integer is exactly representable in an `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Render a number for display: integral values lose the trailing `.0`, and magnitudes
/// outside `[1e-6, 1e21)` use exponent form with an explicit sign (`1e+21`, `2.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponent_form = format!("{:e}", n);
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exponent_form,
        };
    }
    format!("{}", n)
}

/// Serialize integral numbers as JSON integers (`5000` rather than `5000.0`).
pub(crate) fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_json_shape() {
        let token = Token::text(TokenKind::Directive, "@context");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"type":"DIRECTIVE","value":"@context"}"#);
    }

    #[test]
    fn test_punctuation_kinds_serialize_upper_case() {
        let token = Token::text(TokenKind::LBrace, "{");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"type":"LBRACE","value":"{"}"#);
        assert_eq!(TokenKind::RParen.name(), "RPAREN");
    }

    #[test]
    fn test_integral_numbers_serialize_without_fraction() {
        let json = serde_json::to_string(&Token::number(5000.0)).unwrap();
        assert_eq!(json, r#"{"type":"NUMBER","value":5000}"#);

        let json = serde_json::to_string(&Token::number(1.5)).unwrap();
        assert_eq!(json, r#"{"type":"NUMBER","value":1.5}"#);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(TokenValue::Number(3.0).to_string(), "3");
        assert_eq!(TokenValue::Number(0.25).to_string(), "0.25");
        assert_eq!(TokenValue::Boolean(false).to_string(), "false");
        assert!(TokenValue::Text(String::new()).is_empty());
        assert!(!TokenValue::Number(0.0).is_empty());
    }

    #[test]
    fn test_falsy_values() {
        assert!(TokenValue::Text(String::new()).is_falsy());
        assert!(TokenValue::Number(0.0).is_falsy());
        assert!(TokenValue::Boolean(false).is_falsy());
        assert!(!TokenValue::Text("0".into()).is_falsy());
        assert!(!TokenValue::Number(0.5).is_falsy());
        assert!(!TokenValue::Boolean(true).is_falsy());
    }

    #[test]
    fn test_extreme_numbers_use_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(2.5e-7), "2.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(TokenValue::Number(1e21).to_string(), "1e+21");
    }

    #[test]
    fn test_token_deserializes() {
        let token: Token = serde_json::from_str(r#"{"type":"BOOLEAN","value":true}"#).unwrap();
        assert_eq!(token, Token::boolean(true));
    }
}
