//! Detokenizer for the chx format
//!
//! Converts a stream of tokens back into source text. The output is not byte-identical to
//! the original source (whitespace is normalized to single spaces) but tokenizing it again
//! yields the same sequence of token kinds. This is what round-trip tests rely on.

use super::{Token, TokenKind, TokenValue};

/// Trait for converting a token to its source representation
pub trait ToChxString {
    fn to_chx_string(&self) -> String;
}

impl ToChxString for Token {
    fn to_chx_string(&self) -> String {
        match (&self.kind, &self.value) {
            (TokenKind::String, TokenValue::Text(s)) => quote(s).text,
            (TokenKind::Number, TokenValue::Number(n)) => source_number(*n),
            (_, value) => value.to_string(),
        }
    }
}

/// A string value written back as source.
struct Quoted {
    text: String,
    /// The literal has no closing quote and runs to the end of input, so nothing may follow it.
    open: bool,
}

/// True when `"s"` reads back as `s`: every `"` is escaped and no `\` is left unpaired
/// at the end, where it would escape the closing quote.
fn fits_plain(s: &str) -> bool {
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.next().is_none() => return false,
            '"' => return false,
            _ => {}
        }
    }
    true
}

/// Pick a quoting style that survives re-tokenization.
///
/// Plain quotes keep escapes verbatim, so they are preferred. Triple quotes take anything
/// without `"""` that does not end in `"`. A value ending in `"` can only come from a triple
/// quoted literal left unterminated at the end of input, and is written back the same way.
fn quote(s: &str) -> Quoted {
    if fits_plain(s) {
        Quoted { text: format!("\"{}\"", s), open: false }
    } else if !s.contains("\"\"\"") && !s.ends_with('"') {
        Quoted { text: format!("\"\"\"{}\"\"\"", s), open: false }
    } else {
        Quoted { text: format!("\"\"\"{}", s), open: true }
    }
}

/// Numbers are written as plain digits, since the tokenizer only reads digit and dot runs.
fn source_number(n: f64) -> String {
    if n.is_finite() {
        format!("{}", n.abs())
    } else {
        // Any digit run past f64::MAX reads back as infinity.
        format!("1{}", "0".repeat(309))
    }
}

/// Detokenize a stream of tokens into source text
///
/// Tokens are separated by a single space. Line comments run to the end of the line, so a
/// newline follows them instead.
pub fn detokenize(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if let (TokenKind::String, TokenValue::Text(s)) = (&token.kind, &token.value) {
            let quoted = quote(s);
            out.push_str(&quoted.text);
            if quoted.open {
                break;
            }
            out.push(' ');
            continue;
        }
        out.push_str(&token.to_chx_string());
        let is_line_comment = token.kind == TokenKind::Comment
            && token.value.as_text().is_some_and(|s| s.starts_with('#'));
        out.push(if is_line_comment { '\n' } else { ' ' });
    }
    out
}
