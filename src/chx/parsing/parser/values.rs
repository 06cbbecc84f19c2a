//! Option maps and array literals.

use super::Parser;
use crate::chx::ast::{Options, Value};
use crate::chx::token::TokenKind;
use tracing::trace;

impl Parser {
    /// `{ (IDENT :? value)* }`
    ///
    /// Yields an empty map when no brace follows. A key whose value is missing (end of input)
    /// is dropped, and tokens that cannot start an entry are skipped.
    pub(super) fn parse_options(&mut self) -> Options {
        let mut options = Options::new();
        if self.advance_if(TokenKind::LBrace).is_none() {
            return options;
        }

        while self.before(TokenKind::RBrace) {
            let Some(key) = self.text_if(TokenKind::Identifier) else {
                let skipped = self.advance();
                trace!(?skipped, "skipping token in option map");
                continue;
            };
            self.advance_if(TokenKind::Colon);

            let value = if self.check(TokenKind::LBracket) {
                Some(Value::Array(self.parse_array()))
            } else {
                self.advance().map(|t| Value::from(t.value))
            };

            match value {
                Some(value) => {
                    options.insert(key, value);
                }
                None => {
                    options.shift_remove(&key);
                }
            }
        }
        self.advance_if(TokenKind::RBrace);

        options
    }

    /// `[ (STRING | NUMBER | PATH)* ]`; any other element token is skipped.
    fn parse_array(&mut self) -> Vec<Value> {
        let mut items = Vec::new();
        if self.advance_if(TokenKind::LBracket).is_none() {
            return items;
        }

        while self.before(TokenKind::RBracket) {
            if let Some(token) = self.advance() {
                if matches!(
                    token.kind,
                    TokenKind::String | TokenKind::Number | TokenKind::Path
                ) {
                    items.push(Value::from(token.value));
                }
            }
        }
        self.advance_if(TokenKind::RBracket);

        items
    }
}

#[cfg(test)]
mod tests {
    use crate::chx::ast::{Node, Value};
    use crate::chx::parsing::parse_program;

    fn output_options(source: &str) -> crate::chx::ast::Options {
        match parse_program(source).body.into_iter().next() {
            Some(Node::Output(output)) => output.options,
            other => panic!("expected output, got {:?}", other),
        }
    }

    #[test]
    fn test_options_with_and_without_colons() {
        let options = output_options(r#"@output { format: "markdown" verbose true depth 2 }"#);
        assert_eq!(options.get("format"), Some(&Value::String("markdown".into())));
        assert_eq!(options.get("verbose"), Some(&Value::Boolean(true)));
        assert_eq!(options.get("depth"), Some(&Value::Number(2.0)));
        let keys: Vec<_> = options.keys().cloned().collect();
        assert_eq!(keys, vec!["format", "verbose", "depth"]);
    }

    #[test]
    fn test_array_values_keep_literals_only() {
        let options = output_options(r#"@output { langs: ["rust" 2 ./docs ident] }"#);
        assert_eq!(
            options.get("langs"),
            Some(&Value::Array(vec![
                Value::String("rust".into()),
                Value::Number(2.0),
                Value::String("./docs".into()),
            ]))
        );
    }

    #[test]
    fn test_value_may_be_any_token() {
        let options = output_options("@output { sep: , }");
        assert_eq!(options.get("sep"), Some(&Value::String(",".into())));
    }

    #[test]
    fn test_key_at_end_of_input_is_dropped() {
        let options = output_options("@output { a: 1 b");
        assert_eq!(options.len(), 1);
        assert!(options.get("b").is_none());
    }

    #[test]
    fn test_output_without_block_is_empty() {
        assert!(output_options("@output").is_empty());
    }

    #[test]
    fn test_duplicate_keys_overwrite() {
        let options = output_options("@output { a: 1 a: 2 }");
        assert_eq!(options.len(), 1);
        assert_eq!(options.get("a"), Some(&Value::Number(2.0)));
    }
}
