//! Literal values carried by `@let` bindings and option maps.

use crate::chx::token::{serialize_number, TokenValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key/value options in source order. Later duplicate keys overwrite earlier ones.
pub type Options = IndexMap<String, Value>;

/// A value in an option map or array literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(#[serde(serialize_with = "serialize_number")] f64),
    Boolean(bool),
    Array(Vec<Value>),
}

impl From<TokenValue> for Value {
    fn from(value: TokenValue) -> Self {
        match value {
            TokenValue::Text(s) => Value::String(s),
            TokenValue::Number(n) => Value::Number(n),
            TokenValue::Boolean(b) => Value::Boolean(b),
        }
    }
}

/// The right-hand side of a `@let` binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LetValue {
    String {
        value: String,
    },
    Number {
        #[serde(serialize_with = "serialize_number")]
        value: f64,
    },
    /// A directive used as a function, e.g. `@json(./package.json)`. `args` is absent when
    /// no parenthesized list follows the name.
    FunctionCall {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<Vec<String>>,
    },
}
