//! AST as JSON.

use super::registry::{FormatError, Formatter};
use crate::chx::ast::Program;

#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(program)
        } else {
            serde_json::to_string(program)
        };
        result.map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Program AST as JSON"
    }
}
