//! AST as YAML.

use super::registry::{FormatError, Formatter};
use crate::chx::ast::Program;

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        serde_yaml::to_string(program).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Program AST as YAML"
    }
}
