//! Prompt text as an output format.

use super::registry::{FormatError, Formatter};
use crate::chx::ast::Program;
use crate::chx::prompt::generate_prompt;

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptFormatter;

impl Formatter for PromptFormatter {
    fn name(&self) -> &str {
        "prompt"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(generate_prompt(program))
    }

    fn description(&self) -> &str {
        "Flattened prompt with SYSTEM, CONTEXT FILES and TASKS sections"
    }
}
