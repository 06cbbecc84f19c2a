//! Format registry for program output
//!
//! Each output format implements [`Formatter`] and is registered by name with a
//! [`FormatRegistry`].

use crate::chx::ast::Program;
use crate::chx::config::ChxConfig;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while producing formatted output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A named output format.
pub trait Formatter: Send + Sync {
    /// The name the format is registered under (e.g. "tree", "json").
    fn name(&self) -> &str;

    fn serialize(&self, program: &Program) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of formatters, keyed by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

/// Registry with the built-in formats and default settings.
pub static DEFAULT_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any previous one with the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a program using the named format.
    pub fn serialize(&self, program: &Program, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(program)
    }

    /// All registered format names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// A registry holding the built-in formats.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TreeFormatter);
        registry.register(super::JsonFormatter::default());
        registry.register(super::YamlFormatter);
        registry.register(super::PromptFormatter);

        registry
    }

    /// The built-in formats, with format settings taken from `config`.
    pub fn from_config(config: &ChxConfig) -> Self {
        let mut registry = Self::with_defaults();
        registry.register(super::JsonFormatter::new(config.json.pretty));
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
