//! Output formats for parsed programs
//!
//!     - tree: indented outline with one glyph per statement kind
//!     - json: the AST in its serialized shape, pretty or compact
//!     - yaml: the same AST as YAML
//!     - prompt: the flattened prompt text
//!
//!     Formats are looked up by name through [FormatRegistry].

pub mod json;
pub mod prompt;
pub mod registry;
pub mod tree;
pub mod yaml;

pub use json::JsonFormatter;
pub use prompt::PromptFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter, DEFAULT_REGISTRY};
pub use tree::{nodes_to_tree_str, to_tree_str, TreeFormatter};
pub use yaml::YamlFormatter;
