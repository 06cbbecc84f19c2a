//! AST for the chx format
//!
//!     The tree is a closed sum type. A [`Program`] holds an ordered list of statement
//!     [`Node`]s; each node wraps one element struct from [`elements`]. Body-bearing elements
//!     (contexts, tasks, conditionals, mixins, role expertise) nest further nodes, so the
//!     tree is recursive and acyclic with the program at the root.
//!
//!     Order is meaningful everywhere: statement bodies, rule lists, path lists and option
//!     maps all keep source order.
//!
//! Serialization
//!
//!     The AST serializes to the JSON shape consumers and fixtures use: every node is an
//!     object with a `"type"` tag (`"Program"`, `"Context"`, `"Rules"`, ...) and the field
//!     names of the element (`contextType`, `extends`, `expertise`, ...). Absent optional
//!     fields serialize as `null`. The same shape deserializes back into the tree.

pub mod elements;
pub mod node;
pub mod program;
pub mod value;

pub use elements::{
    Apply, Comment, Context, ContextKind, Directive, Exclude, If, Import, Include, Let, Mixin,
    Output, Priority, Role, Rules, SimpleDirective, SimpleKind, Task,
};
pub use node::Node;
pub use program::Program;
pub use value::{LetValue, Options, Value};
