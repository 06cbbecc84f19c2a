//! Program root node

use super::node::Node;
use serde::{Deserialize, Serialize};

/// The root of every parse: an ordered list of top-level statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Depth-first, document-order walk over every node in the tree.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        let mut stack: Vec<&Node> = self.body.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Some(children) = node.body() {
                stack.extend(children.iter().rev());
            }
            Some(node)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chx::ast::{Comment, Node, Task};

    #[test]
    fn test_empty_program_json() {
        let json = serde_json::to_string(&Program::default()).unwrap();
        assert_eq!(json, r#"{"type":"Program","body":[]}"#);
    }

    #[test]
    fn test_walk_is_document_order() {
        let program = Program::new(vec![
            Node::Task(Task {
                name: "outer".into(),
                body: vec![Node::Comment(Comment {
                    value: "# inner".into(),
                })],
            }),
            Node::Comment(Comment {
                value: "# after".into(),
            }),
        ]);
        let types: Vec<&str> = program.walk().map(|n| n.type_name()).collect();
        assert_eq!(types, vec!["Task", "Comment", "Comment"]);
    }
}
