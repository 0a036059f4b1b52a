use std::fmt::{self, Display};

use thiserror::Error;

use super::NodeKind;

/// A node of a known kind found somewhere the tree shape does not allow it, such as a
/// program nested inside an expression. The parser never builds such trees; this guards
/// trees assembled by other producers.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unexpected {found} node in {context}")]
pub struct UnexpectedNode {
    pub found: NodeKind,
    pub context: Context,
}
impl UnexpectedNode {
    pub fn new(found: NodeKind, context: Context) -> Self {
        Self { found, context }
    }
}

/// Where in the tree a node was encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// A statement directly inside a program.
    Program,
    /// An operand of an assignment or binary operation.
    Expression,
}
impl Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Context::Program => "a program body",
            Context::Expression => "an expression",
        })
    }
}
