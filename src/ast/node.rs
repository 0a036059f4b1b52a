//! Abstract Syntax Tree nodes.
use std::fmt::{self, Display};

/// A node of the syntax tree. Every stage after the parser dispatches on exactly these five
/// kinds, so the tree shape (programs contain assignments, assignments contain expressions)
/// is checked when the tree is walked rather than encoded in the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Program(Vec<Node>),
    Assign { name: String, expr: Box<Node> },
    Num(i64),
    Id(String),
    BinOp { op: BinOp, lhs: Box<Node>, rhs: Box<Node> },
}

impl Node {
    pub fn assign<S: Into<String>>(name: S, expr: Node) -> Self {
        Node::Assign {
            name: name.into(),
            expr: Box::new(expr),
        }
    }

    pub fn id<S: Into<String>>(name: S) -> Self {
        Node::Id(name.into())
    }

    pub fn bin(op: BinOp, lhs: Node, rhs: Node) -> Self {
        Node::BinOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program(_) => NodeKind::Program,
            Node::Assign { .. } => NodeKind::Assign,
            Node::Num(_) => NodeKind::Num,
            Node::Id(_) => NodeKind::Id,
            Node::BinOp { .. } => NodeKind::BinOp,
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Program(statements) => {
                for stmt in statements {
                    writeln!(f, "{}", stmt)?;
                }
                Ok(())
            }
            Node::Assign { name, expr } => write!(f, "{} = {};", name, expr),
            Node::Num(value) => write!(f, "{}", value),
            Node::Id(name) => f.write_str(name),
            Node::BinOp { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

/// The tag of a [`Node`], used when reporting a node found where the tree shape forbids it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Assign,
    Num,
    Id,
    BinOp,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Program => "program",
            NodeKind::Assign => "assignment",
            NodeKind::Num => "number",
            NodeKind::Id => "identifier",
            NodeKind::BinOp => "binary operation",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ch = match self {
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
        };
        f.write_str(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_operations_are_fully_parenthesised() {
        let expr = Node::bin(
            BinOp::Add,
            Node::id("b"),
            Node::bin(BinOp::Multiply, Node::id("c"), Node::Num(2)),
        );

        assert_eq!(Node::assign("a", expr).to_string(), "a = (b + (c * 2));");
    }

    #[test]
    fn program_prints_one_statement_per_line() {
        let program = Node::Program(vec![
            Node::assign("a", Node::Num(1)),
            Node::assign("b", Node::id("a")),
        ]);

        assert_eq!(program.to_string(), "a = 1;\nb = a;\n");
    }
}
