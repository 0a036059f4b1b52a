use std::fmt::{self, Display, Formatter};

use crate::ast::BinOp;

/// The stable index of a node in its [`Dag`](super::Dag). Nodes are numbered in the order
/// they were created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What a node computes. Doubles as the canonicalisation key: at most one node exists per
/// distinct key, and because children are themselves canonical, comparing child ids is
/// enough to compare whole subexpressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    Leaf(Leaf),
    Interior {
        op: BinOp,
        left: NodeId,
        right: NodeId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Leaf {
    Num(i64),
    Id(String),
}

impl Display for Leaf {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Leaf::Num(n) => n.fmt(f),
            Leaf::Id(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DagNode {
    key: NodeKey,
    labels: Vec<String>,
}

impl DagNode {
    pub fn new(key: NodeKey) -> Self {
        Self {
            key,
            labels: vec![],
        }
    }

    /// The variables bound to this node's value, in the order they were assigned.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Adds a variable label unless it is already present. Labels are never removed.
    pub fn add_label(&mut self, name: &str) {
        if !self.labels.iter().any(|l| l == name) {
            self.labels.push(name.to_string());
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.key, NodeKey::Leaf(_))
    }

    pub fn operator(&self) -> Option<BinOp> {
        match &self.key {
            NodeKey::Interior { op, .. } => Some(*op),
            NodeKey::Leaf(_) => None,
        }
    }

    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match &self.key {
            NodeKey::Interior { left, right, .. } => Some((*left, *right)),
            NodeKey::Leaf(_) => None,
        }
    }

    /// The operator of an interior node, or the value of a leaf.
    pub fn symbol(&self) -> String {
        match &self.key {
            NodeKey::Leaf(leaf) => leaf.to_string(),
            NodeKey::Interior { op, .. } => op.to_string(),
        }
    }
}
