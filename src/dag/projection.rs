//! Read-only views of a [`Dag`] for display: node and edge listings, and Graphviz DOT.
use std::fmt::{self, Display};

use crate::ast::BinOp;

use super::{Dag, DagNode, NodeId};

/// Everything a renderer needs to know about one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescription<'a> {
    pub index: NodeId,
    pub is_leaf: bool,
    pub operator: Option<BinOp>,
    /// The literal or identifier of a leaf.
    pub value: Option<String>,
    pub labels: &'a [String],
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<'a> NodeDescription<'a> {
    fn new(index: NodeId, node: &'a DagNode) -> Self {
        let children = node.children();
        Self {
            index,
            is_leaf: node.is_leaf(),
            operator: node.operator(),
            value: node.is_leaf().then(|| node.symbol()),
            labels: node.labels(),
            left: children.map(|(left, _)| left),
            right: children.map(|(_, right)| right),
        }
    }

    /// The operator or leaf value of the node.
    pub fn symbol(&self) -> String {
        match (&self.operator, &self.value) {
            (Some(op), _) => op.to_string(),
            (None, Some(value)) => value.clone(),
            (None, None) => String::new(),
        }
    }
}

impl Dag {
    pub fn describe(&self) -> Vec<NodeDescription<'_>> {
        self.iter()
            .map(|(index, node)| NodeDescription::new(index, node))
            .collect()
    }

    /// One `index: label` line per node, with variable labels in brackets.
    pub fn node_listing(&self) -> Vec<String> {
        self.describe()
            .iter()
            .map(|node| {
                if node.labels.is_empty() {
                    format!("{}: {}", node.index, node.symbol())
                } else {
                    format!("{}: {} [{}]", node.index, node.symbol(), node.labels.join(", "))
                }
            })
            .collect()
    }

    /// One `index → child` line per edge; the left edge of a node precedes its right edge.
    pub fn edge_listing(&self) -> Vec<String> {
        self.edges()
            .into_iter()
            .map(|(from, to)| format!("{} → {}", from, to))
            .collect()
    }

    pub fn to_dot(&self) -> Dot<'_> {
        Dot(self)
    }

    fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.describe()
            .iter()
            .flat_map(|node| {
                [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .map(move |child| (node.index, child))
            })
            .collect()
    }
}

/// Displays a [`Dag`] as a Graphviz digraph: leaves are boxes, interior nodes ellipses.
pub struct Dot<'a>(&'a Dag);

impl Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "digraph DAG {{")?;
        writeln!(f, "    node [shape=ellipse];")?;
        for node in self.0.describe() {
            let mut label = escape(&node.symbol());
            if !node.labels.is_empty() {
                label.push_str("\\n");
                label.push_str(&escape(&node.labels.join(",")));
            }
            if node.is_leaf {
                writeln!(f, "    {} [label=\"{}\", shape=box];", node.index, label)?;
            } else {
                writeln!(f, "    {} [label=\"{}\"];", node.index, label)?;
            }
        }
        for (from, to) in self.0.edges() {
            writeln!(f, "    {} -> {};", from, to)?;
        }
        f.write_str("}")
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
