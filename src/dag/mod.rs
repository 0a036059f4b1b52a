//! Directed acyclic graph construction, exposing shared subexpressions.
mod builder;
mod node;
mod projection;

pub use builder::{build, Roots};
pub use node::{DagNode, NodeId};

/// An append-only arena of DAG nodes. A node's index is its [`NodeId`], and children are
/// referred to by id, so the graph holds no owning references between nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dag {
    nodes: Vec<DagNode>,
}

impl Dag {
    pub fn node(&self, id: NodeId) -> Option<&DagNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &DagNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }
}
