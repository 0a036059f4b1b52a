use std::collections::HashMap;

use log::{debug, trace};

use crate::ast::{Context, Node, UnexpectedNode};

use super::{node::*, Dag};

/// What a tree evaluated to: one node per statement for a program, or a single node for an
/// assignment or expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roots {
    Program(Vec<NodeId>),
    Node(NodeId),
}

/// Builds the DAG of a syntax tree with a fresh builder.
pub fn build(ast: &Node) -> Result<(Dag, Roots), UnexpectedNode> {
    let mut builder = DagBuilder::new();
    let roots = builder.build(ast)?;
    let dag = builder.finish();
    debug!("Built DAG with {} nodes", dag.len());
    Ok((dag, roots))
}

/// Builds a DAG by value numbering: every node is looked up by its [`NodeKey`] before it is
/// created, so structurally equal subexpressions share one node.
///
/// Labels accumulate across every tree built with the same builder, so each compilation
/// needs its own builder.
pub struct DagBuilder {
    nodes: Vec<DagNode>,
    table: HashMap<NodeKey, NodeId>,
}

impl DagBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![],
            table: HashMap::new(),
        }
    }

    pub fn build(&mut self, node: &Node) -> Result<Roots, UnexpectedNode> {
        match node {
            Node::Program(statements) => statements
                .iter()
                .map(|stmt| self.build_stmt(stmt))
                .collect::<Result<_, _>>()
                .map(Roots::Program),
            Node::Assign { name, expr } => self.build_assign(name, expr).map(Roots::Node),
            Node::Num(_) | Node::Id(_) | Node::BinOp { .. } => {
                self.build_expr(node).map(Roots::Node)
            }
        }
    }

    pub fn finish(self) -> Dag {
        Dag { nodes: self.nodes }
    }

    fn build_stmt(&mut self, stmt: &Node) -> Result<NodeId, UnexpectedNode> {
        match stmt {
            Node::Assign { name, expr } => self.build_assign(name, expr),
            other => Err(UnexpectedNode::new(other.kind(), Context::Program)),
        }
    }

    /// Labels the node holding the expression's value with the assigned variable. Earlier
    /// labels for the same variable on other nodes are left in place.
    fn build_assign(&mut self, name: &str, expr: &Node) -> Result<NodeId, UnexpectedNode> {
        let id = self.build_expr(expr)?;
        self.nodes[id.0].add_label(name);
        trace!("Label DAG node {} with {}", id, name);
        Ok(id)
    }

    fn build_expr(&mut self, expr: &Node) -> Result<NodeId, UnexpectedNode> {
        let key = match expr {
            Node::Num(n) => NodeKey::Leaf(Leaf::Num(*n)),
            Node::Id(id) => NodeKey::Leaf(Leaf::Id(id.clone())),
            Node::BinOp { op, lhs, rhs } => NodeKey::Interior {
                op: *op,
                left: self.build_expr(lhs)?,
                right: self.build_expr(rhs)?,
            },
            Node::Program(_) | Node::Assign { .. } => {
                return Err(UnexpectedNode::new(expr.kind(), Context::Expression))
            }
        };
        Ok(self.get_or_create(key))
    }

    fn get_or_create(&mut self, key: NodeKey) -> NodeId {
        if let Some(&id) = self.table.get(&key) {
            trace!("Reuse DAG node {} for {:?}", id, key);
            return id;
        }

        let id = NodeId(self.nodes.len());
        trace!("Create DAG node {} for {:?}", id, key);
        self.nodes.push(DagNode::new(key.clone()));
        self.table.insert(key, id);
        id
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinOp, NodeKind},
        lexer::lex,
        parser::parse,
    };

    use super::*;

    fn build_source(source: &str) -> (Dag, Roots) {
        let tokens = lex(source).unwrap();
        let program = parse(&tokens).unwrap();
        build(&program).unwrap()
    }

    fn symbols(dag: &Dag) -> Vec<String> {
        dag.iter().map(|(_, node)| node.symbol()).collect()
    }

    #[test]
    fn nodes_are_created_in_post_order() {
        let (dag, roots) = build_source("a = b + c * d;");

        assert_eq!(symbols(&dag), ["b", "c", "d", "*", "+"]);
        assert_eq!(roots, Roots::Program(vec![NodeId(4)]));
        assert_eq!(dag.node(NodeId(4)).unwrap().labels(), ["a"]);
        assert_eq!(dag.node(NodeId(4)).unwrap().children(), Some((NodeId(0), NodeId(3))));
    }

    #[test]
    fn common_subexpression_is_shared() {
        let (shared, roots) = build_source("a = b + c;\nx = b + c;");
        let (independent, _) = build_source("a = b + c;\nx = d + e;");

        let interior: Vec<_> = shared.iter().filter(|(_, n)| !n.is_leaf()).collect();
        assert_eq!(interior.len(), 1);
        assert_eq!(interior[0].1.labels(), ["a", "x"]);
        assert_eq!(roots, Roots::Program(vec![NodeId(2), NodeId(2)]));
        assert!(shared.len() < independent.len());
    }

    #[test]
    fn sharing_applies_within_one_expression() {
        let (dag, _) = build_source("a = (b + c) * (b + c);");

        assert_eq!(symbols(&dag), ["b", "c", "+", "*"]);
        assert_eq!(dag.node(NodeId(3)).unwrap().children(), Some((NodeId(2), NodeId(2))));
    }

    #[test]
    fn equal_leaves_are_shared() {
        let (dag, _) = build_source("a = 1;\nb = 1;\nc = x - x;");

        assert_eq!(symbols(&dag), ["1", "x", "-"]);
        assert_eq!(dag.node(NodeId(0)).unwrap().labels(), ["a", "b"]);
    }

    #[test]
    fn operand_order_matters() {
        let (dag, _) = build_source("a = b - c;\nx = c - b;");

        assert_eq!(symbols(&dag), ["b", "c", "-", "-"]);
    }

    #[test]
    fn different_operators_are_not_shared() {
        let (dag, _) = build_source("a = b + c;\nx = b * c;");

        assert_eq!(symbols(&dag), ["b", "c", "+", "*"]);
    }

    /// Reassigning a variable does not remove its label from the node it was bound to
    /// before. Both nodes end up labelled `a`, and only statement order tells them apart.
    #[test]
    fn reassignment_keeps_stale_label() {
        let (dag, roots) = build_source("a = b + c;\na = d;");

        assert_eq!(roots, Roots::Program(vec![NodeId(2), NodeId(3)]));
        assert_eq!(dag.node(NodeId(2)).unwrap().labels(), ["a"]);
        assert_eq!(dag.node(NodeId(3)).unwrap().labels(), ["a"]);
    }

    #[test]
    fn repeated_assignment_labels_once() {
        let (dag, _) = build_source("a = b * 2;\na = b * 2;");

        assert_eq!(dag.node(NodeId(2)).unwrap().labels(), ["a"]);
    }

    #[test]
    fn building_twice_gives_the_same_graph() {
        let source = "p = (x + y) * z;\nq = x + y;\nr = q - p / 2;";

        let (first, first_roots) = build_source(source);
        let (second, second_roots) = build_source(source);

        assert_eq!(first, second);
        assert_eq!(first_roots, second_roots);
    }

    #[test]
    fn bare_expression_at_root() {
        let mut builder = DagBuilder::new();
        let roots = builder
            .build(&Node::bin(BinOp::Add, Node::id("a"), Node::Num(1)))
            .unwrap();

        assert_eq!(roots, Roots::Node(NodeId(2)));
        assert_eq!(builder.finish().len(), 3);
    }

    #[test]
    fn assignment_inside_expression_is_rejected() {
        let ast = Node::assign(
            "a",
            Node::bin(BinOp::Add, Node::assign("b", Node::Num(1)), Node::Num(2)),
        );

        assert_eq!(
            build(&ast).unwrap_err(),
            UnexpectedNode::new(NodeKind::Assign, Context::Expression)
        );
    }

    #[test]
    fn nested_program_is_rejected() {
        let ast = Node::Program(vec![Node::Program(vec![])]);

        assert_eq!(
            build(&ast).unwrap_err(),
            UnexpectedNode::new(NodeKind::Program, Context::Program)
        );
    }
}
