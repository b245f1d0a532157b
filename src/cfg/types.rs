//! CFG type definitions.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ir::{Ir, Stmt};

/// Errors that can occur during CFG validation.
///
/// These errors indicate structural inconsistencies in the control flow
/// graph that would make analysis results meaningless.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CfgError {
    /// An edge references a node id outside the graph.
    #[error("edge endpoint {0:?} does not exist in the graph")]
    InvalidEdgeNode(NodeId),

    /// An edge targets the entry or leaves the exit.
    #[error("edge through synthetic boundary node {0:?}")]
    BoundaryEdge(NodeId),

    /// An `IfTrue`/`IfFalse` edge leaves a node that is not an `If`.
    #[error("conditional edge leaving non-conditional node {0:?}")]
    InvalidConditionalEdge(NodeId),

    /// A `SwitchCase`/`SwitchDefault` edge leaves a node that is not a `Switch`.
    #[error("switch edge leaving non-switch node {0:?}")]
    InvalidSwitchEdge(NodeId),
}

/// Unique identifier for a CFG node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct NodeId(pub usize);

/// What a node stands for: the synthetic entry, the synthetic exit, or
/// one IR statement (by index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CfgNode {
    Entry,
    Exit,
    Stmt(usize),
}

/// Semantic kind of a CFG edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Sequential flow to the next statement.
    FallThrough,
    /// Unconditional jump.
    Goto,
    /// Taken branch of a conditional.
    IfTrue,
    /// Fall-through branch of a conditional.
    IfFalse,
    /// Switch case edge, carrying its case value.
    SwitchCase(i32),
    /// Switch default edge.
    SwitchDefault,
    /// Flow from a return statement to the exit.
    Return,
}

/// An edge in the control flow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CfgEdge {
    /// Source node.
    pub from: NodeId,
    /// Target node.
    pub to: NodeId,
    /// Semantic edge kind.
    pub kind: EdgeKind,
}

impl CfgEdge {
    /// Case value carried by a `SwitchCase` edge.
    #[must_use]
    pub fn case_value(&self) -> Option<i32> {
        match self.kind {
            EdgeKind::SwitchCase(value) => Some(value),
            _ => None,
        }
    }
}

/// Cached adjacency lists for O(1) successor/predecessor lookups.
///
/// Built lazily on first access to avoid the work for graphs that are
/// constructed but never solved.
#[derive(Debug, Default)]
struct AdjacencyCache {
    successors: OnceCell<Vec<Vec<NodeId>>>,
    predecessors: OnceCell<Vec<Vec<NodeId>>>,
}

/// Control flow graph of one method body.
///
/// Nodes are laid out deterministically: `NodeId(0)` is the synthetic
/// entry, statement `i` is `NodeId(i + 1)`, and the synthetic exit is
/// the last id. The graph owns its [`Ir`].
#[derive(Debug)]
pub struct Cfg {
    ir: Ir,
    edges: Vec<CfgEdge>,
    adjacency: AdjacencyCache,
}

impl Cfg {
    pub(crate) fn new(ir: Ir, edges: Vec<CfgEdge>) -> Self {
        Self {
            ir,
            edges,
            adjacency: AdjacencyCache::default(),
        }
    }

    /// The method body this graph was built over.
    #[must_use]
    pub fn ir(&self) -> &Ir {
        &self.ir
    }

    /// Total node count, including entry and exit.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.ir.stmts().len() + 2
    }

    /// Iterate all node ids in layout order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId)
    }

    /// The synthetic entry node.
    #[must_use]
    pub fn entry(&self) -> NodeId {
        NodeId(0)
    }

    /// The synthetic exit node.
    #[must_use]
    pub fn exit(&self) -> NodeId {
        NodeId(self.node_count() - 1)
    }

    #[must_use]
    pub fn is_entry(&self, node: NodeId) -> bool {
        node == self.entry()
    }

    #[must_use]
    pub fn is_exit(&self, node: NodeId) -> bool {
        node == self.exit()
    }

    /// What `node` stands for.
    #[must_use]
    pub fn node(&self, node: NodeId) -> CfgNode {
        if self.is_entry(node) {
            CfgNode::Entry
        } else if self.is_exit(node) {
            CfgNode::Exit
        } else {
            CfgNode::Stmt(node.0 - 1)
        }
    }

    /// The statement at `node`; `None` for the synthetic entry/exit.
    #[must_use]
    pub fn stmt_of(&self, node: NodeId) -> Option<&Stmt> {
        match self.node(node) {
            CfgNode::Stmt(index) => Some(&self.ir.stmts()[index]),
            _ => None,
        }
    }

    /// Node carrying the statement with the given index.
    #[must_use]
    pub fn node_of_stmt(&self, index: usize) -> NodeId {
        debug_assert!(index < self.ir.stmts().len());
        NodeId(index + 1)
    }

    /// All edges of the graph.
    #[must_use]
    pub fn edges(&self) -> &[CfgEdge] {
        &self.edges
    }

    /// Typed out-edges of a node.
    pub fn out_edges_of(&self, node: NodeId) -> impl Iterator<Item = &CfgEdge> {
        self.edges.iter().filter(move |e| e.from == node)
    }

    /// Successor nodes.
    #[must_use]
    pub fn succs_of(&self, node: NodeId) -> &[NodeId] {
        let successors = self.adjacency.successors.get_or_init(|| {
            let mut lists = vec![Vec::new(); self.node_count()];
            for edge in &self.edges {
                lists[edge.from.0].push(edge.to);
            }
            lists
        });
        &successors[node.0]
    }

    /// Predecessor nodes.
    #[must_use]
    pub fn preds_of(&self, node: NodeId) -> &[NodeId] {
        let predecessors = self.adjacency.predecessors.get_or_init(|| {
            let mut lists = vec![Vec::new(); self.node_count()];
            for edge in &self.edges {
                lists[edge.to.0].push(edge.from);
            }
            lists
        });
        &predecessors[node.0]
    }
}
