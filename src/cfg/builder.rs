//! Programmatic CFG construction.

use crate::ir::{Ir, StmtKind};

use super::types::{Cfg, CfgEdge, CfgError, EdgeKind, NodeId};

/// Builder for a [`Cfg`] over a finished method body.
///
/// Node ids are fixed by the layout (entry, one node per statement,
/// exit); the builder only collects edges and validates the result.
#[derive(Debug)]
pub struct CfgBuilder {
    ir: Ir,
    edges: Vec<CfgEdge>,
}

impl CfgBuilder {
    /// Start building a graph over `ir`.
    #[must_use]
    pub fn new(ir: Ir) -> Self {
        Self {
            ir,
            edges: Vec::new(),
        }
    }

    /// The synthetic entry node.
    #[must_use]
    pub fn entry(&self) -> NodeId {
        NodeId(0)
    }

    /// The synthetic exit node.
    #[must_use]
    pub fn exit(&self) -> NodeId {
        NodeId(self.ir.stmts().len() + 1)
    }

    /// Node of the statement with the given index.
    #[must_use]
    pub fn node(&self, stmt_index: usize) -> NodeId {
        NodeId(stmt_index + 1)
    }

    /// Add a typed edge.
    pub fn edge(&mut self, from: NodeId, to: NodeId, kind: EdgeKind) -> &mut Self {
        self.edges.push(CfgEdge { from, to, kind });
        self
    }

    /// Finish and validate the graph.
    pub fn build(self) -> Result<Cfg, CfgError> {
        let node_count = self.ir.stmts().len() + 2;
        let entry = NodeId(0);
        let exit = NodeId(node_count - 1);

        for edge in &self.edges {
            for endpoint in [edge.from, edge.to] {
                if endpoint.0 >= node_count {
                    return Err(CfgError::InvalidEdgeNode(endpoint));
                }
            }
            if edge.to == entry {
                return Err(CfgError::BoundaryEdge(entry));
            }
            if edge.from == exit {
                return Err(CfgError::BoundaryEdge(exit));
            }

            // branch-typed edges must leave the matching statement kind
            let source_kind = (edge.from != entry).then(|| {
                self.ir.stmts()[edge.from.0 - 1].kind()
            });
            match edge.kind {
                EdgeKind::IfTrue | EdgeKind::IfFalse => {
                    if !matches!(source_kind, Some(StmtKind::If { .. })) {
                        return Err(CfgError::InvalidConditionalEdge(edge.from));
                    }
                }
                EdgeKind::SwitchCase(_) | EdgeKind::SwitchDefault => {
                    if !matches!(source_kind, Some(StmtKind::Switch { .. })) {
                        return Err(CfgError::InvalidSwitchEdge(edge.from));
                    }
                }
                _ => {}
            }
        }

        Ok(Cfg::new(self.ir, self.edges))
    }
}
