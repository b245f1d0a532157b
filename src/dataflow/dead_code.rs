//! Dead-code detection.
//!
//! Combines converged constant-propagation and liveness facts with the
//! CFG to classify statements as live or dead. Two things make a
//! statement dead:
//!
//! - **Unreachability.** The walk from the entry prunes the untaken
//!   side of an `if` whose guard folds to a constant, and the unmatched
//!   arms of a `switch` over a constant scrutinee. Statements never
//!   reached are dead.
//! - **Dead stores.** An assignment whose rvalue has no observable
//!   side effect, whose lvalue is a local variable, and whose variable
//!   is not live out of the statement computes a value nobody reads.
//!   Control still flows through it, so its successors are visited.
//!
//! The output is ordered by statement index, making it independent of
//! the walk's queue discipline.

use std::collections::{BTreeSet, VecDeque};

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::cfg::{Cfg, EdgeKind, NodeId};
use crate::config::AnalysisConfig;
use crate::ir::{LValue, Stmt, StmtKind, Var};

use super::constant_propagation::evaluate;
use super::fact::{CPFact, DataflowResult, SetFact};

/// Dead-code detector over precomputed dataflow results.
#[derive(Debug, Default)]
pub struct DeadCodeDetection;

impl DeadCodeDetection {
    /// Identifier this detector publishes its results under.
    pub const ID: &'static str = "deadcode";

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Construct from a harness configuration; the options are opaque
    /// to this detector.
    #[must_use]
    pub fn from_config(_config: &AnalysisConfig) -> Self {
        Self
    }

    /// Indices of the dead statements, ordered by statement index.
    #[must_use]
    pub fn analyze(
        &self,
        cfg: &Cfg,
        constants: &DataflowResult<CPFact>,
        live_vars: &DataflowResult<SetFact<Var>>,
    ) -> BTreeSet<usize> {
        let mut live = BTreeSet::new();
        let mut visited = FixedBitSet::with_capacity(cfg.node_count());
        let mut queue = VecDeque::new();
        queue.push_back(cfg.entry());

        while let Some(cur) = queue.pop_front() {
            if visited.contains(cur.0) {
                continue;
            }
            visited.insert(cur.0);

            if cfg.is_exit(cur) {
                continue;
            }
            let Some(stmt) = cfg.stmt_of(cur) else {
                // synthetic entry
                self.enqueue_all(cfg, cur, &mut queue);
                continue;
            };

            match stmt.kind() {
                StmtKind::If { cond } => {
                    live.insert(stmt.index());
                    match evaluate(cond, constants.in_fact(cur)).as_constant() {
                        Some(c) => {
                            // prune the branch the guard can never take
                            let taken = if c != 0 {
                                EdgeKind::IfTrue
                            } else {
                                EdgeKind::IfFalse
                            };
                            for edge in cfg.out_edges_of(cur) {
                                if edge.kind == taken {
                                    queue.push_back(edge.to);
                                }
                            }
                        }
                        None => self.enqueue_all(cfg, cur, &mut queue),
                    }
                }
                StmtKind::Switch { var } => {
                    live.insert(stmt.index());
                    match constants.in_fact(cur).get(*var).as_constant() {
                        Some(c) => {
                            // every matching case arm is reachable; the
                            // default only when no case matches
                            let mut matched = false;
                            for edge in cfg.out_edges_of(cur) {
                                if edge.kind == EdgeKind::SwitchCase(c) {
                                    matched = true;
                                    queue.push_back(edge.to);
                                }
                            }
                            if !matched {
                                for edge in cfg.out_edges_of(cur) {
                                    if edge.kind == EdgeKind::SwitchDefault {
                                        queue.push_back(edge.to);
                                    }
                                }
                            }
                        }
                        None => self.enqueue_all(cfg, cur, &mut queue),
                    }
                }
                StmtKind::Assign { lvalue, rvalue } => {
                    let dead_store = rvalue.has_no_side_effect()
                        && matches!(
                            lvalue,
                            LValue::Var(v) if !live_vars.out_fact(cur).contains(v)
                        );
                    if !dead_store {
                        live.insert(stmt.index());
                    }
                    // the store is a no-op, not a barrier
                    self.enqueue_all(cfg, cur, &mut queue);
                }
                _ => {
                    live.insert(stmt.index());
                    self.enqueue_all(cfg, cur, &mut queue);
                }
            }
        }

        let dead: BTreeSet<usize> = cfg
            .ir()
            .stmts()
            .iter()
            .map(Stmt::index)
            .filter(|index| !live.contains(index))
            .collect();
        debug!(
            live = live.len(),
            dead = dead.len(),
            "dead-code walk finished"
        );
        dead
    }

    fn enqueue_all(&self, cfg: &Cfg, node: NodeId, queue: &mut VecDeque<NodeId>) {
        queue.extend(cfg.succs_of(node).iter().copied());
    }
}
