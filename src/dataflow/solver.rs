//! Generic worklist solver.
//!
//! Drives any [`DataflowAnalysis`] to its fixed point over a CFG:
//!
//! 1. Populate the result with initial facts; seed the boundary node
//!    (entry for forward, exit for backward) with the boundary fact.
//! 2. Put every non-boundary node on a FIFO worklist.
//! 3. Pop a node, meet the neighbouring facts into its input side,
//!    apply the transfer function, and re-enqueue the downstream
//!    neighbours whenever the output side changed.
//!
//! The queue discipline is irrelevant to the result: lattice finiteness
//! and transfer monotonicity make the fixed point unique, so ordering
//! only affects how often nodes are touched.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::cfg::{Cfg, NodeId};

use super::analysis::DataflowAnalysis;
use super::fact::DataflowResult;

/// Fixed-point driver for one analysis.
pub struct Solver<A> {
    analysis: A,
}

impl<A: DataflowAnalysis> Solver<A> {
    /// Wrap an analysis.
    #[must_use]
    pub fn new(analysis: A) -> Self {
        Self { analysis }
    }

    /// The wrapped analysis.
    #[must_use]
    pub fn analysis(&self) -> &A {
        &self.analysis
    }

    /// Run to the fixed point and hand back the converged facts.
    #[must_use]
    pub fn solve(&self, cfg: &Cfg) -> DataflowResult<A::Fact> {
        let mut result = self.initialize(cfg);
        if self.analysis.is_forward() {
            let seed: Vec<NodeId> = cfg.nodes().filter(|n| !cfg.is_entry(*n)).collect();
            self.run_forward(cfg, &mut result, seed);
        } else {
            let seed: Vec<NodeId> = cfg.nodes().filter(|n| !cfg.is_exit(*n)).collect();
            self.run_backward(cfg, &mut result, seed);
        }
        result
    }

    fn initialize(&self, cfg: &Cfg) -> DataflowResult<A::Fact> {
        let mut result =
            DataflowResult::new_with(cfg.node_count(), || self.analysis.new_initial_fact());
        let boundary = self.analysis.new_boundary_fact(cfg);
        if self.analysis.is_forward() {
            result.out_facts[cfg.entry().0] = boundary;
        } else {
            result.in_facts[cfg.exit().0] = boundary;
        }
        result
    }

    fn run_forward(&self, cfg: &Cfg, result: &mut DataflowResult<A::Fact>, seed: Vec<NodeId>) {
        let mut queued = FixedBitSet::with_capacity(cfg.node_count());
        let mut worklist: VecDeque<NodeId> = VecDeque::with_capacity(seed.len());
        for node in seed {
            if !queued.contains(node.0) {
                queued.insert(node.0);
                worklist.push_back(node);
            }
        }

        let mut iterations = 0usize;
        while let Some(node) = worklist.pop_front() {
            queued.set(node.0, false);
            iterations += 1;

            for &pred in cfg.preds_of(node) {
                self.analysis
                    .meet_into(&result.out_facts[pred.0], &mut result.in_facts[node.0]);
            }

            let changed = self.analysis.transfer_node(
                cfg,
                node,
                &result.in_facts[node.0],
                &mut result.out_facts[node.0],
            );

            if changed {
                for &succ in cfg.succs_of(node) {
                    if !queued.contains(succ.0) {
                        queued.insert(succ.0);
                        worklist.push_back(succ);
                    }
                }
            }
        }
        debug!(iterations, "forward dataflow solve converged");
    }

    fn run_backward(&self, cfg: &Cfg, result: &mut DataflowResult<A::Fact>, seed: Vec<NodeId>) {
        let mut queued = FixedBitSet::with_capacity(cfg.node_count());
        let mut worklist: VecDeque<NodeId> = VecDeque::with_capacity(seed.len());
        for node in seed {
            if !queued.contains(node.0) {
                queued.insert(node.0);
                worklist.push_back(node);
            }
        }

        let mut iterations = 0usize;
        while let Some(node) = worklist.pop_front() {
            queued.set(node.0, false);
            iterations += 1;

            for &succ in cfg.succs_of(node) {
                self.analysis
                    .meet_into(&result.in_facts[succ.0], &mut result.out_facts[node.0]);
            }

            let changed = self.analysis.transfer_node(
                cfg,
                node,
                &result.out_facts[node.0],
                &mut result.in_facts[node.0],
            );

            if changed {
                for &pred in cfg.preds_of(node) {
                    if !queued.contains(pred.0) {
                        queued.insert(pred.0);
                        worklist.push_back(pred);
                    }
                }
            }
        }
        debug!(iterations, "backward dataflow solve converged");
    }

    /// Solve with a caller-chosen initial worklist order; results must
    /// not depend on it.
    #[cfg(test)]
    pub(crate) fn solve_with_seed(&self, cfg: &Cfg, seed: Vec<NodeId>) -> DataflowResult<A::Fact> {
        let mut result = self.initialize(cfg);
        if self.analysis.is_forward() {
            self.run_forward(cfg, &mut result, seed);
        } else {
            self.run_backward(cfg, &mut result, seed);
        }
        result
    }
}
