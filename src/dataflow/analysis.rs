//! The dataflow analysis contract.

use crate::cfg::{Cfg, NodeId};

/// Capability set the generic solver drives an analysis through.
///
/// An implementation supplies the lattice (via its `Fact` type and
/// [`meet_into`](DataflowAnalysis::meet_into)), the boundary and
/// initial elements, the direction, and the per-node transfer
/// function. The solver owns iteration order and convergence.
///
/// # Transfer direction
///
/// [`transfer_node`](DataflowAnalysis::transfer_node) always receives
/// the input-side fact and writes the output-side fact: IN → OUT for a
/// forward analysis, OUT → IN for a backward one. The solver picks the
/// sides; implementations never inspect the direction again.
///
/// # Monotonicity
///
/// Every transfer function must be monotone under the pointwise
/// lattice order, and the lattice must have finite height; together
/// these guarantee the solver terminates on every finite CFG.
pub trait DataflowAnalysis {
    /// Element of the analysis lattice.
    type Fact: Clone + PartialEq;

    /// Whether facts flow entry → exit.
    fn is_forward(&self) -> bool;

    /// Fact for the boundary node (the entry of a forward analysis,
    /// the exit of a backward one).
    fn new_boundary_fact(&self, cfg: &Cfg) -> Self::Fact;

    /// Fact every other node starts from.
    fn new_initial_fact(&self) -> Self::Fact;

    /// Meet `fact` into `target` (pointwise greatest lower bound).
    fn meet_into(&self, fact: &Self::Fact, target: &mut Self::Fact);

    /// Apply the node's transfer function.
    ///
    /// Reads `input`, overwrites `output`, and returns whether `output`
    /// differs from its pre-call contents. The return value must be
    /// content equality, not object identity; the solver stops
    /// re-enqueueing exactly when it sees `false`.
    fn transfer_node(
        &self,
        cfg: &Cfg,
        node: NodeId,
        input: &Self::Fact,
        output: &mut Self::Fact,
    ) -> bool;
}
