//! Monotone dataflow framework and its analysis instances.
//!
//! The framework splits into a contract and a driver: any type
//! implementing [`DataflowAnalysis`] (lattice, direction, boundary and
//! initial facts, transfer function) can be run to its fixed point by
//! the generic [`Solver`]. Two instances ship with the crate:
//!
//! - [`ConstantPropagation`] (forward): per-variable constant facts
//! - [`LiveVariableAnalysis`] (backward): live-variable sets
//!
//! [`DeadCodeDetection`] is not a solver client; it reads both
//! converged results together with the CFG and classifies statements
//! as live or dead.

pub mod analysis;
pub mod constant_propagation;
pub mod dead_code;
pub mod fact;
pub mod live_variables;
pub mod solver;

#[cfg(test)]
pub(crate) mod common;

pub use analysis::DataflowAnalysis;
pub use constant_propagation::{evaluate, ConstantPropagation, Value};
pub use dead_code::DeadCodeDetection;
pub use fact::{CPFact, DataflowResult, SetFact};
pub use live_variables::LiveVariableAnalysis;
pub use solver::Solver;
