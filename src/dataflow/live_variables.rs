//! Live-variable analysis - backward dataflow instance.
//!
//! A variable is live at a program point if its current value may be
//! read before being overwritten on some path to the exit. The
//! per-statement equations are:
//!
//! - `OUT[s] = UNION(IN[t])` over the successors `t` of `s`
//! - `IN[s]  = uses(s) UNION (OUT[s] - def(s))`
//!
//! The dead-code detector consumes the OUT facts to recognise stores
//! whose value is never read.

use crate::cfg::{Cfg, NodeId};
use crate::config::AnalysisConfig;
use crate::ir::Var;

use super::analysis::DataflowAnalysis;
use super::fact::SetFact;

/// Backward liveness analysis.
#[derive(Debug, Default)]
pub struct LiveVariableAnalysis;

impl LiveVariableAnalysis {
    /// Identifier this analysis publishes its results under.
    pub const ID: &'static str = "livevar";

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Construct from a harness configuration; the options are opaque
    /// to this analysis.
    #[must_use]
    pub fn from_config(_config: &AnalysisConfig) -> Self {
        Self
    }
}

impl DataflowAnalysis for LiveVariableAnalysis {
    type Fact = SetFact<Var>;

    fn is_forward(&self) -> bool {
        false
    }

    fn new_boundary_fact(&self, _cfg: &Cfg) -> SetFact<Var> {
        SetFact::new()
    }

    fn new_initial_fact(&self) -> SetFact<Var> {
        SetFact::new()
    }

    fn meet_into(&self, fact: &SetFact<Var>, target: &mut SetFact<Var>) {
        target.union_with(fact);
    }

    /// `input` is the OUT set, `output` the IN set (backward analysis).
    fn transfer_node(
        &self,
        cfg: &Cfg,
        node: NodeId,
        input: &SetFact<Var>,
        output: &mut SetFact<Var>,
    ) -> bool {
        let mut new_in = input.clone();
        if let Some(stmt) = cfg.stmt_of(node) {
            if let Some(def) = stmt.def_var() {
                new_in.remove(&def);
            }
            for used in stmt.uses() {
                new_in.insert(used);
            }
        }
        let changed = new_in != *output;
        if changed {
            *output = new_in;
        }
        changed
    }
}
