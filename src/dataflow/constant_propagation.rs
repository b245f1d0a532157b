//! Constant propagation dataflow analysis.
//!
//! Forward analysis tracking which integer variables hold a known
//! constant at each program point. Downstream consumers use the
//! converged facts to fold expressions and prune branches whose guards
//! are constant (see [`super::dead_code`]).
//!
//! # Lattice Structure
//!
//! Each variable ranges over a three-level lattice:
//!
//! ```text
//!            NAC  (not a constant)
//!        /    |    \
//!   Const(c1) ... Const(cn)
//!        \    |    /
//!           UNDEF  (no information yet)
//! ```
//!
//! The meet operation (applied at join points) is:
//! - `NAC meet x = NAC` (NAC absorbs)
//! - `UNDEF meet x = x` (UNDEF is the identity)
//! - `Const(c) meet Const(c) = Const(c)`
//! - `Const(c1) meet Const(c2) = NAC` (different constants)
//!
//! The per-variable height is three, which bounds the solver's work.
//!
//! # Integer semantics
//!
//! All folding is 32-bit two's complement with wrap-around. Division
//! and remainder by a zero constant evaluate to UNDEF, modelling the
//! runtime trap: that path produces no value at all. The zero-divisor
//! rule fires even when the dividend is NAC.
//!
//! # Limitations
//!
//! - Intraprocedural only; call results are NAC
//! - Only byte/short/int/char/boolean variables are tracked
//! - Heap locations (fields, array elements) are not tracked

use serde::{Deserialize, Serialize};

use crate::cfg::{Cfg, NodeId};
use crate::config::AnalysisConfig;
use crate::ir::{Exp, Ir, LValue, StmtKind, Var};

use super::analysis::DataflowAnalysis;
use super::fact::CPFact;

/// Abstract value of one integer variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// No information yet (lattice bottom).
    Undef,
    /// Known 32-bit constant.
    Const(i32),
    /// Not a constant (lattice top).
    Nac,
}

impl Value {
    #[must_use]
    pub fn is_undef(self) -> bool {
        matches!(self, Value::Undef)
    }

    #[must_use]
    pub fn is_nac(self) -> bool {
        matches!(self, Value::Nac)
    }

    #[must_use]
    pub fn is_constant(self) -> bool {
        matches!(self, Value::Const(_))
    }

    /// The constant payload; `None` unless [`is_constant`](Self::is_constant).
    #[must_use]
    pub fn as_constant(self) -> Option<i32> {
        match self {
            Value::Const(c) => Some(c),
            _ => None,
        }
    }

    /// Lattice meet (greatest lower bound).
    ///
    /// Commutative, associative, idempotent; UNDEF is the identity and
    /// NAC is absorbing.
    #[must_use]
    pub fn meet(self, other: Self) -> Self {
        match (self, other) {
            (Value::Nac, _) | (_, Value::Nac) => Value::Nac,
            (Value::Undef, v) | (v, Value::Undef) => v,
            (Value::Const(a), Value::Const(b)) => {
                if a == b {
                    Value::Const(a)
                } else {
                    Value::Nac
                }
            }
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Undef => write!(f, "undef"),
            Value::Const(c) => write!(f, "{c}"),
            Value::Nac => write!(f, "NAC"),
        }
    }
}

/// Evaluate an expression against the fact flowing into its statement.
///
/// Rules, in order:
///
/// 1. A variable reads its binding (UNDEF when absent).
/// 2. A literal is itself.
/// 3. For a binary expression, a DIV/REM with a `Const(0)` divisor is
///    UNDEF regardless of the dividend; otherwise NAC propagates, then
///    UNDEF propagates, then two constants fold per the operator
///    table.
/// 4. Every other shape (allocation, cast, field/array access) is NAC.
#[must_use]
pub fn evaluate(exp: &Exp, in_fact: &CPFact) -> Value {
    match exp {
        Exp::Var(v) => in_fact.get(*v),
        Exp::IntLiteral(c) => Value::Const(*c),
        Exp::Binary { op, lhs, rhs } => {
            let v1 = in_fact.get(*lhs);
            let v2 = in_fact.get(*rhs);
            if op.is_division() && v2 == Value::Const(0) {
                return Value::Undef;
            }
            if v1.is_nac() || v2.is_nac() {
                return Value::Nac;
            }
            if v1.is_undef() || v2.is_undef() {
                return Value::Undef;
            }
            match (v1.as_constant(), v2.as_constant()) {
                (Some(a), Some(b)) => op.eval(a, b).map_or(Value::Undef, Value::Const),
                _ => Value::Nac,
            }
        }
        _ => Value::Nac,
    }
}

/// Forward constant-propagation analysis.
#[derive(Debug, Default)]
pub struct ConstantPropagation;

impl ConstantPropagation {
    /// Identifier this analysis publishes its results under.
    pub const ID: &'static str = "constprop";

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

    /// Whether `var` is tracked: byte, short, int, char and boolean
    /// all normalise to 32-bit integers.
    #[must_use]
    pub fn can_hold_int(ir: &Ir, var: Var) -> bool {
        ir.var(var).ty.can_hold_int()
    }
}

impl DataflowAnalysis for ConstantPropagation {
    type Fact = CPFact;

    fn is_forward(&self) -> bool {
        true
    }

    fn new_boundary_fact(&self, cfg: &Cfg) -> CPFact {
        // parameters arrive from arbitrary call sites
        let ir = cfg.ir();
        let mut fact = CPFact::new();
        for &param in ir.params() {
            if Self::can_hold_int(ir, param) {
                fact.update(param, Value::Nac);
            }
        }
        fact
    }

    fn new_initial_fact(&self) -> CPFact {
        CPFact::new()
    }

    fn meet_into(&self, fact: &CPFact, target: &mut CPFact) {
        for (var, value) in fact.iter() {
            let merged = value.meet(target.get(var));
            target.update(var, merged);
        }
    }

    fn transfer_node(
        &self,
        cfg: &Cfg,
        node: NodeId,
        input: &CPFact,
        output: &mut CPFact,
    ) -> bool {
        let ir = cfg.ir();
        let new_out = match cfg.stmt_of(node).map(|s| s.kind()) {
            Some(StmtKind::Assign {
                lvalue: LValue::Var(v),
                rvalue,
            }) if Self::can_hold_int(ir, *v) => {
                let mut fact = input.clone();
                fact.update(*v, evaluate(rvalue, input));
                fact
            }
            Some(StmtKind::Call {
                result: Some(v), ..
            }) if Self::can_hold_int(ir, *v) => {
                let mut fact = input.clone();
                fact.update(*v, Value::Nac);
                fact
            }
            _ => input.clone(),
        };
        let changed = new_out != *output;
        if changed {
            *output = new_out;
        }
        changed
    }
}
