//! Statements of the three-address IR.

use serde::{Deserialize, Serialize};

use super::exp::{Exp, LValue};
use super::Var;

/// Kind of a statement, dispatched exhaustively by the analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StmtKind {
    /// `lvalue = rvalue`.
    Assign { lvalue: LValue, rvalue: Exp },
    /// Two-way branch on an integer condition.
    If { cond: Exp },
    /// Multi-way branch on a variable; case values live on the CFG edges.
    Switch { var: Var },
    /// Invocation; defines `result` when the callee returns a value.
    /// This is a definition statement but not an assignment, so the
    /// dead-store rule never applies to it.
    Call {
        result: Option<Var>,
        callee: String,
        args: Vec<Var>,
    },
    /// Method return.
    Return { value: Option<Var> },
    /// Unconditional jump; the target is the CFG edge.
    Goto,
    /// No operation.
    Nop,
}

/// A statement with its stable, monotonically increasing index.
///
/// The index orders statements deterministically in analysis output and
/// is assigned once by [`super::IrBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stmt {
    index: usize,
    kind: StmtKind,
}

impl Stmt {
    pub(crate) fn new(index: usize, kind: StmtKind) -> Self {
        Self { index, kind }
    }

    /// Position of this statement in its method body.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The statement's kind.
    #[must_use]
    pub fn kind(&self) -> &StmtKind {
        &self.kind
    }

    /// The local variable this statement defines, if any.
    ///
    /// Field and array stores define no local variable.
    #[must_use]
    pub fn def_var(&self) -> Option<Var> {
        match &self.kind {
            StmtKind::Assign { lvalue, .. } => lvalue.as_var(),
            StmtKind::Call { result, .. } => *result,
            _ => None,
        }
    }

    /// Variables read by this statement.
    #[must_use]
    pub fn uses(&self) -> Vec<Var> {
        let mut out = Vec::new();
        match &self.kind {
            StmtKind::Assign { lvalue, rvalue } => {
                lvalue.collect_uses(&mut out);
                rvalue.collect_uses(&mut out);
            }
            StmtKind::If { cond } => cond.collect_uses(&mut out),
            StmtKind::Switch { var } => out.push(*var),
            StmtKind::Call { args, .. } => out.extend(args.iter().copied()),
            StmtKind::Return { value } => out.extend(value.iter().copied()),
            StmtKind::Goto | StmtKind::Nop => {}
        }
        out
    }
}

impl std::fmt::Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StmtKind::Assign { lvalue, rvalue } => write!(f, "{lvalue} = {rvalue}"),
            StmtKind::If { cond } => write!(f, "if ({cond})"),
            StmtKind::Switch { var } => write!(f, "switch ({var})"),
            StmtKind::Call {
                result: Some(r),
                callee,
                ..
            } => write!(f, "{r} = {callee}(...)"),
            StmtKind::Call { result: None, callee, .. } => write!(f, "{callee}(...)"),
            StmtKind::Return { value: Some(v) } => write!(f, "return {v}"),
            StmtKind::Return { value: None } => write!(f, "return"),
            StmtKind::Goto => write!(f, "goto"),
            StmtKind::Nop => write!(f, "nop"),
        }
    }
}
