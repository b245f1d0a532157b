//! Three-address intermediate representation.
//!
//! A method body is an [`Ir`]: a variable table, the formal parameters,
//! and an ordered list of statements. Statements and expressions are
//! closed families ([`StmtKind`], [`Exp`]) dispatched by exhaustive
//! `match`; every operand of a binary expression is a [`Var`], so the
//! representation is genuinely three-address.
//!
//! # Modules
//!
//! - [`exp`]: Expressions, binary operators, lvalues
//! - [`stmt`]: Statements with def/use accessors
//! - [`builder`]: Programmatic construction with validation

pub mod builder;
pub mod exp;
pub mod stmt;

pub use builder::IrBuilder;
pub use exp::{BinaryOp, Exp, LValue};
pub use stmt::{Stmt, StmtKind};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during IR construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IrError {
    /// A statement references a variable that was never declared.
    #[error("statement {stmt} references undeclared variable {var}")]
    UndeclaredVar {
        /// Index of the offending statement.
        stmt: usize,
        /// The dangling handle.
        var: Var,
    },
}

/// Handle to a variable in the enclosing [`Ir`]'s variable table.
///
/// Handles are cheap to copy and hash; name and type live in the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Var(pub u32);

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Declared type of a variable.
///
/// All integer-holding widths (byte through boolean) normalise to
/// 32-bit two's complement for analysis purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Byte,
    Short,
    Int,
    Char,
    Boolean,
    /// 64-bit integer; not tracked by constant propagation.
    Long,
    /// Any non-primitive type.
    Reference,
}

impl Type {
    /// Whether a variable of this type can hold a tracked 32-bit integer.
    #[must_use]
    pub fn can_hold_int(self) -> bool {
        matches!(
            self,
            Type::Byte | Type::Short | Type::Int | Type::Char | Type::Boolean
        )
    }
}

/// Name and type of one variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarInfo {
    /// Source-level name.
    pub name: String,
    /// Declared type.
    pub ty: Type,
}

/// A method body in three-address form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ir {
    method: String,
    vars: Vec<VarInfo>,
    params: Vec<Var>,
    stmts: Vec<Stmt>,
}

impl Ir {
    pub(crate) fn new(method: String, vars: Vec<VarInfo>, params: Vec<Var>, stmts: Vec<Stmt>) -> Self {
        Self {
            method,
            vars,
            params,
            stmts,
        }
    }

    /// Name of the method this body belongs to.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Statements ordered by their stable index.
    #[must_use]
    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    /// Formal parameters, in declaration order.
    #[must_use]
    pub fn params(&self) -> &[Var] {
        &self.params
    }

    /// Look up the table entry for a variable handle.
    ///
    /// Handles are validated at build time, so lookups cannot dangle.
    #[must_use]
    pub fn var(&self, var: Var) -> &VarInfo {
        &self.vars[var.0 as usize]
    }

    /// Number of declared variables.
    #[must_use]
    pub fn var_count(&self) -> usize {
        self.vars.len()
    }
}
