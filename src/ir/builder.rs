//! Programmatic IR construction.
//!
//! The builder assigns statement indices in insertion order and
//! validates at [`IrBuilder::build`] time that every variable handle a
//! statement mentions was declared, so analyses can index the variable
//! table without re-checking.

use super::stmt::{Stmt, StmtKind};
use super::{Ir, IrError, Type, Var, VarInfo};

/// Builder for an [`Ir`] method body.
#[derive(Debug)]
pub struct IrBuilder {
    method: String,
    vars: Vec<VarInfo>,
    params: Vec<Var>,
    stmts: Vec<Stmt>,
}

impl IrBuilder {
    /// Start a method body.
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            vars: Vec::new(),
            params: Vec::new(),
            stmts: Vec::new(),
        }
    }

    /// Declare a local variable.
    pub fn var(&mut self, name: impl Into<String>, ty: Type) -> Var {
        let handle = Var(self.vars.len() as u32);
        self.vars.push(VarInfo {
            name: name.into(),
            ty,
        });
        handle
    }

    /// Declare a formal parameter (a variable marked as incoming).
    pub fn param(&mut self, name: impl Into<String>, ty: Type) -> Var {
        let handle = self.var(name, ty);
        self.params.push(handle);
        handle
    }

    /// Append a statement; returns its index.
    pub fn stmt(&mut self, kind: StmtKind) -> usize {
        let index = self.stmts.len();
        self.stmts.push(Stmt::new(index, kind));
        index
    }

    /// Finish the body, validating every variable reference.
    pub fn build(self) -> Result<Ir, IrError> {
        let limit = self.vars.len() as u32;
        for stmt in &self.stmts {
            let mut mentioned = stmt.uses();
            mentioned.extend(stmt.def_var());
            for var in mentioned {
                if var.0 >= limit {
                    return Err(IrError::UndeclaredVar {
                        stmt: stmt.index(),
                        var,
                    });
                }
            }
        }
        Ok(Ir::new(self.method, self.vars, self.params, self.stmts))
    }
}
