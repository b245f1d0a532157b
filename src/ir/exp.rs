//! Expressions of the three-address IR.
//!
//! Right-hand sides are a closed family: variables, integer literals,
//! binary expressions over two variable operands, and the
//! side-effectful shapes (allocation, cast, field and array access).

use serde::{Deserialize, Serialize};

use super::Var;

/// Binary operators over 32-bit integers.
///
/// Four families share one flat enum: arithmetic (`Add`..`Rem`),
/// comparison (`Eq`..`Ge`, producing 0 or 1), shifts (`Shl`, `Shr`,
/// `Ushr`) and bitwise (`Or`, `And`, `Xor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Shl,
    Shr,
    Ushr,
    Or,
    And,
    Xor,
}

impl BinaryOp {
    /// Whether this operator can trap on a zero divisor.
    #[must_use]
    pub fn is_division(self) -> bool {
        matches!(self, BinaryOp::Div | BinaryOp::Rem)
    }

    /// Fold two concrete operands.
    ///
    /// Arithmetic wraps in two's complement, comparisons yield `1`/`0`,
    /// and shift amounts are masked to the low five bits. Returns
    /// `None` on a zero divisor.
    #[must_use]
    pub fn eval(self, a: i32, b: i32) -> Option<i32> {
        let result = match self {
            BinaryOp::Add => a.wrapping_add(b),
            BinaryOp::Sub => a.wrapping_sub(b),
            BinaryOp::Mul => a.wrapping_mul(b),
            BinaryOp::Div => {
                if b == 0 {
                    return None;
                }
                a.wrapping_div(b)
            }
            BinaryOp::Rem => {
                if b == 0 {
                    return None;
                }
                a.wrapping_rem(b)
            }
            BinaryOp::Eq => i32::from(a == b),
            BinaryOp::Ne => i32::from(a != b),
            BinaryOp::Lt => i32::from(a < b),
            BinaryOp::Gt => i32::from(a > b),
            BinaryOp::Le => i32::from(a <= b),
            BinaryOp::Ge => i32::from(a >= b),
            // wrapping_shl/shr mask the amount to the low 5 bits
            BinaryOp::Shl => a.wrapping_shl(b as u32),
            BinaryOp::Shr => a.wrapping_shr(b as u32),
            BinaryOp::Ushr => ((a as u32).wrapping_shr(b as u32)) as i32,
            BinaryOp::Or => a | b,
            BinaryOp::And => a & b,
            BinaryOp::Xor => a ^ b,
        };
        Some(result)
    }

    /// Source-level symbol, for rendering.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Ushr => ">>>",
            BinaryOp::Or => "|",
            BinaryOp::And => "&",
            BinaryOp::Xor => "^",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A right-hand-side expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exp {
    /// Read of a variable.
    Var(Var),
    /// 32-bit integer literal.
    IntLiteral(i32),
    /// Binary expression; both operands are variables.
    Binary { op: BinaryOp, lhs: Var, rhs: Var },
    /// Heap allocation.
    New { class: String },
    /// Checked cast.
    Cast { var: Var, to: String },
    /// Field load; `base` is `None` for static fields.
    FieldAccess { base: Option<Var>, field: String },
    /// Array element load.
    ArrayAccess { base: Var, index: Var },
}

impl Exp {
    /// Variables read when this expression is evaluated.
    pub fn collect_uses(&self, out: &mut Vec<Var>) {
        match self {
            Exp::Var(v) => out.push(*v),
            Exp::IntLiteral(_) | Exp::New { .. } => {}
            Exp::Binary { lhs, rhs, .. } => {
                out.push(*lhs);
                out.push(*rhs);
            }
            Exp::Cast { var, .. } => out.push(*var),
            Exp::FieldAccess { base, .. } => out.extend(base.iter().copied()),
            Exp::ArrayAccess { base, index } => {
                out.push(*base);
                out.push(*index);
            }
        }
    }

    /// Variables read when this expression is evaluated.
    #[must_use]
    pub fn uses(&self) -> Vec<Var> {
        let mut out = Vec::new();
        self.collect_uses(&mut out);
        out
    }

    /// Whether evaluating this rvalue is unobservable.
    ///
    /// Allocation mutates the heap, casts can fail, field access can
    /// trigger class initialisation or a null dereference, array access
    /// can fault on null or bounds, and division/remainder can trap on
    /// zero. Everything else is effect-free.
    #[must_use]
    pub fn has_no_side_effect(&self) -> bool {
        match self {
            Exp::New { .. }
            | Exp::Cast { .. }
            | Exp::FieldAccess { .. }
            | Exp::ArrayAccess { .. } => false,
            Exp::Binary { op, .. } => !op.is_division(),
            Exp::Var(_) | Exp::IntLiteral(_) => true,
        }
    }
}

impl std::fmt::Display for Exp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exp::Var(v) => write!(f, "{v}"),
            Exp::IntLiteral(c) => write!(f, "{c}"),
            Exp::Binary { op, lhs, rhs } => write!(f, "{lhs} {op} {rhs}"),
            Exp::New { class } => write!(f, "new {class}"),
            Exp::Cast { var, to } => write!(f, "({to}) {var}"),
            Exp::FieldAccess { base: Some(b), field } => write!(f, "{b}.{field}"),
            Exp::FieldAccess { base: None, field } => write!(f, ".{field}"),
            Exp::ArrayAccess { base, index } => write!(f, "{base}[{index}]"),
        }
    }
}

/// A storable location on the left of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LValue {
    /// A local variable; the only shape tracked by the analyses.
    Var(Var),
    /// Field store; `base` is `None` for static fields.
    Field { base: Option<Var>, field: String },
    /// Array element store.
    Array { base: Var, index: Var },
}

impl LValue {
    /// The local variable defined, if this lvalue is one.
    #[must_use]
    pub fn as_var(&self) -> Option<Var> {
        match self {
            LValue::Var(v) => Some(*v),
            _ => None,
        }
    }

    /// Variables *read* while storing to this location (base pointers
    /// and indices; a plain variable lvalue reads nothing).
    pub fn collect_uses(&self, out: &mut Vec<Var>) {
        match self {
            LValue::Var(_) => {}
            LValue::Field { base, .. } => out.extend(base.iter().copied()),
            LValue::Array { base, index } => {
                out.push(*base);
                out.push(*index);
            }
        }
    }
}

impl std::fmt::Display for LValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LValue::Var(v) => write!(f, "{v}"),
            LValue::Field { base: Some(b), field } => write!(f, "{b}.{field}"),
            LValue::Field { base: None, field } => write!(f, ".{field}"),
            LValue::Array { base, index } => write!(f, "{base}[{index}]"),
        }
    }
}
