//! tacflow - intraprocedural dataflow analysis for a three-address IR.
//!
//! This library implements the core of a static-analysis engine for an
//! object-oriented, integer-typed imperative language lowered to
//! three-address form:
//!
//! - **IR Layer** ([`ir`]): method bodies as closed statement and
//!   expression families with stable statement indices
//! - **CFG Layer** ([`cfg`]): control flow graphs with typed edges and
//!   unique synthetic entry/exit nodes
//! - **Dataflow Layer** ([`dataflow`]): a generic monotone worklist
//!   framework plus constant propagation, live variables, and
//!   dead-code detection built on top of it
//!
//! One CFG is analysed at a time; nothing blocks or suspends, and a
//! converged [`DataflowResult`] is immutable, so callers may fan
//! methods out across threads without any shared mutable state.
//!
//! # Quick Start
//!
//! ```
//! use tacflow::cfg::{CfgBuilder, EdgeKind};
//! use tacflow::dataflow::{ConstantPropagation, Solver, Value};
//! use tacflow::ir::{BinaryOp, Exp, IrBuilder, LValue, StmtKind, Type};
//!
//! // int half(int p) { two = 2; q = p / two; return q; }
//! let mut ir = IrBuilder::new("half");
//! let p = ir.param("p", Type::Int);
//! let two = ir.var("two", Type::Int);
//! let q = ir.var("q", Type::Int);
//! let s0 = ir.stmt(StmtKind::Assign {
//!     lvalue: LValue::Var(two),
//!     rvalue: Exp::IntLiteral(2),
//! });
//! let s1 = ir.stmt(StmtKind::Assign {
//!     lvalue: LValue::Var(q),
//!     rvalue: Exp::Binary { op: BinaryOp::Div, lhs: p, rhs: two },
//! });
//! let s2 = ir.stmt(StmtKind::Return { value: Some(q) });
//!
//! let mut builder = CfgBuilder::new(ir.build()?);
//! let (entry, exit) = (builder.entry(), builder.exit());
//! let (n0, n1, n2) = (builder.node(s0), builder.node(s1), builder.node(s2));
//! builder
//!     .edge(entry, n0, EdgeKind::FallThrough)
//!     .edge(n0, n1, EdgeKind::FallThrough)
//!     .edge(n1, n2, EdgeKind::FallThrough)
//!     .edge(n2, exit, EdgeKind::Return);
//! let cfg = builder.build()?;
//!
//! let result = Solver::new(ConstantPropagation::new()).solve(&cfg);
//! let after_div = result.out_fact(cfg.node_of_stmt(s1));
//! assert_eq!(after_div.get(two), Value::Const(2));
//! assert_eq!(after_div.get(q), Value::Nac); // p is unknown
//! # Ok::<(), tacflow::TacflowError>(())
//! ```
//!
//! # Dead-code detection
//!
//! ```no_run
//! use tacflow::dataflow::{
//!     ConstantPropagation, DeadCodeDetection, LiveVariableAnalysis, Solver,
//! };
//! # let cfg: tacflow::cfg::Cfg = unimplemented!();
//!
//! let constants = Solver::new(ConstantPropagation::new()).solve(&cfg);
//! let live_vars = Solver::new(LiveVariableAnalysis::new()).solve(&cfg);
//! let dead = DeadCodeDetection::new().analyze(&cfg, &constants, &live_vars);
//! for index in &dead {
//!     println!("dead: {}", cfg.ir().stmts()[*index]);
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cfg;
pub mod config;
pub mod dataflow;
pub mod error;
pub mod ir;

// =============================================================================
// Public Type Re-exports
// =============================================================================

// Error types - most important for users
pub use error::{Result, TacflowError};

// Configuration pass-through
pub use config::AnalysisConfig;

// IR types
pub use ir::{BinaryOp, Exp, Ir, IrBuilder, IrError, LValue, Stmt, StmtKind, Type, Var};

// CFG types
pub use cfg::{Cfg, CfgBuilder, CfgEdge, CfgError, CfgNode, EdgeKind, NodeId};

// Dataflow framework and analyses
pub use dataflow::{
    evaluate, CPFact, ConstantPropagation, DataflowAnalysis, DataflowResult, DeadCodeDetection,
    LiveVariableAnalysis, SetFact, Solver, Value,
};
