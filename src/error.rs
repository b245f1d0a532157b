//! Central error types for tacflow.
//!
//! Uses `thiserror` for ergonomic error definitions with automatic
//! `Display` and `From` implementations. Construction-time validation
//! (IR and CFG builders) reports through these types; the analyses
//! themselves never raise for runtime-semantic ambiguities, which are
//! always folded into the lattice instead.

use thiserror::Error;

use crate::cfg::CfgError;
use crate::ir::IrError;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum TacflowError {
    /// IR construction produced an inconsistent method body.
    #[error("malformed IR: {0}")]
    Ir(#[from] IrError),

    /// CFG construction produced a structurally invalid graph.
    #[error("malformed CFG: {0}")]
    Cfg(#[from] CfgError),

    /// A framework-level contract violation (programming bug in the caller).
    #[error("analysis error: {0}")]
    Analysis(String),
}

/// Convenience type alias for Results using TacflowError.
pub type Result<T> = std::result::Result<T, TacflowError>;
