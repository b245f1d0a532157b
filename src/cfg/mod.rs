//! Control flow graphs over the three-address IR.
//!
//! A [`Cfg`] has one node per statement plus a unique synthetic entry
//! and exit. Edges carry a semantic [`EdgeKind`] so consumers can
//! distinguish branch outcomes and switch cases; case edges carry
//! their case value.
//!
//! # Modules
//!
//! - [`types`]: Core CFG data structures (nodes, edges, graph)
//! - [`builder`]: Programmatic construction with structural validation

pub mod builder;
pub mod types;

pub use builder::CfgBuilder;
pub use types::{Cfg, CfgEdge, CfgError, CfgNode, EdgeKind, NodeId};
