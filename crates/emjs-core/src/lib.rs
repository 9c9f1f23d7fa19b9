#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared data types for the expression code generator.
//!
//! - [`ir`]: the optimized functional IR the generator lowers.
//! - [`decision`]: the compiled pattern-match decision tree embedded in `ir::Expr::Case`.
//! - [`error`]: internal-compiler-error reporting for violated structural invariants.

pub mod decision;
pub mod error;
pub mod ir;

#[cfg(test)]
mod error_tests;

pub use decision::{Decider, FanOutEdge, Leaf, Path, Test};
pub use error::{Bug, bug, invariant};
pub use ir::{BranchProblem, Def, Expr, Field, Literal, PortType, ProgramKind};
