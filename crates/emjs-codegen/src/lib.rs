//! Lowers an optimized functional IR into a structured target AST.
//!
//! The generator is written entirely against the collaborator traits in
//! [`collaborators`]: a variable mangler, a literal encoder, a foreign
//! (port) codec, a table of runtime-helper names, and the target AST
//! builder itself. [`reference`] and [`render`] are one concrete
//! implementation of those traits plus a text serializer, kept here so
//! the crate is buildable and testable standalone — an embedding compiler
//! supplies its own.
//!
//! - [`context`]: the collaborators plus the threaded fresh-name counter.
//! - [`code`]: the expression/statement envelope every lowering routine
//!   returns.
//! - [`expr`]: the top-level dispatcher over IR variants.
//! - [`function`]: arity-curried functions and self-tail-call loops.
//! - [`ifchain`]: if-chain flattening and emission.
//! - [`decision_emit`]: pattern-match decision-tree lowering.
//! - [`binop`] / [`call`]: operator and call-site lowering.
//! - [`program`]: top-level definitions and program-entry wrapping.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod binop;
pub mod call;
pub mod code;
pub mod collaborators;
pub mod config;
pub mod context;
pub mod decision_emit;
pub mod expr;
pub mod function;
pub mod ifchain;
pub mod program;
pub mod reference;
pub mod render;

#[cfg(test)]
mod code_tests;
#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod expr_tests;
#[cfg(test)]
mod ifchain_tests;
#[cfg(test)]
mod program_tests;
#[cfg(test)]
mod render_tests;

pub use code::Code;
pub use collaborators::{ForeignCodec, LiteralEncoder, NameMangler, RuntimeHelpers, TargetAst};
pub use config::Config;
pub use context::Context;
pub use function::TailFrame;
pub use program::{compile_def, compile_program, compile_top_level_def};
pub use reference::{
    JsExpr, JsStmt, ReferenceAst, ReferenceForeignCodec, ReferenceLiteralEncoder,
    ReferenceMangler, ReferenceRuntimeHelpers,
};
pub use render::{render_expr, render_program};
