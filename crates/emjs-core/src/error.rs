//! Internal-compiler-error reporting.
//!
//! The generator trusts its IR input completely: the upstream optimizer is
//! the sole producer, and there is no user-facing error path. A violated
//! structural invariant is a bug in this crate or its caller, not a
//! condition to recover from, so it is fatal by construction — `Bug` exists
//! to give that `panic!` a structured, greppable message rather than to be
//! matched on or returned from a public API.

/// A violated structural invariant of the IR or decision tree.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Bug {
    #[error("TailCall targets `{call_name}` but the enclosing TailDef is `{def_name}`")]
    TailCallNameMismatch { def_name: String, call_name: String },

    #[error("TailCall to `{call_name}` appears outside any enclosing TailDef")]
    TailCallOutsideTailDef { call_name: String },

    #[error(
        "TailCall to `{name}` passes {got} argument(s) but the enclosing TailDef takes {expected}"
    )]
    TailCallArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("Function has zero parameters; the arity-curry convention requires at least one")]
    ZeroArityFunction,

    #[error("Case jump target {target} has no matching entry in `jumps`")]
    UnmatchedJumpTarget { target: u32 },

    #[error("duplicate field name `{field}` in a Record/Update literal")]
    DuplicateField { field: String },

    #[error("fresh-name counter exhausted")]
    CounterExhausted,
}

/// Panic with a `Bug`, formatted as an internal-compiler-error.
///
/// Never returns; callers use this at the end of a `let Some(..) = .. else`
/// or an `if` guard instead of threading an `Option` through every caller.
#[cold]
#[track_caller]
pub fn bug(b: Bug) -> ! {
    panic!("internal compiler error: {b}")
}

/// Assert a structural invariant, panicking with a `Bug` on failure.
///
/// Invariants are not recoverable, so this is a thin wrapper over `bug`,
/// not a `Result`-returning validator.
#[track_caller]
pub fn invariant(cond: bool, b: impl FnOnce() -> Bug) {
    if !cond {
        bug(b());
    }
}
