//! The compiled pattern-match decision tree (§3).
//!
//! This is the same shape the upstream optimizer already reduced a `case`
//! into: a `Decider` never re-examines a scrutinee it has already tested
//! along a given `Path`, so the generator's job (§4.8) is purely structural
//! translation, not analysis.

use serde::{Deserialize, Serialize};

use crate::ir::{Expr, Literal};

/// A path from the case scrutinee down to the sub-value a `Test` inspects (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Path {
    /// The scrutinee itself.
    Empty,
    /// An alias bound along the way; resolves to the same value as its parent.
    Alias,
    /// The constructor argument at this position.
    Position(usize, Box<Path>),
    /// A record field reached while destructuring.
    Field(String, Box<Path>),
}

/// What a `Chain` or `FanOut` node tests at a `Path` (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Test {
    Constructor(String),
    Literal(Literal),
}

/// A leaf outcome: either an inline expression or a jump to a shared branch (§3, §4.8).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Leaf {
    Inline(Box<Expr>),
    Jump(u32),
}

/// One edge of a `FanOut`: which `Test` leads to which subtree.
pub type FanOutEdge = (Test, Decider);

/// A compiled decision tree (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decider {
    Leaf(Leaf),
    /// A conjunction of `(path, test)` pairs that must all pass for
    /// `success`, else `failure` (§3, §4.8).
    Chain {
        tests: Vec<(Path, Test)>,
        success: Box<Decider>,
        failure: Box<Decider>,
    },
    /// A multi-way test over the same `path`, falling back to `fallback` when
    /// no edge's `Test` matches.
    FanOut {
        path: Path,
        edges: Vec<FanOutEdge>,
        fallback: Box<Decider>,
    },
}
