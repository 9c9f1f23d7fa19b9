//! The optimized functional IR consumed by the code generator (§3).
//!
//! This is a closed set of tagged unions, produced upstream by the optimizer
//! and trusted to be well-formed; the generator never constructs or mutates
//! it, only reads it. `Serialize`/`Deserialize` are derived throughout so
//! that fixtures for tests (and any offline tooling that wants to inspect an
//! optimizer dump) can round-trip through JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::decision::Decider;

/// A literal value (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(String),
}

/// A type descriptor used to pick an encoder/decoder at a port boundary (§4.2, §6).
///
/// Opaque to the generator itself — it is handed unchanged to the
/// `ForeignCodec` collaborator, which knows how to turn it into target
/// expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortType(pub String);

/// `Program(kind, body)`'s entry-point flavor (§4.9).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProgramKind {
    VDom,
    NoFlags,
    Flags(PortType),
}

/// A possible runtime-crash cause, carried for diagnostics by the `crash` helper (§4.2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchProblem {
    pub expected_patterns: Vec<String>,
}

/// One field of a `Record`/`Update` literal (§3 Invariant 4: names unique within the list).
pub type Field = (String, Expr);

/// The optimized expression IR (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    VarLocal(String),
    VarGlobal(String, String),
    Literal(Literal),
    Access(Box<Expr>, String),
    Update(Box<Expr>, Vec<Field>),
    Record(Vec<Field>),
    Binop(String, String, Box<Expr>, Box<Expr>),
    Function(Vec<String>, Box<Expr>),
    Call(Box<Expr>, Vec<Expr>),
    TailCall(String, Vec<String>, Vec<Expr>),
    Let(Vec<(String, Def)>, Box<Expr>),
    If(Vec<(Expr, Expr)>, Box<Expr>),
    Case(String, Decider, IndexMap<u32, Expr>),
    List(Vec<Expr>),
    Ctor(String, Vec<Expr>),
    CtorAccess(Box<Expr>, usize),
    Cmd(String, Box<Expr>),
    Sub(String, Box<Expr>),
    OutgoingPort(String, PortType),
    IncomingPort(String, PortType),
    Program(ProgramKind, Box<Expr>),
    GLShader(String),
    Crash(String, String, Option<BranchProblem>),
}

/// One top-level binding's right-hand side (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Def {
    /// An ordinary definition, compiled as its body's expression.
    Def(Expr),
    /// A self-tail-recursive definition: every `TailCall` in `body` must name
    /// this definition and carry the same parameter list (§3 Invariant 2).
    TailDef(Vec<String>, Expr),
}

impl Def {
    pub fn body(&self) -> &Expr {
        match self {
            Def::Def(e) => e,
            Def::TailDef(_, e) => e,
        }
    }
}
