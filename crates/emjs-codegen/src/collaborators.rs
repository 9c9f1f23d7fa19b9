//! Collaborator interfaces consumed by the generator (§6).
//!
//! The core dispatcher and lowering routines are written against these
//! traits only, never against [`crate::reference`]'s concrete types — the
//! mangler, literal encoder, foreign codec, runtime-helper naming, and the
//! target AST itself are owned by the embedding compiler.

/// Produces safe target identifiers and the module-scoped global definition
/// wiring (§6 "Variable mangler").
pub trait NameMangler<A: TargetAst> {
    /// Safe identifier for a locally scoped name.
    fn local(&self, name: &str) -> String;
    /// Safe identifier for a record/object field name.
    fn field(&self, name: &str) -> String;
    /// Safe qualified identifier for a top-level binding.
    fn global(&self, module: &str, name: &str) -> String;
    /// Safe identifier for the `n`th fresh temporary minted this compilation.
    fn fresh(&self, counter: u32) -> String;
    /// The module-scoped `var` declaration (and any export wiring) for a
    /// top-level definition's compiled expression.
    fn define_global(&self, module: &str, name: &str, expr: A::Expr, ast: &A) -> A::Stmt;
}

/// Maps source literals to target expressions (§6 "Literal encoder").
pub trait LiteralEncoder<A: TargetAst> {
    fn encode(&self, lit: &emjs_core::Literal, ast: &A) -> A::Expr;
}

/// Produces encoder/decoder expressions for a port's type descriptor
/// (§6 "Foreign encoder/decoder").
pub trait ForeignCodec<A: TargetAst> {
    fn encoder(&self, ty: &emjs_core::PortType, ast: &A) -> A::Expr;
    fn decoder(&self, ty: &emjs_core::PortType, ast: &A) -> A::Expr;
}

/// Names of the built-in runtime helpers the generator calls by reference
/// (§6 "Runtime helpers").
pub trait RuntimeHelpers<A: TargetAst> {
    /// The `Fₙ` curried-function tagger, `2 ≤ n ≤ 9`.
    fn curry_fn(&self, arity: usize, ast: &A) -> A::Expr;
    /// The `Aₙ` curried-application helper, `2 ≤ n ≤ 9`.
    fn curry_apply(&self, arity: usize, ast: &A) -> A::Expr;
    fn list(&self, ast: &A) -> A::Expr;
    fn cons(&self, ast: &A) -> A::Expr;
    fn record_update(&self, ast: &A) -> A::Expr;
    fn eq(&self, ast: &A) -> A::Expr;
    fn cmp(&self, ast: &A) -> A::Expr;
    fn effect(&self, module: &str, ast: &A) -> A::Expr;
    fn outgoing_port(&self, ast: &A) -> A::Expr;
    fn incoming_port(&self, ast: &A) -> A::Expr;
    fn static_program(&self, ast: &A) -> A::Expr;
    fn crash(&self, ast: &A) -> A::Expr;
}

/// Constructors for target AST nodes (§6 "Target AST builder").
///
/// `Expr`/`Stmt` are opaque to the generator beyond what these constructors
/// return; nothing in this crate inspects their internals. A caller that
/// wants source text, not a tree, renders `Expr`/`Stmt` itself.
pub trait TargetAst {
    type Expr;
    type Stmt;

    fn ident(&self, name: &str) -> Self::Expr;
    fn int_lit(&self, n: i64) -> Self::Expr;
    fn float_lit(&self, n: f64) -> Self::Expr;
    fn bool_lit(&self, b: bool) -> Self::Expr;
    fn str_lit(&self, s: &str) -> Self::Expr;
    fn object(&self, fields: Vec<(String, Self::Expr)>) -> Self::Expr;
    fn array(&self, elems: Vec<Self::Expr>) -> Self::Expr;
    fn member(&self, object: Self::Expr, field: &str) -> Self::Expr;
    fn index(&self, object: Self::Expr, index: Self::Expr) -> Self::Expr;
    fn call(&self, callee: Self::Expr, args: Vec<Self::Expr>) -> Self::Expr;
    fn prefix(&self, op: &str, expr: Self::Expr) -> Self::Expr;
    fn infix(&self, op: &str, lhs: Self::Expr, rhs: Self::Expr) -> Self::Expr;
    fn conditional(&self, test: Self::Expr, consequent: Self::Expr, alternate: Self::Expr) -> Self::Expr;
    fn function(&self, params: &[String], body: Vec<Self::Stmt>) -> Self::Expr;
    fn iife(&self, body: Vec<Self::Stmt>) -> Self::Expr;

    fn expr_stmt(&self, expr: Self::Expr) -> Self::Stmt;
    fn return_stmt(&self, expr: Self::Expr) -> Self::Stmt;
    fn var_decl(&self, name: &str, init: Self::Expr) -> Self::Stmt;
    fn assign(&self, target: Self::Expr, value: Self::Expr) -> Self::Stmt;
    fn if_stmt(&self, test: Self::Expr, consequent: Vec<Self::Stmt>, alternate: Option<Vec<Self::Stmt>>) -> Self::Stmt;
    fn while_true(&self, body: Vec<Self::Stmt>) -> Self::Stmt;
    fn do_while_false(&self, body: Vec<Self::Stmt>) -> Self::Stmt;
    fn labeled(&self, label: &str, stmt: Self::Stmt) -> Self::Stmt;
    fn break_to(&self, label: Option<&str>) -> Self::Stmt;
    fn continue_to(&self, label: &str) -> Self::Stmt;
    fn switch_stmt(&self, discriminant: Self::Expr, cases: Vec<(Self::Expr, Vec<Self::Stmt>)>, default: Vec<Self::Stmt>) -> Self::Stmt;
    fn block(&self, stmts: Vec<Self::Stmt>) -> Self::Stmt;
}
