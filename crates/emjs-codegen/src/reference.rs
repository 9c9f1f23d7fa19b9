//! Reference collaborator implementations.
//!
//! None of this is part of the generator's functional scope — the core
//! dispatcher and lowering routines (`expr`, `binop`, `call`, `function`,
//! `ifchain`, `decision_emit`, `program`) are written against the traits in
//! [`crate::collaborators`] only. This module exists so the crate is
//! buildable and testable on its own: a minimal structured JS expression
//! and statement tree, plus one implementation of each collaborator trait
//! over it, and a deterministic text renderer for golden-output tests.

use emjs_core::{Literal, PortType};

use crate::collaborators::{ForeignCodec, LiteralEncoder, NameMangler, RuntimeHelpers, TargetAst};

/// A minimal structured JavaScript expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum JsExpr {
    Ident(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Object(Vec<(String, JsExpr)>),
    Array(Vec<JsExpr>),
    Member(Box<JsExpr>, String),
    Index(Box<JsExpr>, Box<JsExpr>),
    Call(Box<JsExpr>, Vec<JsExpr>),
    Prefix(String, Box<JsExpr>),
    Infix(String, Box<JsExpr>, Box<JsExpr>),
    Conditional(Box<JsExpr>, Box<JsExpr>, Box<JsExpr>),
    Function(Vec<String>, Vec<JsStmt>),
    Iife(Vec<JsStmt>),
}

/// A minimal structured JavaScript statement tree.
#[derive(Debug, Clone, PartialEq)]
pub enum JsStmt {
    Expr(JsExpr),
    Return(JsExpr),
    VarDecl(String, JsExpr),
    Assign(JsExpr, JsExpr),
    If(JsExpr, Vec<JsStmt>, Option<Vec<JsStmt>>),
    WhileTrue(Vec<JsStmt>),
    DoWhileFalse(Vec<JsStmt>),
    Labeled(String, Box<JsStmt>),
    Break(Option<String>),
    Continue(String),
    Switch(JsExpr, Vec<(JsExpr, Vec<JsStmt>)>, Vec<JsStmt>),
    Block(Vec<JsStmt>),
}

/// The reference [`TargetAst`]: constructors build the tree above directly.
pub struct ReferenceAst;

impl TargetAst for ReferenceAst {
    type Expr = JsExpr;
    type Stmt = JsStmt;

    fn ident(&self, name: &str) -> JsExpr {
        JsExpr::Ident(name.to_string())
    }
    fn int_lit(&self, n: i64) -> JsExpr {
        JsExpr::Int(n)
    }
    fn float_lit(&self, n: f64) -> JsExpr {
        JsExpr::Float(n)
    }
    fn bool_lit(&self, b: bool) -> JsExpr {
        JsExpr::Bool(b)
    }
    fn str_lit(&self, s: &str) -> JsExpr {
        JsExpr::Str(s.to_string())
    }
    fn object(&self, fields: Vec<(String, JsExpr)>) -> JsExpr {
        JsExpr::Object(fields)
    }
    fn array(&self, elems: Vec<JsExpr>) -> JsExpr {
        JsExpr::Array(elems)
    }
    fn member(&self, object: JsExpr, field: &str) -> JsExpr {
        JsExpr::Member(Box::new(object), field.to_string())
    }
    fn index(&self, object: JsExpr, index: JsExpr) -> JsExpr {
        JsExpr::Index(Box::new(object), Box::new(index))
    }
    fn call(&self, callee: JsExpr, args: Vec<JsExpr>) -> JsExpr {
        JsExpr::Call(Box::new(callee), args)
    }
    fn prefix(&self, op: &str, expr: JsExpr) -> JsExpr {
        JsExpr::Prefix(op.to_string(), Box::new(expr))
    }
    fn infix(&self, op: &str, lhs: JsExpr, rhs: JsExpr) -> JsExpr {
        JsExpr::Infix(op.to_string(), Box::new(lhs), Box::new(rhs))
    }
    fn conditional(&self, test: JsExpr, consequent: JsExpr, alternate: JsExpr) -> JsExpr {
        JsExpr::Conditional(Box::new(test), Box::new(consequent), Box::new(alternate))
    }
    fn function(&self, params: &[String], body: Vec<JsStmt>) -> JsExpr {
        JsExpr::Function(params.to_vec(), body)
    }
    fn iife(&self, body: Vec<JsStmt>) -> JsExpr {
        JsExpr::Iife(body)
    }

    fn expr_stmt(&self, expr: JsExpr) -> JsStmt {
        JsStmt::Expr(expr)
    }
    fn return_stmt(&self, expr: JsExpr) -> JsStmt {
        JsStmt::Return(expr)
    }
    fn var_decl(&self, name: &str, init: JsExpr) -> JsStmt {
        JsStmt::VarDecl(name.to_string(), init)
    }
    fn assign(&self, target: JsExpr, value: JsExpr) -> JsStmt {
        JsStmt::Assign(target, value)
    }
    fn if_stmt(&self, test: JsExpr, consequent: Vec<JsStmt>, alternate: Option<Vec<JsStmt>>) -> JsStmt {
        JsStmt::If(test, consequent, alternate)
    }
    fn while_true(&self, body: Vec<JsStmt>) -> JsStmt {
        JsStmt::WhileTrue(body)
    }
    fn do_while_false(&self, body: Vec<JsStmt>) -> JsStmt {
        JsStmt::DoWhileFalse(body)
    }
    fn labeled(&self, label: &str, stmt: JsStmt) -> JsStmt {
        JsStmt::Labeled(label.to_string(), Box::new(stmt))
    }
    fn break_to(&self, label: Option<&str>) -> JsStmt {
        JsStmt::Break(label.map(str::to_string))
    }
    fn continue_to(&self, label: &str) -> JsStmt {
        JsStmt::Continue(label.to_string())
    }
    fn switch_stmt(
        &self,
        discriminant: JsExpr,
        cases: Vec<(JsExpr, Vec<JsStmt>)>,
        default: Vec<JsStmt>,
    ) -> JsStmt {
        JsStmt::Switch(discriminant, cases, default)
    }
    fn block(&self, stmts: Vec<JsStmt>) -> JsStmt {
        JsStmt::Block(stmts)
    }
}

const RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "export", "extends", "finally", "for", "function", "if", "import", "in", "instanceof",
    "new", "return", "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while",
    "with", "yield", "let", "static", "enum", "await", "implements", "package", "protected",
    "interface", "private", "public",
];

fn escape_reserved(name: &str) -> String {
    if RESERVED.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// ASCII-identifier-passthrough mangler with reserved-word suffixing.
pub struct ReferenceMangler {
    fresh_prefix: String,
}

impl ReferenceMangler {
    pub fn new(fresh_prefix: impl Into<String>) -> Self {
        Self { fresh_prefix: fresh_prefix.into() }
    }
}

impl<A: TargetAst> NameMangler<A> for ReferenceMangler {
    fn local(&self, name: &str) -> String {
        escape_reserved(name)
    }

    fn field(&self, name: &str) -> String {
        escape_reserved(name)
    }

    fn global(&self, module: &str, name: &str) -> String {
        format!("{}${}", module.replace('.', "_"), escape_reserved(name))
    }

    fn fresh(&self, counter: u32) -> String {
        format!("{}{counter}", self.fresh_prefix)
    }

    fn define_global(&self, module: &str, name: &str, expr: A::Expr, ast: &A) -> A::Stmt {
        ast.var_decl(&NameMangler::<A>::global(self, module, name), expr)
    }
}

/// Direct literal-to-expression encoding.
pub struct ReferenceLiteralEncoder;

impl<A: TargetAst> LiteralEncoder<A> for ReferenceLiteralEncoder {
    fn encode(&self, lit: &Literal, ast: &A) -> A::Expr {
        match lit {
            Literal::Int(n) => ast.int_lit(*n),
            Literal::Float(n) => ast.float_lit(*n),
            Literal::Bool(b) => ast.bool_lit(*b),
            Literal::Str(s) => ast.str_lit(s),
            // Boxed so `===` compares by identity and `.valueOf()` (§4.8,
            // §9) recovers the primitive for testing.
            Literal::Char(c) => {
                let boxed = ast.ident("__char");
                ast.call(boxed, vec![ast.str_lit(&c.to_string())])
            }
        }
    }
}

/// Identity codec: encode/decode are named by the type descriptor alone,
/// sufficient for the port-shape scenarios in §4.2.
pub struct ReferenceForeignCodec;

impl<A: TargetAst> ForeignCodec<A> for ReferenceForeignCodec {
    fn encoder(&self, ty: &PortType, ast: &A) -> A::Expr {
        ast.ident(&format!("encode${}", ty.0))
    }

    fn decoder(&self, ty: &PortType, ast: &A) -> A::Expr {
        ast.ident(&format!("decode${}", ty.0))
    }
}

/// The conventional `Fn`/`An` curry-helper and runtime-function names this
/// reference target uses.
pub struct ReferenceRuntimeHelpers;

impl<A: TargetAst> RuntimeHelpers<A> for ReferenceRuntimeHelpers {
    fn curry_fn(&self, arity: usize, ast: &A) -> A::Expr {
        ast.ident(&format!("F{arity}"))
    }
    fn curry_apply(&self, arity: usize, ast: &A) -> A::Expr {
        ast.ident(&format!("A{arity}"))
    }
    fn list(&self, ast: &A) -> A::Expr {
        ast.ident("list")
    }
    fn cons(&self, ast: &A) -> A::Expr {
        ast.ident("cons")
    }
    fn record_update(&self, ast: &A) -> A::Expr {
        ast.ident("recordUpdate")
    }
    fn eq(&self, ast: &A) -> A::Expr {
        ast.ident("eq")
    }
    fn cmp(&self, ast: &A) -> A::Expr {
        ast.ident("cmp")
    }
    fn effect(&self, module: &str, ast: &A) -> A::Expr {
        let effect = ast.ident("effect");
        ast.call(effect, vec![ast.str_lit(module)])
    }
    fn outgoing_port(&self, ast: &A) -> A::Expr {
        ast.ident("outgoingPort")
    }
    fn incoming_port(&self, ast: &A) -> A::Expr {
        ast.ident("incomingPort")
    }
    fn static_program(&self, ast: &A) -> A::Expr {
        ast.ident("staticProgram")
    }
    fn crash(&self, ast: &A) -> A::Expr {
        ast.ident("crash")
    }
}
