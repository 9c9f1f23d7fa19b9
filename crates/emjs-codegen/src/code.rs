//! The code envelope and its coercions (§4.1).

use crate::collaborators::TargetAst;

/// Either a single target expression or a block of target statements.
///
/// Every lowering routine returns a `Code`; callers coerce to whichever of
/// the three shapes their context needs. Choosing `Block` only when a
/// routine genuinely produced statements (rather than defaulting to it) is
/// what keeps [`Code::into_expr`]'s IIFE wrap rare.
pub enum Code<A: TargetAst> {
    Expr(A::Expr),
    Block(Vec<A::Stmt>),
}

impl<A: TargetAst> Code<A> {
    pub fn is_block(&self) -> bool {
        matches!(self, Code::Block(_))
    }

    /// To statement list: `Expr(e) -> [return e]`, `Block(s) -> s`.
    pub fn into_stmts(self, ast: &A) -> Vec<A::Stmt> {
        match self {
            Code::Expr(e) => vec![ast.return_stmt(e)],
            Code::Block(stmts) => stmts,
        }
    }

    /// To single statement: `Expr(e) -> return e`, `Block([s]) -> s`,
    /// `Block(s) -> { s }`.
    pub fn into_stmt(self, ast: &A) -> A::Stmt {
        match self {
            Code::Expr(e) => ast.return_stmt(e),
            Code::Block(mut stmts) => {
                if stmts.len() == 1 {
                    stmts.pop().expect("len checked above")
                } else {
                    ast.block(stmts)
                }
            }
        }
    }

    /// To expression: `Expr(e) -> e`, `Block(s) -> (function(){ s })()`.
    pub fn into_expr(self, ast: &A) -> A::Expr {
        match self {
            Code::Expr(e) => e,
            Code::Block(stmts) => ast.iife(stmts),
        }
    }
}
