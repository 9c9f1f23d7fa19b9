//! Binary-operator lowering (§4.6).
//!
//! The `Basics` table is a flat match on a small closed set rather than a
//! hash lookup, since the set of special-cased operators is fixed and small
//! enough that the match compiles to a jump table anyway.

use emjs_core::Expr;

use crate::collaborators::TargetAst;
use crate::context::Context;
use crate::expr::compile_expr;

pub fn compile_binop<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    home: &str,
    op: &str,
    lhs: &Expr,
    rhs: &Expr,
) -> A::Expr {
    let l = compile_expr(ctx, lhs, None).into_expr(ctx.ast);
    let r = compile_expr(ctx, rhs, None).into_expr(ctx.ast);

    if home == "Basics" {
        match compile_basics_op(ctx, op, l, r) {
            Ok(expr) => return expr,
            // Operator not in the table: fall through to the default
            // A2(moduleRef(home, op), l, r) lowering below.
            Err((l, r)) => return compile_default_binop(ctx, home, op, l, r),
        }
    }

    if home == "List" && op == "::" {
        let cons = ctx.runtime.cons(ctx.ast);
        return ctx.ast.call(cons, vec![l, r]);
    }

    compile_default_binop(ctx, home, op, l, r)
}

fn compile_default_binop<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    home: &str,
    op: &str,
    l: A::Expr,
    r: A::Expr,
) -> A::Expr {
    let a2 = ctx.runtime.curry_apply(2, ctx.ast);
    let module_ref = ctx.ast.ident(&ctx.mangler.global(home, op));
    ctx.ast.call(a2, vec![module_ref, l, r])
}

/// The `Basics` operator table. Returns `Err((l, r))` with the operands
/// handed back unused when `op` isn't one of the table's rows, so the
/// caller can fall through to the default lowering without re-compiling
/// the operands.
fn compile_basics_op<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    op: &str,
    l: A::Expr,
    r: A::Expr,
) -> Result<A::Expr, (A::Expr, A::Expr)> {
    let ast = ctx.ast;
    Ok(match op {
        "+" | "-" | "*" | "/" | "&&" | "||" => ast.infix(op, l, r),
        "^" => {
            let math = ast.ident("Math");
            let pow = ast.member(math, "pow");
            ast.call(pow, vec![l, r])
        }
        "==" => {
            let eq = ctx.runtime.eq(ast);
            ast.call(eq, vec![l, r])
        }
        "/=" => {
            let eq = ctx.runtime.eq(ast);
            let call = ast.call(eq, vec![l, r]);
            ast.prefix("!", call)
        }
        "<" | ">" => {
            let cmp = ctx.runtime.cmp(ast);
            let call = ast.call(cmp, vec![l, r]);
            let zero = ast.int_lit(0);
            ast.infix(op, call, zero)
        }
        "<=" => {
            let cmp = ctx.runtime.cmp(ast);
            let call = ast.call(cmp, vec![l, r]);
            let one = ast.int_lit(1);
            ast.infix("<", call, one)
        }
        ">=" => {
            let cmp = ctx.runtime.cmp(ast);
            let call = ast.call(cmp, vec![l, r]);
            let neg_one = ast.int_lit(-1);
            ast.infix(">", call, neg_one)
        }
        "//" => {
            let div = ast.infix("/", l, r);
            let zero = ast.int_lit(0);
            ast.infix("|", div, zero)
        }
        _ => return Err((l, r)),
    })
}
