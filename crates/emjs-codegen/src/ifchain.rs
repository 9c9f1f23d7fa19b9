//! If-chain crushing and emission (§4.7).

use emjs_core::Expr;

use crate::code::Code;
use crate::collaborators::TargetAst;
use crate::context::Context;
use crate::expr::compile_expr;
use crate::function::TailFrame;

/// Flatten nested `If`s into an ordered branch list plus a single default
/// (§4.7 "Crush", §8 property 5).
fn crush<'a>(branches: &'a [(Expr, Expr)], finally: &'a Expr) -> (Vec<&'a (Expr, Expr)>, &'a Expr) {
    let mut flat: Vec<&(Expr, Expr)> = Vec::new();
    for branch in branches {
        if let (Expr::Literal(emjs_core::Literal::Bool(true)), body) = branch {
            // A literal-true condition terminates the branch list; its
            // body becomes the default and later branches are dropped.
            return (flat, body);
        }
        flat.push(branch);
    }

    match finally {
        Expr::If(inner_branches, inner_finally) => {
            let (mut rest, default) = crush(inner_branches, inner_finally);
            flat.append(&mut rest);
            (flat, default)
        }
        _ => (flat, finally),
    }
}

pub fn compile_if<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    branches: &[(Expr, Expr)],
    finally: &Expr,
    tail: Option<&TailFrame<'_>>,
) -> Code<A> {
    let (flat, default) = crush(branches, finally);

    let compiled: Vec<(A::Expr, Code<A>)> = flat
        .into_iter()
        .map(|(cond, body)| {
            let c = compile_expr(ctx, cond, None).into_expr(ctx.ast);
            let b = compile_expr(ctx, body, tail);
            (c, b)
        })
        .collect();
    let default_code = compile_expr(ctx, default, tail);

    let any_block = compiled.iter().any(|(_, c)| c.is_block()) || default_code.is_block();

    if any_block {
        emit_statement_chain(ctx, compiled, default_code)
    } else {
        Code::Expr(emit_expression_chain(ctx, compiled, default_code))
    }
}

fn emit_statement_chain<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    branches: Vec<(A::Expr, Code<A>)>,
    default: Code<A>,
) -> Code<A> {
    let mut result = default.into_stmts(ctx.ast);
    for (cond, body) in branches.into_iter().rev() {
        let consequent = body.into_stmts(ctx.ast);
        let stmt = ctx.ast.if_stmt(cond, consequent, Some(result));
        result = vec![stmt];
    }
    Code::Block(result)
}

fn emit_expression_chain<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    branches: Vec<(A::Expr, Code<A>)>,
    default: Code<A>,
) -> A::Expr {
    let mut result = default.into_expr(ctx.ast);
    for (cond, body) in branches.into_iter().rev() {
        let consequent = body.into_expr(ctx.ast);
        result = ctx.ast.conditional(cond, consequent, result);
    }
    result
}
