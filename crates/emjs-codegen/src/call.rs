//! Call lowering (§4.5), including the special-cased `Bitwise`/`Basics`
//! global calls that bypass the arity convention entirely.

use emjs_core::Expr;

use crate::collaborators::TargetAst;
use crate::context::Context;
use crate::expr::compile_expr;

pub fn compile_call<A: TargetAst>(ctx: &mut Context<'_, A>, func: &Expr, args: &[Expr]) -> A::Expr {
    if let Some(expr) = compile_special_case(ctx, func, args) {
        return expr;
    }

    let callee = compile_expr(ctx, func, None).into_expr(ctx.ast);
    let compiled: Vec<A::Expr> = args
        .iter()
        .map(|a| compile_expr(ctx, a, None).into_expr(ctx.ast))
        .collect();
    compile_saturated_call(ctx, callee, compiled)
}

/// `Aₙ(func, a₁, …, aₙ)` for `2 ≤ n ≤ 9`; a native call for `n == 1`;
/// left-associated single-argument folds for `n > max_curry_arity`.
pub fn compile_saturated_call<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    callee: A::Expr,
    args: Vec<A::Expr>,
) -> A::Expr {
    let n = args.len();
    let min = ctx.config.min_curry_arity;
    let max = ctx.config.max_curry_arity;

    if n == 1 {
        let mut args = args;
        return ctx.ast.call(callee, vec![args.remove(0)]);
    }

    if n >= min && n <= max {
        let an = ctx.runtime.curry_apply(n, ctx.ast);
        let mut call_args = Vec::with_capacity(n + 1);
        call_args.push(callee);
        call_args.extend(args);
        return ctx.ast.call(an, call_args);
    }

    // n > max_curry_arity: fold A1(...A1(A1(func, a1), a2)..., an)
    let mut acc = callee;
    for arg in args {
        acc = ctx.ast.call(acc, vec![arg]);
    }
    acc
}

/// Global functions whose call sites lower to a primitive target
/// construct instead of the arity convention.
fn compile_special_case<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    func: &Expr,
    args: &[Expr],
) -> Option<A::Expr> {
    let Expr::VarGlobal(module, name) = func else {
        return None;
    };

    let op = match (module.as_str(), name.as_str(), args.len()) {
        ("Bitwise", "complement", 1) => {
            let x = compile_expr(ctx, &args[0], None).into_expr(ctx.ast);
            return Some(ctx.ast.prefix("~", x));
        }
        ("Basics", "not", 1) => {
            let x = compile_expr(ctx, &args[0], None).into_expr(ctx.ast);
            return Some(ctx.ast.prefix("!", x));
        }
        ("Bitwise", "and", 2) => "&",
        ("Bitwise", "or", 2) => "|",
        ("Bitwise", "xor", 2) => "^",
        ("Bitwise", "shiftLeftBy", 2) => {
            // argument order swapped: shiftLeftBy n x -> x << n
            let n = compile_expr(ctx, &args[0], None).into_expr(ctx.ast);
            let x = compile_expr(ctx, &args[1], None).into_expr(ctx.ast);
            return Some(ctx.ast.infix("<<", x, n));
        }
        ("Bitwise", "shiftRightBy", 2) => {
            let n = compile_expr(ctx, &args[0], None).into_expr(ctx.ast);
            let x = compile_expr(ctx, &args[1], None).into_expr(ctx.ast);
            return Some(ctx.ast.infix(">>", x, n));
        }
        ("Bitwise", "shiftRightZfBy", 2) => {
            let n = compile_expr(ctx, &args[0], None).into_expr(ctx.ast);
            let x = compile_expr(ctx, &args[1], None).into_expr(ctx.ast);
            return Some(ctx.ast.infix(">>>", x, n));
        }
        _ => return None,
    };

    let l = compile_expr(ctx, &args[0], None).into_expr(ctx.ast);
    let r = compile_expr(ctx, &args[1], None).into_expr(ctx.ast);
    Some(ctx.ast.infix(op, l, r))
}
