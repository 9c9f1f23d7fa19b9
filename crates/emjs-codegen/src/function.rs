//! Function lowering (§4.3) and self-tail-call compilation (§4.4).

use emjs_core::{Bug, Expr, invariant};

use crate::code::Code;
use crate::collaborators::TargetAst;
use crate::context::Context;
use crate::expr::compile_expr;

/// The enclosing `TailDef` a `TailCall` must target, threaded explicitly
/// through the recursion rather than stored as mutable context state, so
/// it is always scoped correctly to nested function bodies.
pub struct TailFrame<'a> {
    pub name: &'a str,
    pub arg_names: &'a [String],
    pub label: String,
}

/// Emit `Function(args, body)` under the arity-curry convention.
pub fn compile_function<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    args: &[String],
    body: &Expr,
) -> A::Expr {
    let body_code = compile_expr(ctx, body, None);
    let stmts = body_code.into_stmts(ctx.ast);
    compile_function_from_stmts(ctx, args, stmts)
}

/// Wraps an already-compiled statement list under the arity-curry
/// convention; the shared tail between [`compile_function`] and
/// [`compile_taildef`], whose body is a label+loop rather than a plain
/// expression.
pub fn compile_function_from_stmts<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    args: &[String],
    stmts: Vec<A::Stmt>,
) -> A::Expr {
    invariant(!args.is_empty(), || Bug::ZeroArityFunction);

    let arity = args.len();
    let min = ctx.config.min_curry_arity;
    let max = ctx.config.max_curry_arity;
    let names: Vec<String> = args.iter().map(|a| ctx.mangler.local(a)).collect();

    if arity >= min && arity <= max {
        let raw = ctx.ast.function(&names, stmts);
        let fn_n = ctx.runtime.curry_fn(arity, ctx.ast);
        return ctx.ast.call(fn_n, vec![raw]);
    }

    if arity == 1 {
        return ctx.ast.function(&names, stmts);
    }

    // arity > max_curry_arity: right-associated nested single-argument
    // functions, innermost holds the body.
    let mut body_stmts = stmts;
    let mut innermost = true;
    let mut result = None;
    for name in names.into_iter().rev() {
        let fn_stmts = if innermost {
            innermost = false;
            std::mem::take(&mut body_stmts)
        } else {
            let inner = result.take().expect("built on a prior iteration");
            vec![ctx.ast.return_stmt(inner)]
        };
        result = Some(ctx.ast.function(std::slice::from_ref(&name), fn_stmts));
    }
    result.expect("arity > 0 guarantees at least one iteration")
}

/// `TailDef(name, argNames, body)` (§4.4): compile the body, wrap it in
/// `label name: while (true) { ... }`, then run the wrapped body through
/// the ordinary arity-curry lowering.
pub fn compile_taildef<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    name: &str,
    arg_names: &[String],
    body: &Expr,
) -> A::Expr {
    let label = ctx.mangler.local(name);
    let frame = TailFrame {
        name,
        arg_names,
        label: label.clone(),
    };

    let body_code = compile_expr(ctx, body, Some(&frame));
    let stmts = body_code.into_stmts(ctx.ast);
    let loop_stmt = ctx.ast.while_true(stmts);
    let labeled = ctx.ast.labeled(&label, loop_stmt);

    compile_function_from_stmts(ctx, arg_names, vec![labeled])
}

/// `TailCall(name, argNames, args)` (§4.4): declare-then-assign temporaries
/// for every argument, then `continue` the enclosing loop label.
pub fn compile_tailcall<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    name: &str,
    arg_names: &[String],
    args: &[Expr],
    tail: Option<&TailFrame<'_>>,
) -> Code<A> {
    let frame = tail.unwrap_or_else(|| {
        invariant(false, || Bug::TailCallOutsideTailDef {
            call_name: name.to_string(),
        });
        unreachable!("invariant() above always panics")
    });

    invariant(frame.name == name, || Bug::TailCallNameMismatch {
        def_name: frame.name.to_string(),
        call_name: name.to_string(),
    });
    invariant(frame.arg_names.len() == args.len(), || Bug::TailCallArityMismatch {
        name: name.to_string(),
        expected: frame.arg_names.len(),
        got: args.len(),
    });

    let compiled_args: Vec<A::Expr> = args
        .iter()
        .map(|a| compile_expr(ctx, a, None).into_expr(ctx.ast))
        .collect();

    let temps: Vec<String> = compiled_args.iter().map(|_| ctx.fresh()).collect();

    let mut stmts = Vec::with_capacity(args.len() * 2 + 1);
    for (temp, value) in temps.iter().zip(compiled_args) {
        stmts.push(ctx.ast.var_decl(temp, value));
    }
    for (arg_name, temp) in arg_names.iter().zip(&temps) {
        let target = ctx.ast.ident(&ctx.mangler.local(arg_name));
        let value = ctx.ast.ident(temp);
        stmts.push(ctx.ast.assign(target, value));
    }
    stmts.push(ctx.ast.continue_to(&frame.label));

    Code::Block(stmts)
}
