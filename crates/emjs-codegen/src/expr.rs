//! The expression dispatcher (§4.2): top-level recursion over IR variants,
//! delegating to the specialized lowering routines for the nontrivial
//! cases and inlining the rest directly.

use emjs_core::{BranchProblem, Bug, Expr, Literal, invariant};

use crate::binop::compile_binop;
use crate::call::compile_call;
use crate::code::Code;
use crate::collaborators::TargetAst;
use crate::context::Context;
use crate::decision_emit::compile_case;
use crate::function::{TailFrame, compile_function, compile_tailcall};
use crate::ifchain::compile_if;
use crate::program::compile_def;

/// Compile one IR expression into a `Code` envelope.
///
/// `tail`, when present, names the enclosing `TailDef` this expression is
/// nested in tail position of — only `If`, `Case`, `Let`, and `TailCall`
/// inspect it; every other variant leaves tail position (so their operands
/// recurse with `None`).
pub fn compile_expr<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    expr: &Expr,
    tail: Option<&TailFrame<'_>>,
) -> Code<A> {
    match expr {
        Expr::If(branches, finally) => compile_if(ctx, branches, finally, tail),
        Expr::Case(scrutinee, decider, jumps) => compile_case(ctx, scrutinee, decider, jumps, tail),
        Expr::Let(defs, body) => compile_let(ctx, defs, body, tail),
        Expr::TailCall(name, arg_names, args) => compile_tailcall(ctx, name, arg_names, args, tail),
        other => Code::Expr(compile_direct(ctx, other)),
    }
}

fn compile_let<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    defs: &[(String, emjs_core::Def)],
    body: &Expr,
    tail: Option<&TailFrame<'_>>,
) -> Code<A> {
    let mut stmts = Vec::with_capacity(defs.len());
    for (name, def) in defs {
        let local = ctx.mangler.local(name);
        let value = compile_def(ctx, name, def);
        stmts.push(ctx.ast.var_decl(&local, value));
    }

    let body_code = compile_expr(ctx, body, tail);
    if stmts.is_empty() {
        return body_code;
    }

    stmts.extend(body_code.into_stmts(ctx.ast));
    Code::Block(stmts)
}

/// The direct cases of §4.2 that need no dedicated module, plus delegation
/// to the binop/call/function routines for the rest.
fn compile_direct<A: TargetAst>(ctx: &mut Context<'_, A>, expr: &Expr) -> A::Expr {
    match expr {
        Expr::VarLocal(name) => ctx.ast.ident(&ctx.mangler.local(name)),
        Expr::VarGlobal(module, name) => ctx.ast.ident(&ctx.mangler.global(module, name)),
        Expr::Literal(lit) => compile_literal(ctx, lit),
        Expr::Access(record, field) => {
            let r = compile_expr(ctx, record, None).into_expr(ctx.ast);
            ctx.ast.member(r, &ctx.mangler.field(field))
        }
        Expr::Update(record, fields) => {
            let r = compile_expr(ctx, record, None).into_expr(ctx.ast);
            let obj = compile_fields(ctx, fields);
            let update = ctx.runtime.record_update(ctx.ast);
            ctx.ast.call(update, vec![r, obj])
        }
        Expr::Record(fields) => compile_fields(ctx, fields),
        Expr::Binop(home, op, l, r) => compile_binop(ctx, home, op, l, r),
        Expr::Function(args, body) => compile_function(ctx, args, body),
        Expr::Call(func, args) => compile_call(ctx, func, args),
        Expr::List(elems) => {
            let compiled: Vec<A::Expr> = elems
                .iter()
                .map(|e| compile_expr(ctx, e, None).into_expr(ctx.ast))
                .collect();
            let array_lit = ctx.ast.array(compiled);
            let list_fn = ctx.runtime.list(ctx.ast);
            ctx.ast.call(list_fn, vec![array_lit])
        }
        Expr::Ctor(tag, members) => compile_ctor(ctx, tag, members),
        Expr::CtorAccess(e, index) => {
            let inner = compile_expr(ctx, e, None).into_expr(ctx.ast);
            ctx.ast.member(inner, &format!("_{index}"))
        }
        Expr::Cmd(module, _payload) => ctx.runtime.effect(module, ctx.ast),
        Expr::Sub(module, _payload) => ctx.runtime.effect(module, ctx.ast),
        Expr::OutgoingPort(name, ty) => {
            let outgoing = ctx.runtime.outgoing_port(ctx.ast);
            let encode = ctx.foreign.encoder(ty, ctx.ast);
            let name_lit = ctx.ast.str_lit(name);
            ctx.ast.call(outgoing, vec![name_lit, encode])
        }
        Expr::IncomingPort(name, ty) => {
            let incoming = ctx.runtime.incoming_port(ctx.ast);
            let decode = ctx.foreign.decoder(ty, ctx.ast);
            let name_lit = ctx.ast.str_lit(name);
            ctx.ast.call(incoming, vec![name_lit, decode])
        }
        Expr::GLShader(src) => {
            let src_lit = ctx.ast.str_lit(src);
            ctx.ast.object(vec![("src".to_string(), src_lit)])
        }
        Expr::Crash(module, region, problem) => compile_crash(ctx, module, region, problem.as_ref()),
        Expr::Program(kind, body) => crate::program::compile_program(ctx, kind, body),
        Expr::If(..) | Expr::Case(..) | Expr::Let(..) | Expr::TailCall(..) => {
            unreachable!("handled in compile_expr before reaching compile_direct")
        }
    }
}

fn compile_literal<A: TargetAst>(ctx: &mut Context<'_, A>, lit: &Literal) -> A::Expr {
    ctx.literals.encode(lit, ctx.ast)
}

fn compile_fields<A: TargetAst>(ctx: &mut Context<'_, A>, fields: &[emjs_core::Field]) -> A::Expr {
    let mut seen = std::collections::HashSet::with_capacity(fields.len());
    let compiled: Vec<(String, A::Expr)> = fields
        .iter()
        .map(|(name, value)| {
            invariant(seen.insert(name.as_str()), || Bug::DuplicateField {
                field: name.clone(),
            });
            let v = compile_expr(ctx, value, None).into_expr(ctx.ast);
            (ctx.mangler.field(name), v)
        })
        .collect();
    ctx.ast.object(compiled)
}

fn compile_ctor<A: TargetAst>(ctx: &mut Context<'_, A>, tag: &str, members: &[Expr]) -> A::Expr {
    let mut fields = vec![("ctor".to_string(), ctx.ast.str_lit(tag))];
    for (i, member) in members.iter().enumerate() {
        let v = compile_expr(ctx, member, None).into_expr(ctx.ast);
        fields.push((format!("_{i}"), v));
    }
    ctx.ast.object(fields)
}

fn compile_crash<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    module: &str,
    region: &str,
    problem: Option<&BranchProblem>,
) -> A::Expr {
    let crash = ctx.runtime.crash(ctx.ast);
    let mut args = vec![ctx.ast.str_lit(module), ctx.ast.str_lit(region)];
    if let Some(problem) = problem {
        let patterns: Vec<A::Expr> = problem
            .expected_patterns
            .iter()
            .map(|p| ctx.ast.str_lit(p))
            .collect();
        args.push(ctx.ast.array(patterns));
    }
    ctx.ast.call(crash, args)
}
