//! Definition compilation and program-entry wrapping (§4.9, §6).

use emjs_core::{Def, Expr, ProgramKind};

use crate::collaborators::TargetAst;
use crate::context::Context;
use crate::expr::compile_expr;
use crate::function::compile_taildef;

/// Compile a `Def`/`TailDef`'s right-hand side to its value expression.
/// `name` is the binding's own name (the `Let` entry's key, or the
/// caller-supplied top-level binding name, §6) — `TailDef` needs it to
/// label its loop and validate its `TailCall`s (§4.4).
pub fn compile_def<A: TargetAst>(ctx: &mut Context<'_, A>, name: &str, def: &Def) -> A::Expr {
    match def {
        Def::Def(body) => compile_expr(ctx, body, None).into_expr(ctx.ast),
        Def::TailDef(arg_names, body) => compile_taildef(ctx, name, arg_names, body),
    }
}

/// Compile a top-level definition into its module-scoped declaration
/// (§6: one IR definition keyed by a canonical module name and a top-level
/// binding name).
pub fn compile_top_level_def<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    module: &str,
    name: &str,
    def: &Def,
) -> A::Stmt {
    let value = compile_def(ctx, name, def);
    ctx.mangler.define_global(module, name, value, ctx.ast)
}

/// `Program(kind, body)` (§4.9).
pub fn compile_program<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    kind: &ProgramKind,
    body: &Expr,
) -> A::Expr {
    let compiled = compile_expr(ctx, body, None).into_expr(ctx.ast);
    match kind {
        ProgramKind::VDom => {
            let helper = ctx.runtime.static_program(ctx.ast);
            ctx.ast.call(helper, vec![compiled])
        }
        ProgramKind::NoFlags => ctx.ast.call(compiled, vec![]),
        ProgramKind::Flags(ty) => {
            let decoded = ctx.foreign.decoder(ty, ctx.ast);
            ctx.ast.call(compiled, vec![decoded])
        }
    }
}
