//! Decision-tree lowering (§4.8): the `Case` expression and the
//! `Decider`/`Path`/`Test` tree embedded in it.

use indexmap::IndexMap;

use emjs_core::{Bug, Decider, Expr, Leaf, Literal, Path, Test, invariant};

use crate::code::Code;
use crate::collaborators::TargetAst;
use crate::context::Context;
use crate::expr::compile_expr;
use crate::function::TailFrame;

/// Fold a `Path` into the member-access expression it names, rooted at
/// the case scrutinee (§4.8 "Path to access expression").
fn compile_path<A: TargetAst>(ctx: &Context<'_, A>, root: &str, path: &Path) -> A::Expr {
    fn walk<A: TargetAst>(ctx: &Context<'_, A>, expr: A::Expr, path: &Path) -> A::Expr {
        match path {
            Path::Empty | Path::Alias => expr,
            Path::Position(index, rest) => {
                let accessed = ctx.ast.member(expr, &format!("_{index}"));
                walk(ctx, accessed, rest)
            }
            Path::Field(name, rest) => {
                let accessed = ctx.ast.member(expr, &ctx.mangler.field(name));
                walk(ctx, accessed, rest)
            }
        }
    }

    let root_expr = ctx.ast.ident(&ctx.mangler.local(root));
    walk(ctx, root_expr, path)
}

/// Adapt a path's access expression to the test's "testable" form, and
/// produce the comparison value (§4.8 "Then adapt the final expression").
fn compile_test_operands<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    root: &str,
    path: &Path,
    test: &Test,
) -> (A::Expr, A::Expr) {
    let accessed = compile_path(ctx, root, path);
    match test {
        Test::Constructor(tag) => {
            let ctor = ctx.ast.member(accessed, "ctor");
            let value = ctx.ast.str_lit(tag);
            (ctor, value)
        }
        Test::Literal(Literal::Char(c)) => {
            let unwrapped = ctx.ast.call(ctx.ast.member(accessed, "valueOf"), vec![]);
            let value = ctx.ast.str_lit(&c.to_string());
            (unwrapped, value)
        }
        Test::Literal(lit) => {
            let value = ctx.literals.encode(lit, ctx.ast);
            (accessed, value)
        }
    }
}

/// The label text for a given jump target within one case's `labelRoot`.
fn jump_label(label_root: &str, target: u32) -> String {
    format!("{label_root}_{target}")
}

/// Collect every `Leaf::Jump` target reachable in `decider`.
fn collect_jump_targets(decider: &Decider, out: &mut Vec<u32>) {
    match decider {
        Decider::Leaf(Leaf::Inline(_)) => {}
        Decider::Leaf(Leaf::Jump(target)) => out.push(*target),
        Decider::Chain { success, failure, .. } => {
            collect_jump_targets(success, out);
            collect_jump_targets(failure, out);
        }
        Decider::FanOut { edges, fallback, .. } => {
            for (_, subtree) in edges {
                collect_jump_targets(subtree, out);
            }
            collect_jump_targets(fallback, out);
        }
    }
}

/// Every jump target the decider `break`s to must have a matching branch in
/// `jumps`, or the emitted `break` would reference a label that is never
/// defined.
fn assert_jumps_resolved(decider: &Decider, jumps: &IndexMap<u32, Expr>) {
    let mut targets = Vec::new();
    collect_jump_targets(decider, &mut targets);
    for target in targets {
        invariant(jumps.contains_key(&target), || Bug::UnmatchedJumpTarget { target });
    }
}

fn compile_decider<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    decider: &Decider,
    scrutinee: &str,
    label_root: &str,
    tail: Option<&TailFrame<'_>>,
) -> Vec<A::Stmt> {
    match decider {
        Decider::Leaf(Leaf::Inline(e)) => compile_expr(ctx, e, tail).into_stmts(ctx.ast),
        Decider::Leaf(Leaf::Jump(target)) => {
            vec![ctx.ast.break_to(Some(&jump_label(label_root, *target)))]
        }
        Decider::Chain { tests, success, failure } => {
            let mut cond = None;
            for (path, test) in tests {
                let (lhs, rhs) = compile_test_operands(ctx, scrutinee, path, test);
                let check = ctx.ast.infix("===", lhs, rhs);
                cond = Some(match cond {
                    None => check,
                    Some(acc) => ctx.ast.infix("&&", acc, check),
                });
            }
            let cond = cond.expect("a Chain always carries at least one test");

            let success_stmts = compile_decider(ctx, success, scrutinee, label_root, tail);
            let failure_stmts = compile_decider(ctx, failure, scrutinee, label_root, tail);
            vec![ctx.ast.if_stmt(cond, success_stmts, Some(failure_stmts))]
        }
        Decider::FanOut { path, edges, fallback } => {
            // Every edge tests the same `path`, so the accessed-and-adapted
            // expression is identical across edges; only the first is
            // kept as the switch discriminant.
            let mut discriminant = None;
            let mut switch_cases = Vec::with_capacity(edges.len());
            for (test, subtree) in edges {
                let (lhs, rhs) = compile_test_operands(ctx, scrutinee, path, test);
                if discriminant.is_none() {
                    discriminant = Some(lhs);
                }
                let stmts = compile_decider(ctx, subtree, scrutinee, label_root, tail);
                switch_cases.push((rhs, stmts));
            }
            let discriminant = discriminant.unwrap_or_else(|| compile_path(ctx, scrutinee, path));
            let default = compile_decider(ctx, fallback, scrutinee, label_root, tail);
            vec![ctx.ast.switch_stmt(discriminant, switch_cases, default)]
        }
    }
}

pub fn compile_case<A: TargetAst>(
    ctx: &mut Context<'_, A>,
    scrutinee: &str,
    decider: &Decider,
    jumps: &IndexMap<u32, Expr>,
    tail: Option<&TailFrame<'_>>,
) -> Code<A> {
    assert_jumps_resolved(decider, jumps);

    let label_root = ctx.fresh();

    let mut stmts = compile_decider(ctx, decider, scrutinee, &label_root, tail);

    for (&target, branch) in jumps {
        let label = jump_label(&label_root, target);
        let wrapped = ctx.ast.do_while_false(stmts);
        let labeled = ctx.ast.labeled(&label, wrapped);

        stmts = vec![labeled];
        stmts.extend(compile_expr(ctx, branch, tail).into_stmts(ctx.ast));
    }

    Code::Block(stmts)
}
