use emjs_core::{Expr, Literal};

use crate::config::Config;
use crate::context::Context;
use crate::function::TailFrame;
use crate::ifchain::compile_if;
use crate::reference::{
    ReferenceAst, ReferenceForeignCodec, ReferenceLiteralEncoder, ReferenceMangler,
    ReferenceRuntimeHelpers,
};
use crate::render::{render_expr, render_program};

fn bool_lit(b: bool) -> Expr {
    Expr::Literal(Literal::Bool(b))
}

fn int(n: i64) -> Expr {
    Expr::Literal(Literal::Int(n))
}

struct Fixture {
    ast: ReferenceAst,
    mangler: ReferenceMangler,
    literals: ReferenceLiteralEncoder,
    foreign: ReferenceForeignCodec,
    runtime: ReferenceRuntimeHelpers,
    config: Config,
}

impl Fixture {
    fn new() -> Self {
        Self {
            ast: ReferenceAst,
            mangler: ReferenceMangler::new("_v"),
            literals: ReferenceLiteralEncoder,
            foreign: ReferenceForeignCodec,
            runtime: ReferenceRuntimeHelpers,
            config: Config::default(),
        }
    }

    fn ctx(&self) -> Context<'_, ReferenceAst> {
        Context::new(&self.ast, &self.mangler, &self.literals, &self.foreign, &self.runtime, &self.config)
    }
}

#[test]
fn a_literal_true_branch_becomes_the_default_and_drops_the_rest() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let branches = vec![(bool_lit(false), int(1)), (bool_lit(true), int(99))];
    let finally = int(2);
    let out = compile_if(&mut ctx, &branches, &finally, None);
    assert_eq!(render_expr(&out.into_expr(&fx.ast)), "(false ? 1 : 99)");
}

#[test]
fn two_way_if_becomes_a_single_ternary() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let branches = vec![(bool_lit(true), int(1))];
    let finally = int(2);
    let out = compile_if(&mut ctx, &branches, &finally, None);
    assert_eq!(render_expr(&out.into_expr(&fx.ast)), "1");
}

#[test]
fn nested_else_if_crushes_into_one_flat_chain() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let branches = vec![(bool_lit(false), int(1))];
    let inner = Expr::If(vec![(bool_lit(false), int(2))], Box::new(int(3)));
    let out = compile_if(&mut ctx, &branches, &inner, None);
    assert_eq!(render_expr(&out.into_expr(&fx.ast)), "(false ? 1 : (false ? 2 : 3))");
}

#[test]
fn a_block_branch_forces_statement_form() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let arg_names = vec!["n".to_string()];
    let frame = TailFrame { name: "loop", arg_names: &arg_names, label: "loop".to_string() };
    let branches = vec![(bool_lit(false), Expr::TailCall("loop".into(), arg_names.clone(), vec![int(1)]))];
    let finally = int(0);
    let out = compile_if(&mut ctx, &branches, &finally, Some(&frame));
    assert!(out.is_block());
    let stmts = out.into_stmts(&fx.ast);
    assert_eq!(render_program(&stmts), "if (false) {var _v0 = 1;n = _v0;continue loop;} else {return 0;}");
}
