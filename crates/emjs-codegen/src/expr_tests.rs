use emjs_core::{BranchProblem, Def, Expr, Literal, PortType};

use crate::config::Config;
use crate::context::Context;
use crate::expr::compile_expr;
use crate::reference::{
    ReferenceAst, ReferenceForeignCodec, ReferenceLiteralEncoder, ReferenceMangler,
    ReferenceRuntimeHelpers,
};
use crate::render::{render_expr, render_program};

fn local(name: &str) -> Expr {
    Expr::VarLocal(name.to_string())
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

fn expr_string(fx: &Fixture, ctx: &mut Context<'_, ReferenceAst>, e: &Expr) -> String {
    render_expr(&compile_expr(ctx, e, None).into_expr(&fx.ast))
}

#[test]
fn record_literal_becomes_an_object() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let rec = Expr::Record(vec![("x".to_string(), int(1)), ("y".to_string(), int(2))]);
    assert_eq!(expr_string(&fx, &mut ctx, &rec), "{x: 1, y: 2}");
}

#[test]
#[should_panic(expected = "duplicate field name `x`")]
fn a_record_with_a_duplicate_field_name_is_a_bug() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let rec = Expr::Record(vec![("x".to_string(), int(1)), ("x".to_string(), int(2))]);
    compile_expr(&mut ctx, &rec, None);
}

#[test]
fn update_calls_the_record_update_helper() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let update = Expr::Update(Box::new(local("r")), vec![("x".to_string(), int(9))]);
    assert_eq!(expr_string(&fx, &mut ctx, &update), "recordUpdate(r, {x: 9})");
}

#[test]
fn list_literal_wraps_an_array_in_the_list_helper() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let list = Expr::List(vec![int(1), int(2), int(3)]);
    assert_eq!(expr_string(&fx, &mut ctx, &list), "list([1, 2, 3])");
}

#[test]
fn constructor_becomes_a_tagged_object() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let ctor = Expr::Ctor("Just".to_string(), vec![int(1)]);
    assert_eq!(expr_string(&fx, &mut ctx, &ctor), "{ctor: \"Just\", _0: 1}");
}

#[test]
fn ctor_access_reads_the_positional_field() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let access = Expr::CtorAccess(Box::new(local("x")), 2);
    assert_eq!(expr_string(&fx, &mut ctx, &access), "x._2");
}

#[test]
fn cmd_and_sub_both_lower_to_the_effect_helper() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let cmd = Expr::Cmd("Task".to_string(), Box::new(int(0)));
    assert_eq!(expr_string(&fx, &mut ctx, &cmd), "effect(\"Task\")");
    let sub = Expr::Sub("Time".to_string(), Box::new(int(0)));
    assert_eq!(expr_string(&fx, &mut ctx, &sub), "effect(\"Time\")");
}

#[test]
fn ports_pair_the_name_with_an_encoder_or_decoder() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let out_port = Expr::OutgoingPort("log".to_string(), PortType("Json".to_string()));
    assert_eq!(expr_string(&fx, &mut ctx, &out_port), "outgoingPort(\"log\", encode$Json)");
    let in_port = Expr::IncomingPort("events".to_string(), PortType("Json".to_string()));
    assert_eq!(expr_string(&fx, &mut ctx, &in_port), "incomingPort(\"events\", decode$Json)");
}

#[test]
fn gl_shader_becomes_a_src_record() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let shader = Expr::GLShader("void main() {}".to_string());
    assert_eq!(expr_string(&fx, &mut ctx, &shader), "{src: \"void main() {}\"}");
}

#[test]
fn crash_with_a_branch_problem_carries_the_expected_patterns() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let problem = BranchProblem { expected_patterns: vec!["Just _".to_string(), "Nothing".to_string()] };
    let crash = Expr::Crash("Main".to_string(), "case".to_string(), Some(problem));
    assert_eq!(
        expr_string(&fx, &mut ctx, &crash),
        "crash(\"Main\", \"case\", [\"Just _\", \"Nothing\"])"
    );
}

#[test]
fn crash_without_a_branch_problem_omits_the_third_argument() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let crash = Expr::Crash("Main".to_string(), "todo".to_string(), None);
    assert_eq!(expr_string(&fx, &mut ctx, &crash), "crash(\"Main\", \"todo\")");
}

#[test]
fn let_bindings_declare_locals_before_the_body() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let let_expr = Expr::Let(
        vec![("a".to_string(), Def::Def(int(1)))],
        Box::new(local("a")),
    );
    let code = compile_expr(&mut ctx, &let_expr, None);
    let stmts = code.into_stmts(&fx.ast);
    assert_eq!(render_program(&stmts), "var a = 1;return a;");
}

#[test]
fn a_let_with_no_bindings_returns_the_body_unwrapped() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let let_expr = Expr::Let(vec![], Box::new(int(5)));
    let code = compile_expr(&mut ctx, &let_expr, None);
    assert_eq!(render_expr(&code.into_expr(&fx.ast)), "5");
}
