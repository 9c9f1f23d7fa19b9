use emjs_core::{Def, Expr, Literal, PortType, ProgramKind};

use crate::config::Config;
use crate::context::Context;
use crate::program::{compile_program, compile_top_level_def};
use crate::reference::{
    ReferenceAst, ReferenceForeignCodec, ReferenceLiteralEncoder, ReferenceMangler,
    ReferenceRuntimeHelpers,
};
use crate::render::render_expr;

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
fn top_level_def_becomes_a_module_scoped_var() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let def = Def::Def(int(42));
    let stmt = compile_top_level_def(&mut ctx, "Main", "answer", &def);
    assert_eq!(crate::render::render_program(std::slice::from_ref(&stmt)), "var Main$answer = 42;");
}

#[test]
fn vdom_program_runs_through_static_program() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let out = compile_program(&mut ctx, &ProgramKind::VDom, &int(1));
    assert_eq!(render_expr(&out), "staticProgram(1)");
}

#[test]
fn no_flags_program_is_invoked_with_no_arguments() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let out = compile_program(&mut ctx, &ProgramKind::NoFlags, &int(1));
    assert_eq!(render_expr(&out), "1()");
}

#[test]
fn flags_program_decodes_its_flags_argument() {
    let fx = Fixture::new();
    let mut ctx = fx.ctx();
    let out = compile_program(&mut ctx, &ProgramKind::Flags(PortType("Json".to_string())), &int(1));
    assert_eq!(render_expr(&out), "1(decode$Json)");
}
