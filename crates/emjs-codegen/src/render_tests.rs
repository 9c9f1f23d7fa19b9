use crate::collaborators::TargetAst;
use crate::reference::ReferenceAst;
use crate::render::{render_expr, render_program};

#[test]
fn conditional_renders_as_a_parenthesized_ternary() {
    let ast = ReferenceAst;
    let expr = ast.conditional(ast.bool_lit(true), ast.int_lit(1), ast.int_lit(2));
    assert_eq!(render_expr(&expr), "(true ? 1 : 2)");
}

#[test]
fn switch_renders_cases_then_a_default() {
    let ast = ReferenceAst;
    let stmt = ast.switch_stmt(
        ast.ident("tag"),
        vec![(ast.int_lit(0), vec![ast.return_stmt(ast.str_lit("zero"))])],
        vec![ast.return_stmt(ast.str_lit("other"))],
    );
    assert_eq!(
        render_program(std::slice::from_ref(&stmt)),
        "switch (tag) {case 0: return \"zero\";default: return \"other\";}"
    );
}

#[test]
fn labeled_while_loop_round_trips() {
    let ast = ReferenceAst;
    let loop_stmt = ast.while_true(vec![ast.break_to(Some("outer"))]);
    let labeled = ast.labeled("outer", loop_stmt);
    assert_eq!(
        render_program(std::slice::from_ref(&labeled)),
        "outer: while (true) {break outer;}"
    );
}

#[test]
fn iife_wraps_a_statement_list_in_a_call_expression() {
    let ast = ReferenceAst;
    let expr = ast.iife(vec![ast.return_stmt(ast.int_lit(1))]);
    assert_eq!(render_expr(&expr), "(function(){return 1;})()");
}
