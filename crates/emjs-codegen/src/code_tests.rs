use crate::code::Code;
use crate::collaborators::TargetAst;
use crate::reference::ReferenceAst;

#[test]
fn expr_into_stmts_wraps_in_return() {
    let ast = ReferenceAst;
    let code: Code<ReferenceAst> = Code::Expr(ast.int_lit(1));
    let stmts = code.into_stmts(&ast);
    assert_eq!(stmts.len(), 1);
    assert_eq!(crate::render::render_program(&stmts), "return 1;");
}

#[test]
fn block_into_stmts_is_identity() {
    let ast = ReferenceAst;
    let stmts = vec![ast.return_stmt(ast.int_lit(1)), ast.return_stmt(ast.int_lit(2))];
    let code: Code<ReferenceAst> = Code::Block(stmts);
    let out = code.into_stmts(&ast);
    assert_eq!(out.len(), 2);
}

#[test]
fn single_stmt_block_unwraps() {
    let ast = ReferenceAst;
    let stmts = vec![ast.expr_stmt(ast.int_lit(1))];
    let code: Code<ReferenceAst> = Code::Block(stmts);
    let stmt = code.into_stmt(&ast);
    assert_eq!(crate::render::render_program(std::slice::from_ref(&stmt)), "1;");
}

#[test]
fn multi_stmt_block_wraps_in_braces() {
    let ast = ReferenceAst;
    let stmts = vec![ast.expr_stmt(ast.int_lit(1)), ast.expr_stmt(ast.int_lit(2))];
    let code: Code<ReferenceAst> = Code::Block(stmts);
    let stmt = code.into_stmt(&ast);
    assert_eq!(crate::render::render_program(std::slice::from_ref(&stmt)), "{1;2;}");
}

#[test]
fn block_into_expr_wraps_in_iife() {
    let ast = ReferenceAst;
    let stmts = vec![ast.return_stmt(ast.int_lit(1))];
    let code: Code<ReferenceAst> = Code::Block(stmts);
    let expr = code.into_expr(&ast);
    assert_eq!(crate::render::render_expr(&expr), "(function(){return 1;})()");
}

#[test]
fn expr_into_expr_is_identity() {
    let ast = ReferenceAst;
    let code: Code<ReferenceAst> = Code::Expr(ast.int_lit(7));
    assert_eq!(crate::render::render_expr(&code.into_expr(&ast)), "7");
}
