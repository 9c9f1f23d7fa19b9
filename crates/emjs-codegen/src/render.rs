//! A deterministic text renderer for [`crate::reference::JsExpr`]/`JsStmt`.
//!
//! Used only by tests and by any caller that wants source text instead of
//! a tree (§6: the generator's own output is the tree, not text).

use crate::reference::{JsExpr, JsStmt};

pub fn render_program(stmts: &[JsStmt]) -> String {
    let mut out = String::new();
    for stmt in stmts {
        render_stmt(stmt, 0, &mut out);
    }
    out
}

pub fn render_expr(expr: &JsExpr) -> String {
    match expr {
        JsExpr::Ident(name) => name.clone(),
        JsExpr::Int(n) => n.to_string(),
        JsExpr::Float(n) => n.to_string(),
        JsExpr::Bool(b) => b.to_string(),
        JsExpr::Str(s) => format!("{s:?}"),
        JsExpr::Object(fields) => {
            let body = fields
                .iter()
                .map(|(k, v)| format!("{k}: {}", render_expr(v)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{body}}}")
        }
        JsExpr::Array(elems) => {
            let body = elems.iter().map(render_expr).collect::<Vec<_>>().join(", ");
            format!("[{body}]")
        }
        JsExpr::Member(obj, field) => format!("{}.{field}", render_expr(obj)),
        JsExpr::Index(obj, idx) => format!("{}[{}]", render_expr(obj), render_expr(idx)),
        JsExpr::Call(callee, args) => {
            let body = args.iter().map(render_expr).collect::<Vec<_>>().join(", ");
            format!("{}({body})", render_expr(callee))
        }
        JsExpr::Prefix(op, e) => format!("{op}{}", render_expr(e)),
        JsExpr::Infix(op, l, r) => format!("({} {op} {})", render_expr(l), render_expr(r)),
        JsExpr::Conditional(c, t, f) => {
            format!("({} ? {} : {})", render_expr(c), render_expr(t), render_expr(f))
        }
        JsExpr::Function(params, body) => {
            let mut out = format!("function({}){{", params.join(", "));
            for stmt in body {
                render_stmt(stmt, 0, &mut out);
            }
            out.push('}');
            out
        }
        JsExpr::Iife(body) => {
            let mut out = "(function(){".to_string();
            for stmt in body {
                render_stmt(stmt, 0, &mut out);
            }
            out.push_str("})()");
            out
        }
    }
}

fn render_block(stmts: &[JsStmt], indent: usize, out: &mut String) {
    out.push('{');
    for stmt in stmts {
        render_stmt(stmt, indent, out);
    }
    out.push('}');
}

fn render_stmt(stmt: &JsStmt, indent: usize, out: &mut String) {
    match stmt {
        JsStmt::Expr(e) => out.push_str(&format!("{};", render_expr(e))),
        JsStmt::Return(e) => out.push_str(&format!("return {};", render_expr(e))),
        JsStmt::VarDecl(name, init) => out.push_str(&format!("var {name} = {};", render_expr(init))),
        JsStmt::Assign(target, value) => {
            out.push_str(&format!("{} = {};", render_expr(target), render_expr(value)))
        }
        JsStmt::If(test, consequent, alternate) => {
            out.push_str(&format!("if ({}) ", render_expr(test)));
            render_block(consequent, indent, out);
            if let Some(alt) = alternate {
                out.push_str(" else ");
                render_block(alt, indent, out);
            }
        }
        JsStmt::WhileTrue(body) => {
            out.push_str("while (true) ");
            render_block(body, indent, out);
        }
        JsStmt::DoWhileFalse(body) => {
            out.push_str("do ");
            render_block(body, indent, out);
            out.push_str(" while (false);");
        }
        JsStmt::Labeled(label, stmt) => {
            out.push_str(&format!("{label}: "));
            render_stmt(stmt, indent, out);
        }
        JsStmt::Break(Some(label)) => out.push_str(&format!("break {label};")),
        JsStmt::Break(None) => out.push_str("break;"),
        JsStmt::Continue(label) => out.push_str(&format!("continue {label};")),
        JsStmt::Switch(disc, cases, default) => {
            out.push_str(&format!("switch ({}) {{", render_expr(disc)));
            for (test, body) in cases {
                out.push_str(&format!("case {}: ", render_expr(test)));
                for stmt in body {
                    render_stmt(stmt, indent, out);
                }
            }
            out.push_str("default: ");
            for stmt in default {
                render_stmt(stmt, indent, out);
            }
            out.push('}');
        }
        JsStmt::Block(stmts) => render_block(stmts, indent, out),
    }
}
