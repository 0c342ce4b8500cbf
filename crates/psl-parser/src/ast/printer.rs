//! Diagnostic tree dump.
//!
//! Renders the tree as indented text, one construct per line. The output is
//! for debugging and tooling only; it does not round-trip. Recursion depth
//! follows expression nesting, which realistic sources keep shallow.

use std::fmt::Write;

use super::decl::{Function, Param, Source};
use super::expr::Expr;
use super::stmt::{Block, Stmt};

/// Render a parsed tree as an indented text dump.
pub fn dump(source: &Source<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "AST Source ({} functions):", source.functions.len());
    for function in source.functions {
        write_function(&mut out, function, 1);
    }

    out
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

fn write_function(out: &mut String, function: &Function<'_>, level: usize) {
    indent(out, level);
    let _ = writeln!(
        out,
        "Function {} ({}){}:",
        function.name,
        if function.params.is_empty() {
            "no parameters"
        } else {
            "parameters"
        },
        if function.is_entry_point { " [main]" } else { "" },
    );

    for param in function.params {
        write_param(out, param, level + 1);
    }

    write_block(out, &function.body, level + 1);
}

fn write_param(out: &mut String, param: &Param<'_>, level: usize) {
    indent(out, level);
    let _ = writeln!(
        out,
        "Parameter {}{}",
        param.name,
        if param.exportable { " (export)" } else { "" },
    );
}

fn write_block(out: &mut String, block: &Block<'_>, level: usize) {
    indent(out, level);
    let _ = writeln!(out, "Block ({} statements):", block.stmts.len());

    for stmt in block.stmts {
        write_stmt(out, stmt, level + 1);
    }
}

fn write_stmt(out: &mut String, stmt: &Stmt<'_>, level: usize) {
    match stmt {
        Stmt::Return(ret) => {
            indent(out, level);
            out.push_str("Return:\n");
            write_expr(out, &ret.value, level + 1);
        }
        Stmt::Assign(assign) => {
            indent(out, level);
            out.push_str("Assignment:\n");

            indent(out, level + 1);
            out.push_str("LHS:\n");
            indent(out, level + 2);
            let _ = writeln!(out, "Variable: {}", assign.target);

            indent(out, level + 1);
            out.push_str("RHS:\n");
            write_expr(out, &assign.value, level + 2);
        }
    }
}

fn write_expr(out: &mut String, expr: &Expr<'_>, level: usize) {
    indent(out, level);

    match expr {
        Expr::Literal(lit) => {
            let _ = writeln!(out, "Literal: {:.6}", lit.value);
        }
        Expr::Variable(var) => {
            let _ = writeln!(out, "Variable: {}", var.name);
        }
        Expr::Binary(bin) => {
            let _ = writeln!(out, "Binary Operation ({}):", bin.op);
            write_expr(out, &bin.left, level + 1);
            write_expr(out, &bin.right, level + 1);
        }
        Expr::Unary(un) => {
            let _ = writeln!(out, "Unary Operation ({}):", un.op);
            write_expr(out, &un.operand, level + 1);
        }
        Expr::Call(call) => {
            let _ = writeln!(out, "Call {} ({} arguments):", call.name, call.args.len());
            for arg in call.args {
                write_expr(out, arg, level + 1);
            }
        }
    }
}
