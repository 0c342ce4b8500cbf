//! Iterative whole-tree traversal.
//!
//! [`walk`] visits every node using an explicit work-list instead of
//! per-node recursion, so stack depth never depends on input size. Use it
//! for passes that must survive adversarially deep trees; the recursive
//! [`printer`](super::printer) is the diagnostic counterpart.

use super::decl::{Function, Param, Source};
use super::expr::Expr;
use super::stmt::{Block, Stmt};

/// A borrowed view of any node in the tree.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a, 'ast> {
    Source(&'a Source<'ast>),
    Function(&'a Function<'ast>),
    Param(&'a Param<'ast>),
    Block(&'a Block<'ast>),
    Stmt(&'a Stmt<'ast>),
    Expr(&'a Expr<'ast>),
}

/// Visit every node reachable from `source`.
///
/// Order is depth-first but otherwise unspecified; every node is visited
/// exactly once. The traversal never recurses.
pub fn walk<'a, 'ast>(source: &'a Source<'ast>, mut visit: impl FnMut(NodeRef<'a, 'ast>)) {
    let mut pending: Vec<NodeRef<'a, 'ast>> = vec![NodeRef::Source(source)];

    while let Some(node) = pending.pop() {
        visit(node);

        match node {
            NodeRef::Source(src) => {
                for function in src.functions {
                    pending.push(NodeRef::Function(function));
                }
            }
            NodeRef::Function(function) => {
                for param in function.params {
                    pending.push(NodeRef::Param(param));
                }
                pending.push(NodeRef::Block(&function.body));
            }
            NodeRef::Param(_) => {}
            NodeRef::Block(block) => {
                for stmt in block.stmts {
                    pending.push(NodeRef::Stmt(stmt));
                }
            }
            NodeRef::Stmt(stmt) => match stmt {
                Stmt::Return(ret) => pending.push(NodeRef::Expr(&ret.value)),
                Stmt::Assign(assign) => pending.push(NodeRef::Expr(&assign.value)),
            },
            NodeRef::Expr(expr) => match expr {
                Expr::Literal(_) | Expr::Variable(_) => {}
                Expr::Binary(bin) => {
                    pending.push(NodeRef::Expr(&bin.left));
                    pending.push(NodeRef::Expr(&bin.right));
                }
                Expr::Unary(un) => {
                    pending.push(NodeRef::Expr(&un.operand));
                }
                Expr::Call(call) => {
                    for arg in call.args {
                        pending.push(NodeRef::Expr(arg));
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::parser::Parser;
    use super::*;
    use crate::arena::Arena;

    #[test]
    fn visits_every_node_once() {
        let arena = Arena::new();
        let source = Parser::parse(
            "main entry(f32 a, export f32 b) { x = a + b; return f(x); }",
            &arena,
        )
        .unwrap();

        let mut sources = 0;
        let mut functions = 0;
        let mut params = 0;
        let mut blocks = 0;
        let mut stmts = 0;
        let mut exprs = 0;

        walk(&source, |node| match node {
            NodeRef::Source(_) => sources += 1,
            NodeRef::Function(_) => functions += 1,
            NodeRef::Param(_) => params += 1,
            NodeRef::Block(_) => blocks += 1,
            NodeRef::Stmt(_) => stmts += 1,
            NodeRef::Expr(_) => exprs += 1,
        });

        assert_eq!(sources, 1);
        assert_eq!(functions, 1);
        assert_eq!(params, 2);
        assert_eq!(blocks, 1);
        assert_eq!(stmts, 2);
        // a + b => 3, f(x) => 2
        assert_eq!(exprs, 5);
    }

    #[test]
    fn walk_survives_deep_trees() {
        // A chain long enough to overflow the stack if traversal recursed
        // per node.
        let arena = Arena::new();
        let chain = vec!["1"; 50_000].join("+");
        let program = format!("main entry() {{ return {chain}; }}");
        let source = Parser::parse(arena.alloc_str(&program), &arena).unwrap();

        let mut literals = 0;
        walk(&source, |node| {
            if let NodeRef::Expr(Expr::Literal(_)) = node {
                literals += 1;
            }
        });
        assert_eq!(literals, 50_000);

        drop(arena);
    }
}
