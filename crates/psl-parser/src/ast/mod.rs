//! AST node model and parser for PSL.
//!
//! Nodes are allocated in an [`Arena`](crate::arena::Arena) and child lists
//! are arena slices, so the whole tree shares one lifetime and is released
//! by dropping the arena. Name strings borrow the source buffer.

pub mod decl;
pub mod expr;
pub mod node;
pub mod ops;
pub mod parser;
pub mod printer;
pub mod stmt;
pub mod visitor;

mod expr_parser;
mod stmt_parser;

pub use decl::{Function, Param, Source};
pub use expr::{BinaryExpr, CallExpr, Expr, LiteralExpr, UnaryExpr, VariableExpr};
pub use node::Ident;
pub use ops::{BinaryOp, UnaryOp};
pub use parser::Parser;
pub use stmt::{AssignStmt, Block, ReturnStmt, Stmt};
pub use visitor::{walk, NodeRef};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    const PROGRAM: &str = "\
f32 brightness(f32 x) {
    return x * 2;
}

main shade(export f32 color) {
    color = brightness(color) + 0.1;
    return color;
}
";

    #[test]
    fn end_to_end_program_shape() {
        let arena = Arena::new();
        let source = Parser::parse(PROGRAM, &arena).unwrap();

        assert_eq!(source.functions.len(), 2);

        let brightness = &source.functions[0];
        assert_eq!(brightness.name.name, "brightness");
        assert!(!brightness.is_entry_point);
        assert_eq!(brightness.params.len(), 1);
        assert_eq!(brightness.body.stmts.len(), 1);

        let shade = &source.functions[1];
        assert!(shade.is_entry_point);
        assert!(shade.params[0].exportable);
        assert_eq!(shade.body.stmts.len(), 2);

        let Stmt::Assign(assign) = &shade.body.stmts[0] else {
            panic!("expected assignment");
        };
        assert_eq!(assign.target.name, "color");
        let Expr::Binary(add) = assign.value else {
            panic!("expected binary expression");
        };
        assert_eq!(add.op, BinaryOp::Add);
        assert!(matches!(add.left, Expr::Call(call) if call.name.name == "brightness"));
    }

    #[test]
    fn names_borrow_the_source() {
        let arena = Arena::new();
        let source_text = String::from("main entry(f32 p) { return p; }");
        let tree = Parser::parse(&source_text, &arena).unwrap();

        let name = tree.functions[0].name.name;
        // Zero-copy: the name points into the original buffer.
        assert!(std::ptr::eq(name.as_ptr(), source_text[5..].as_ptr()));
    }

    #[test]
    fn partial_trees_stay_in_the_arena_on_failure() {
        let arena = Arena::new();
        // The first function parses before the second one fails; its nodes
        // remain allocated until the arena drops.
        let before = arena.allocated_bytes();
        let result = Parser::parse("main entry() { x = 1; } f32 () {}", &arena);
        assert!(result.is_err());
        assert!(arena.allocated_bytes() > before);
    }
}
