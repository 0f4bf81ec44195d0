//! Abstract syntax tree for Brace.
//!
//! The node set is closed: expressions in [`Expr`], statements in [`Stmt`],
//! and a [`Program`] root. The evaluator dispatches with one exhaustive
//! `match` per concern instead of a visitor hierarchy.

mod expr;
mod operators;
mod stmt;


pub use expr::Expr;
pub use operators::{AssignOp, BinaryOp, LogicalOp, StepOp, UnaryOp};
pub use stmt::{Block, Declaration, FunctionDecl, Param, Program, Stmt, TypeName};
