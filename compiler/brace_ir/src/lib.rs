//! Brace IR - tokens and syntax trees.
//!
//! This crate contains the data structures shared by every stage of the
//! Brace pipeline:
//! - `Position` for source locations (0-based line and column)
//! - `Token`, `TokenKind` and `Literal` for lexer output
//! - AST nodes (`Expr`, `Stmt`, `Program`, `FunctionDecl`)
//!
//! Nothing here depends on the lexer, parser or evaluator, so tools that
//! only need to inspect tokens or trees can depend on this crate alone.

pub mod ast;
mod position;
mod token;

pub use ast::{
    AssignOp, BinaryOp, Block, Declaration, Expr, FunctionDecl, LogicalOp, Param, Program,
    StepOp, Stmt, TypeName, UnaryOp,
};
pub use position::Position;
pub use token::{Literal, Token, TokenKind};
