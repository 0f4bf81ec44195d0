//! Operator tables for the binary precedence levels.

use brace_ir::{BinaryOp, LogicalOp, TokenKind};

pub(super) const LOGICAL_OR: &[TokenKind] = &[TokenKind::PipePipe];
pub(super) const LOGICAL_AND: &[TokenKind] = &[TokenKind::AmpAmp];
pub(super) const BIT_OR: &[TokenKind] = &[TokenKind::Pipe];
pub(super) const BIT_XOR: &[TokenKind] = &[TokenKind::Caret];
pub(super) const BIT_AND: &[TokenKind] = &[TokenKind::Amp];
pub(super) const EQUALITY: &[TokenKind] = &[TokenKind::EqEq, TokenKind::NotEq];
pub(super) const RELATIONAL: &[TokenKind] = &[
    TokenKind::Lt,
    TokenKind::LtEq,
    TokenKind::Gt,
    TokenKind::GtEq,
];
pub(super) const SHIFT: &[TokenKind] = &[TokenKind::Shl, TokenKind::Shr];
pub(super) const ADDITIVE: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];
pub(super) const MULTIPLICATIVE: &[TokenKind] =
    &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent];

/// An infix operator: strict or short-circuiting.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum InfixOp {
    Binary(BinaryOp),
    Logical(LogicalOp),
}

/// Map an infix token to its operator.
pub(super) fn infix_op(kind: TokenKind) -> Option<InfixOp> {
    LogicalOp::from_token(kind)
        .map(InfixOp::Logical)
        .or_else(|| BinaryOp::from_token(kind).map(InfixOp::Binary))
}
