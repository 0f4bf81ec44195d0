//! Reserved keyword table.
//!
//! The identifier sub-lexer matches a maximal `[A-Za-z_][A-Za-z0-9_]*` run;
//! the run is then looked up here and reclassified when it is reserved.
//! Keywords are 2-8 ASCII characters, so the length is checked first.

use brace_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    if !(2..=8).contains(&text.len()) {
        return None;
    }

    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "int" => Some(TokenKind::IntType),
            "str" => Some(TokenKind::StrType),
            "fnc" => Some(TokenKind::FncType),
            "for" => Some(TokenKind::For),
            _ => None,
        },
        4 => match text {
            "void" => Some(TokenKind::VoidType),
            "else" => Some(TokenKind::Else),
            _ => None,
        },
        5 => match text {
            "print" => Some(TokenKind::Print),
            "while" => Some(TokenKind::While),
            "break" => Some(TokenKind::Break),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        8 => match text {
            "function" => Some(TokenKind::Function),
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}
