//! Token kinds for Brace.

use std::fmt;

/// Token kinds for Brace.
///
/// Literal payloads live on [`Token`](super::Token), so the kind itself is a
/// plain `Copy` discriminant that the parser can match on cheaply.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,

    // Arithmetic
    Percent,
    Slash,
    Star,
    Plus,
    Minus,

    // Comparison
    Gt,
    GtEq,
    Lt,
    LtEq,
    EqEq,
    NotEq,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    PlusPlus,
    MinusMinus,

    // Logical
    Bang,
    AmpAmp,
    PipePipe,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,

    // Literals
    Integer,
    String,

    // Type keywords
    IntType,
    StrType,
    VoidType,
    FncType,

    // Keywords
    Print,
    While,
    If,
    Else,
    For,
    Function,
    Return,
    Break,
    Continue,

    Ident,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Percent => "%",
            Self::Slash => "/",
            Self::Star => "*",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::Eq => "=",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::StarEq => "*=",
            Self::SlashEq => "/=",
            Self::PercentEq => "%=",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::Bang => "!",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::Amp => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Integer => "integer literal",
            Self::String => "string literal",
            Self::IntType => "int",
            Self::StrType => "str",
            Self::VoidType => "void",
            Self::FncType => "fnc",
            Self::Print => "print",
            Self::While => "while",
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::Function => "function",
            Self::Return => "return",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Ident => "identifier",
        }
    }

    /// Check if this kind names a declarable type (`int`, `str`, `void`, `fnc`).
    #[inline]
    pub const fn is_type_keyword(self) -> bool {
        matches!(
            self,
            Self::IntType | Self::StrType | Self::VoidType | Self::FncType
        )
    }

    /// Check if this kind is an assignment operator (`=`, `+=`, ...).
    #[inline]
    pub const fn is_assign_op(self) -> bool {
        matches!(
            self,
            Self::Eq
                | Self::PlusEq
                | Self::MinusEq
                | Self::StarEq
                | Self::SlashEq
                | Self::PercentEq
        )
    }

    /// Check if this kind is `++` or `--`.
    #[inline]
    pub const fn is_step_op(self) -> bool {
        matches!(self, Self::PlusPlus | Self::MinusMinus)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
