//! Lexer for Brace using logos.
//!
//! Converts source text into an ordered `Vec<Token>`, tracking 0-based
//! line/column positions. Scanning stops at the first character no
//! sub-lexer accepts.
//!
//! # Sub-lexers
//!
//! `RawToken` lists one pattern per sub-lexer: string literal, integer
//! literal, operator/punctuation and identifier. logos always takes the
//! longest match, so `<=` wins over `<` and `&&` over `&` without any
//! ordering tricks. Identifier runs are reclassified through the keyword
//! table in [`keywords`].

mod keywords;
mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use brace_ir::{Literal, Position, Token, TokenKind};
use logos::Logos;
use tracing::{debug, trace};

/// Raw token from logos (before keyword resolution and literal decoding).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
enum RawToken {
    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    #[regex(r"[0-9]+")]
    Integer,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,

    #[token("%")]
    Percent,
    #[token("%=")]
    PercentEq,
    #[token("/")]
    Slash,
    #[token("/=")]
    SlashEq,
    #[token("*")]
    Star,
    #[token("*=")]
    StarEq,
    #[token("+")]
    Plus,
    #[token("+=")]
    PlusEq,
    #[token("++")]
    PlusPlus,
    #[token("-")]
    Minus,
    #[token("-=")]
    MinusEq,
    #[token("--")]
    MinusMinus,

    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token(">>")]
    Shr,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token("<<")]
    Shl,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,

    #[token("&&")]
    AmpAmp,
    #[token("&")]
    Amp,
    #[token("||")]
    PipePipe,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,

    // Identifier or keyword
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,
}

/// Streaming lexer state.
///
/// Line and column counters carry over between `feed` calls so that several
/// chunks of one source file get consistent positions; [`Lexer::clear`]
/// resets them.
#[derive(Debug, Default)]
pub struct Lexer {
    tokens: Vec<Token>,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lex `source` and append its tokens to the queue.
    ///
    /// On error nothing from `source` is appended and the line/column
    /// counters are rolled back, so the lexer is exactly as it was before
    /// the call.
    pub fn feed(&mut self, source: &str) -> Result<(), LexError> {
        let start = (self.line, self.column);
        let mut scanned = Vec::new();
        if let Err(err) = self.scan(source, &mut scanned) {
            (self.line, self.column) = start;
            return Err(err);
        }

        debug!(count = scanned.len(), "lexed source");
        self.tokens.append(&mut scanned);
        Ok(())
    }

    fn scan(&mut self, source: &str, scanned: &mut Vec<Token>) -> Result<(), LexError> {
        let mut raw = RawToken::lexer(source);
        let mut gap_start = 0;

        while let Some(result) = raw.next() {
            let span = raw.span();
            self.advance_over(&source[gap_start..span.start]);
            gap_start = span.end;

            let slice = raw.slice();
            let position = Position::new(self.line, self.column);

            let token = match result {
                Ok(kind) => convert_token(kind, slice, position)?,
                Err(()) => {
                    let ch = slice.chars().next().unwrap_or('\0');
                    return Err(LexError::unknown_token(ch, position));
                }
            };
            trace!(?token, "lexed");

            self.column += slice.chars().count();
            scanned.push(token);
        }
        self.advance_over(&source[gap_start..]);
        Ok(())
    }

    /// Tokens produced so far, in source order.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Move the token queue out, leaving it empty. Positions are kept.
    pub fn take_tokens(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.tokens)
    }

    /// Number of queued tokens.
    #[inline]
    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    /// Empty the queue and reset the line/column counters.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.line = 0;
        self.column = 0;
    }

    /// Current position of the scan head.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Update line/column over skipped whitespace.
    fn advance_over(&mut self, skipped: &str) {
        for ch in skipped.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }
}

/// Lex a whole source string from line 0, column 0.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new();
    lexer.feed(source)?;
    Ok(lexer.take_tokens())
}

/// Convert a raw token to a `Token`, resolving keywords and decoding literals.
fn convert_token(raw: RawToken, slice: &str, position: Position) -> Result<Token, LexError> {
    let kind = match raw {
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            return Ok(Token::new(TokenKind::String, slice, position)
                .with_literal(Literal::String(unescape_string(content))));
        }
        RawToken::Integer => {
            let value = slice
                .parse::<i64>()
                .map_err(|_| LexError::integer_overflow(slice, position))?;
            return Ok(Token::new(TokenKind::Integer, slice, position)
                .with_literal(Literal::Integer(value)));
        }
        RawToken::Word => keywords::lookup(slice).unwrap_or(TokenKind::Ident),

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,

        RawToken::Percent => TokenKind::Percent,
        RawToken::PercentEq => TokenKind::PercentEq,
        RawToken::Slash => TokenKind::Slash,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::Star => TokenKind::Star,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::PlusPlus => TokenKind::PlusPlus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::MinusMinus => TokenKind::MinusMinus,

        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Shr => TokenKind::Shr,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Shl => TokenKind::Shl,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Bang => TokenKind::Bang,

        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::Amp => TokenKind::Amp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Tilde => TokenKind::Tilde,
    };
    Ok(Token::new(kind, slice, position))
}

/// Process string escape sequences.
fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') | None => result.push('\\'),
                Some('"') => result.push('"'),
                Some('0') => result.push('\0'),
                Some(c) => {
                    result.push('\\');
                    result.push(c);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}
