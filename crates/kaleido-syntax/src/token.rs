//! Token definitions for the Kaleido expression language.
//!
//! Tokens are the smallest meaningful units of Kaleido source code. The lexer
//! produces one token per single-character symbol, one per line break and one
//! per maximal run of digits or word characters. Whitespace is kept in the
//! stream as [`TokenKind::Space`]; consumers that do not care about it filter
//! it out before parsing.
//!
//! # Token Categories
//!
//! - **Literals**: integer numbers (`42`) and words (`foo`, `_tmp`, `@x1`)
//! - **Keywords**: `def`, `if`, `else`, `then`, `extern`
//! - **Operators**: `<`, `>`, `=`, `+`, `-`, `*`
//! - **Punctuation**: `(`, `)`, `#`, `'`, `.`, `,`
//! - **Layout**: spaces and line breaks
//! - **Anomalies**: any other character, carried as [`TokenKind::Invalid`]
//!
//! # Examples
//!
//! ```rust
//! use kaleido_syntax::{BigInt, Position, Token, TokenKind};
//!
//! let number = Token {
//!     kind: TokenKind::Number(BigInt::from(42)),
//!     position: Position::new("calc.kal"),
//!     width: 2,
//! };
//!
//! assert_eq!(number.kind.name(), "NUMBER");
//! assert_eq!(number.kind.to_string(), "42");
//! ```

use std::fmt;

use num_bigint::BigInt;

use crate::position::Position;

/// Token types that can be produced by the Kaleido lexer.
///
/// Only [`Number`](TokenKind::Number), [`Word`](TokenKind::Word) and
/// [`Invalid`](TokenKind::Invalid) carry a payload; every other kind is fully
/// described by its variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Layout ===

    /// A single space character
    Space,

    /// A line break `\n`
    Eol,

    // === Literals ===

    /// An integer literal, exact for any number of digits
    ///
    /// Examples: `0`, `42`, `007`
    Number(BigInt),

    /// A word that is not a reserved keyword
    ///
    /// Examples: `foo`, `x1`, `_tmp`, `@label`
    Word(String),

    // === Keywords ===

    /// The `def` keyword - starts a function definition
    Def,

    /// The `if` keyword
    If,

    /// The `else` keyword
    Else,

    /// The `then` keyword
    Then,

    /// The `extern` keyword - declares an external function
    Extern,

    // === Operators ===

    /// Less-than operator `<`
    SmallerThan,

    /// Greater-than operator `>`
    GreaterThan,

    /// Equality operator `=`
    Equals,

    /// Addition operator `+`
    Plus,

    /// Subtraction operator `-`
    Minus,

    /// Multiplication operator `*`
    Asterisk,

    // === Punctuation ===

    /// Hash `#`
    Hash,

    /// Left parenthesis `(`
    OpenBracket,

    /// Right parenthesis `)`
    ClosedBracket,

    /// Single quote `'`
    SingleQuote,

    /// Full stop `.`
    Point,

    /// Comma separator `,`
    Comma,

    // === Anomalies ===

    /// A character the lexer does not recognize
    ///
    /// Lexing does not stop on these; downstream stages decide what to do.
    Invalid(char),
}

impl TokenKind {
    /// Upper-case name of the kind, as shown in token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Space => "SPACE",
            TokenKind::Eol => "EOL",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::Word(_) => "WORD",
            TokenKind::Def => "DEF",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Then => "THEN",
            TokenKind::Extern => "EXTERN",
            TokenKind::SmallerThan => "SMALLER_THEN",
            TokenKind::GreaterThan => "GREATER_THEN",
            TokenKind::Equals => "EQUALS",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Hash => "HASH",
            TokenKind::OpenBracket => "OPEN_BRACKET",
            TokenKind::ClosedBracket => "CLOSED_BRACKET",
            TokenKind::SingleQuote => "SINGLE_QUOTE",
            TokenKind::Point => "POINT",
            TokenKind::Comma => "COMMA",
            TokenKind::Invalid(_) => "INVALID",
        }
    }

    /// Whether this kind is a reserved keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Def | TokenKind::If | TokenKind::Else | TokenKind::Then | TokenKind::Extern
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Space => f.write_str("space"),
            TokenKind::Eol => f.write_str("newline"),
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Word(w) => f.write_str(w),
            TokenKind::Def => f.write_str("def"),
            TokenKind::If => f.write_str("if"),
            TokenKind::Else => f.write_str("else"),
            TokenKind::Then => f.write_str("then"),
            TokenKind::Extern => f.write_str("extern"),
            TokenKind::SmallerThan => f.write_str("<"),
            TokenKind::GreaterThan => f.write_str(">"),
            TokenKind::Equals => f.write_str("="),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Asterisk => f.write_str("*"),
            TokenKind::Hash => f.write_str("#"),
            TokenKind::OpenBracket => f.write_str("("),
            TokenKind::ClosedBracket => f.write_str(")"),
            TokenKind::SingleQuote => f.write_str("'"),
            TokenKind::Point => f.write_str("."),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Invalid(c) => write!(f, "{}", c.escape_debug()),
        }
    }
}

/// A token with its source location.
///
/// # Fields
///
/// - `kind`: the type and payload of the token
/// - `position`: where the lexeme starts; an independent copy of the lexer's
///   cursor taken when the token was emitted
/// - `width`: how many source characters the lexeme covers
///
/// The widths of all tokens lexed from a source add up to the number of
/// characters in that source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type and semantic content of this token
    pub kind: TokenKind,

    /// Start of the lexeme in the source
    pub position: Position,

    /// Length of the lexeme in characters
    pub width: usize,
}

impl Token {
    /// Builds a token from its parts.
    pub fn new(kind: TokenKind, position: Position, width: usize) -> Self {
        Self {
            kind,
            position,
            width,
        }
    }

    /// Whether this token is a [`TokenKind::Space`].
    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }
}
