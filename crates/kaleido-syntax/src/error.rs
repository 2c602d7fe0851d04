//! Error types shared by the Kaleido front end.
//!
//! Lexing never fails: characters the lexer does not recognize travel through
//! the token stream as [`TokenKind::Invalid`](crate::TokenKind::Invalid) and
//! later stages decide how to react. Parsing and rendering do fail, and their
//! errors carry enough context (the offending token kind and its position) to
//! point at the source.
//!
//! # Examples
//!
//! ```rust
//! use kaleido_syntax::{Expected, ParseError, Position, TokenKind};
//!
//! let err = ParseError::UnexpectedToken {
//!     expected: Expected::Number,
//!     got: TokenKind::Plus,
//!     position: Position::new("calc.kal"),
//! };
//!
//! assert_eq!(err.to_string(), "Unexpected token: expected number, got '+'");
//! assert_eq!(err.position().map(|p| p.column), Some(0));
//! ```

use std::fmt;

use thiserror::Error;

use crate::ast::OperatorKind;
use crate::position::Position;
use crate::token::TokenKind;

/// The token category a parser rule was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// An integer operand
    Number,
    /// One of `< > = + - *`
    Operator,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Number => f.write_str("number"),
            Expected::Operator => f.write_str("operator"),
        }
    }
}

/// Errors raised by the expression parser.
///
/// Every variant aborts the current parse; no partial tree is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token stream held nothing to parse
    #[error("Empty expression")]
    EmptyExpression,

    /// A token of the wrong category appeared
    ///
    /// **Example:** `1 + def` (keyword where a number belongs), `1 2` (number
    /// where an operator belongs)
    #[error("Unexpected token: expected {expected}, got '{got}'")]
    UnexpectedToken {
        expected: Expected,
        got: TokenKind,
        position: Position,
    },

    /// An operator had no right-hand operand
    ///
    /// **Example:** `3 + 3 -`
    #[error("Unexpected end of expression after '{operator}'")]
    UnexpectedEndOfExpression {
        operator: OperatorKind,
        position: Position,
    },
}

impl ParseError {
    /// Source location of the offending token, when there is one.
    pub fn position(&self) -> Option<&Position> {
        match self {
            ParseError::EmptyExpression => None,
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEndOfExpression { position, .. } => Some(position),
        }
    }
}

/// Errors raised by the S-expression printer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The node has no textual form yet
    #[error("Unsupported node: {kind} cannot be rendered")]
    UnsupportedNode { kind: &'static str },
}

/// Any failure of the front end.
///
/// Lets callers that drive the whole pipeline use one error type and `?`.
///
/// ```rust
/// use kaleido_syntax::{Error, ParseError, Result};
///
/// fn pipeline() -> Result<()> {
///     Err(ParseError::EmptyExpression)?
/// }
///
/// let err = pipeline().unwrap_err();
/// assert!(matches!(err, Error::Parse(ParseError::EmptyExpression)));
/// assert_eq!(err.to_string(), "Empty expression");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl Error {
    pub fn position(&self) -> Option<&Position> {
        match self {
            Error::Parse(e) => e.position(),
            Error::Render(_) => None,
        }
    }
}

/// A specialized `Result` type for Kaleido operations.
pub type Result<T> = std::result::Result<T, Error>;
