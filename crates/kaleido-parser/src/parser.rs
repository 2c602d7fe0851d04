//! Precedence-climbing parser for binary integer expressions.
//!
//! ```text
//! expression := operand (operator operand)*
//! operand    := Number
//! operator   := < | > | = | + | - | *
//! ```
//!
//! Operators of equal or lower priority than the one before them fold to the
//! left, so `1 + 2 - 3` becomes `((1 + 2) - 3)`. An operator with strictly
//! higher priority than its predecessor takes the predecessor's right operand
//! and the rest of the expression, so `1 + 2 * 3` becomes `(1 + (2 * 3))`.

use kaleido_syntax::ast::{Node, OperatorKind};
use kaleido_syntax::error::{Expected, ParseError};
use kaleido_syntax::token::{Token, TokenKind};

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Parses one expression from `tokens`, which must not contain spaces.
pub fn parse_expression<I>(tokens: I) -> ParseResult<Node>
where
    I: IntoIterator<Item = Token>,
{
    Parser::new(tokens).parse_expression()
}

/// Pulls tokens one at a time; nothing is buffered or replayed.
pub struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new<T>(tokens: T) -> Self
    where
        T: IntoIterator<Item = Token, IntoIter = I>,
    {
        Self {
            tokens: tokens.into_iter(),
        }
    }

    /// Consumes the whole token stream and returns the expression tree.
    pub fn parse_expression(mut self) -> ParseResult<Node> {
        let first = self.tokens.next().ok_or(ParseError::EmptyExpression)?;
        let left = Self::operand(first)?;
        let node = match self.next_pair()? {
            None => left,
            Some((operator, right)) => self.climb(left, operator, right)?,
        };
        tracing::debug!(root = node.kind_name(), "parsed expression");
        Ok(node)
    }

    /// Folds `left operator right` against whatever follows.
    ///
    /// Equal or lower priority lookahead loops; strictly higher priority
    /// recurses, so stack depth follows the number of priority increases
    /// rather than the length of the expression.
    fn climb(
        &mut self,
        mut left: Node,
        mut operator: OperatorKind,
        mut right: Node,
    ) -> ParseResult<Node> {
        loop {
            let Some((next_operator, next_right)) = self.next_pair()? else {
                return Ok(Node::binary(operator, left, right));
            };
            if next_operator.priority() > operator.priority() {
                tracing::trace!(%operator, %next_operator, "climb");
                let priority_right = self.climb(right, next_operator, next_right)?;
                return Ok(Node::binary(operator, left, priority_right));
            }
            tracing::trace!(%operator, %next_operator, "fold left");
            left = Node::binary(operator, left, right);
            operator = next_operator;
            right = next_right;
        }
    }

    /// Reads an operator and the operand after it, or `None` at end of input.
    fn next_pair(&mut self) -> ParseResult<Option<(OperatorKind, Node)>> {
        let Some(token) = self.tokens.next() else {
            return Ok(None);
        };
        let Some(operator) = OperatorKind::from_token(&token.kind) else {
            return Err(ParseError::UnexpectedToken {
                expected: Expected::Operator,
                got: token.kind,
                position: token.position,
            });
        };
        let Some(operand) = self.tokens.next() else {
            return Err(ParseError::UnexpectedEndOfExpression {
                operator,
                position: token.position,
            });
        };
        Ok(Some((operator, Self::operand(operand)?)))
    }

    fn operand(token: Token) -> ParseResult<Node> {
        match token.kind {
            TokenKind::Number(n) => Ok(Node::Literal(n)),
            got => Err(ParseError::UnexpectedToken {
                expected: Expected::Number,
                got,
                position: token.position,
            }),
        }
    }
}
