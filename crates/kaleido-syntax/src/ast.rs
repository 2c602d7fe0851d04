//! AST (abstract syntax tree) types for the Kaleido language.

use std::fmt;

use num_bigint::BigInt;

use crate::token::TokenKind;

/// Binary operators understood by the expression parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    LessThan,
    GreaterThan,
    Equals,
    Minus,
    Plus,
    Asterisk,
}

impl OperatorKind {
    /// Maps an operator token to its operator, `None` for anything else.
    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::SmallerThan => Some(OperatorKind::LessThan),
            TokenKind::GreaterThan => Some(OperatorKind::GreaterThan),
            TokenKind::Equals => Some(OperatorKind::Equals),
            TokenKind::Minus => Some(OperatorKind::Minus),
            TokenKind::Plus => Some(OperatorKind::Plus),
            TokenKind::Asterisk => Some(OperatorKind::Asterisk),
            _ => None,
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn priority(self) -> u8 {
        match self {
            OperatorKind::Asterisk => 1,
            OperatorKind::LessThan
            | OperatorKind::GreaterThan
            | OperatorKind::Equals
            | OperatorKind::Minus
            | OperatorKind::Plus => 0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::LessThan => "<",
            OperatorKind::GreaterThan => ">",
            OperatorKind::Equals => "=",
            OperatorKind::Minus => "-",
            OperatorKind::Plus => "+",
            OperatorKind::Asterisk => "*",
        }
    }
}

impl TryFrom<&TokenKind> for OperatorKind {
    type Error = TokenKind;

    fn try_from(kind: &TokenKind) -> Result<Self, Self::Error> {
        OperatorKind::from_token(kind).ok_or_else(|| kind.clone())
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Expression tree nodes.
///
/// Every child is owned by exactly one parent. `UnaryOp`, `FunctionCall` and
/// `FunctionDefinition` are reserved for later stages of the language and are
/// never built by the expression parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(BigInt),
    BinaryOp {
        operator: OperatorKind,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnaryOp {
        operator: OperatorKind,
        operand: Box<Node>,
    },
    FunctionCall {
        name: String,
        args: Vec<Node>,
    },
    FunctionDefinition {
        name: String,
        params: Vec<String>,
        body: Box<Node>,
    },
}

impl Node {
    pub fn literal(value: impl Into<BigInt>) -> Self {
        Node::Literal(value.into())
    }

    pub fn binary(operator: OperatorKind, left: Node, right: Node) -> Self {
        Node::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Human-readable variant name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Literal(_) => "number",
            Node::BinaryOp { .. } => "binary operator",
            Node::UnaryOp { .. } => "unary operator",
            Node::FunctionCall { .. } => "function call",
            Node::FunctionDefinition { .. } => "function definition",
        }
    }
}
