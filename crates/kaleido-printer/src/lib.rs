//! Text renderings of Kaleido syntax: S-expressions for trees and one-line
//! descriptions for tokens.

use kaleido_syntax::ast::{Node, OperatorKind};
use kaleido_syntax::error::RenderError;
use kaleido_syntax::token::{Token, TokenKind};

/// Renders `node` fully parenthesized: `(left op right)` for every operator.
pub fn render(node: &Node) -> Result<String, RenderError> {
    let mut out = String::new();
    write_node(&mut out, node)?;
    Ok(out)
}

fn write_node(out: &mut String, node: &Node) -> Result<(), RenderError> {
    match node {
        Node::Literal(n) => out.push_str(&n.to_string()),
        Node::BinaryOp {
            operator,
            left,
            right,
        } => bin(out, *operator, left, right)?,
        Node::UnaryOp { .. } | Node::FunctionCall { .. } | Node::FunctionDefinition { .. } => {
            return Err(RenderError::UnsupportedNode {
                kind: node.kind_name(),
            })
        }
    }
    Ok(())
}

fn bin(out: &mut String, op: OperatorKind, a: &Node, b: &Node) -> Result<(), RenderError> {
    out.push('(');
    write_node(out, a)?;
    out.push(' ');
    out.push_str(op.symbol());
    out.push(' ');
    write_node(out, b)?;
    out.push(')');
    Ok(())
}

/// One-line description of a token, used by token dumps.
///
/// ```rust
/// use kaleido_lexer::lex;
/// use kaleido_printer::describe_token;
///
/// let token = lex("42").next().unwrap();
/// assert_eq!(
///     describe_token(&token),
///     "Type=NUMBER [file name: <input>;line number: 0;position on line: 0;] number=42"
/// );
/// ```
pub fn describe_token(token: &Token) -> String {
    let p = &token.position;
    let mut s = format!(
        "Type={} [file name: {};line number: {};position on line: {};]",
        token.kind.name(),
        p.file_name,
        p.line,
        p.column
    );
    match &token.kind {
        TokenKind::Word(w) => {
            s.push_str(" word=");
            s.push_str(w);
        }
        TokenKind::Number(n) => {
            s.push_str(" number=");
            s.push_str(&n.to_string());
        }
        TokenKind::Invalid(c) => {
            s.push_str(" char=");
            s.push_str(&c.escape_debug().to_string());
        }
        _ => {}
    }
    s
}
