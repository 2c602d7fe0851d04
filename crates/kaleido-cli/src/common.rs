use owo_colors::OwoColorize;

use kaleido_lexer::{without_spaces, Lexer};
use kaleido_parser::parse_expression;
use kaleido_printer::{describe_token, render};
use kaleido_syntax::error::{Error, Expected, ParseError, RenderError, Result};
use kaleido_syntax::token::TokenKind;

/// Lexes, drops spaces, parses and renders one expression.
///
/// Line breaks at the very end of `source` are ignored, so a file holding one
/// expression per the usual text-file convention parses cleanly. With
/// `echo_tokens` the filtered tokens are printed before parsing.
pub fn parse_and_render(source: &str, file_name: &str, echo_tokens: bool) -> Result<String> {
    let source = source.trim_end_matches(['\n', '\r']);
    let tokens: Vec<_> = without_spaces(Lexer::with_file_name(source, file_name)).collect();
    if echo_tokens {
        for token in &tokens {
            println!("{}", describe_token(token));
        }
    }
    let node = parse_expression(tokens)?;
    Ok(render(&node)?)
}

/// Heading shown before a diagnostic, by pipeline stage.
pub fn error_kind(err: &Error) -> &'static str {
    match err {
        Error::Parse(_) => "Parse error",
        Error::Render(_) => "Render error",
    }
}

pub fn render_error(kind: &str, source: &str, err: &Error) {
    eprintln!("{}: {}", kind.red().bold(), err.to_string().red());
    if let Some(pos) = err.position() {
        // Positions are 0-based; people count from 1.
        let (line, col) = (pos.line + 1, pos.column + 1);
        eprintln!("  --> {}, line {}, column {}", pos.file_name, line, col);
        if let Some(src_line) = source.lines().nth(pos.line) {
            let line_num_str = format!("{:3} | ", line);
            eprintln!("     |");
            eprintln!("{}{}", line_num_str.bright_black(), src_line);

            let mut marker = String::new();
            marker.push_str(&" ".repeat(line_num_str.len() + pos.column));
            marker.push('^');
            eprintln!("{}{}", marker.red(), " error here".red());
            eprintln!("     |");
        }
    }
    provide_error_suggestions(err);
}

pub fn provide_error_suggestions(err: &Error) {
    match err {
        Error::Parse(ParseError::EmptyExpression) => {
            eprintln!("{}", "Help: There is nothing to parse.".yellow());
            eprintln!("    {}", "Example: 5 + 10 * 2".bright_black());
        }
        Error::Parse(ParseError::UnexpectedEndOfExpression { operator, .. }) => {
            eprintln!(
                "{}",
                format!("Help: '{}' needs a number on its right.", operator).yellow()
            );
            eprintln!("    {}", "Add the missing operand or remove the trailing operator".bright_black());
        }
        Error::Parse(ParseError::UnexpectedToken { expected, got, .. }) => match (expected, got) {
            (_, TokenKind::Eol) => {
                eprintln!("{}", "Help: An expression must fit on a single line.".yellow());
            }
            (_, TokenKind::Invalid(c)) => {
                eprintln!(
                    "{}",
                    format!("Help: '{}' is not a recognized character.", c.escape_debug()).yellow()
                );
            }
            (Expected::Number, TokenKind::OpenBracket | TokenKind::ClosedBracket) => {
                eprintln!("{}", "Help: Brackets do not group expressions yet.".yellow());
                eprintln!("    {}", "'*' already binds tighter than '+', '-', '<', '>' and '='".bright_black());
            }
            (Expected::Number, TokenKind::Word(_)) => {
                eprintln!("{}", "Help: Only integer operands are supported.".yellow());
            }
            (Expected::Number, kind) if kind.is_keyword() => {
                eprintln!(
                    "{}",
                    format!("Help: '{}' is a reserved keyword, not a value.", kind).yellow()
                );
            }
            (Expected::Operator, _) => {
                eprintln!("{}", "Help: Operands must be separated by an operator.".yellow());
                eprintln!("    {}", "Operators: <  >  =  +  -  *".bright_black());
            }
            _ => {}
        },
        Error::Render(RenderError::UnsupportedNode { .. }) => {
            eprintln!("{}", "Help: Only numbers and binary operators can be printed.".yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaleido_syntax::Position;

    #[test]
    fn error_kind_follows_the_stage() {
        let parse = Error::Parse(ParseError::UnexpectedEndOfExpression {
            operator: kaleido_syntax::OperatorKind::Minus,
            position: Position::new("<repl>"),
        });
        assert_eq!(error_kind(&parse), "Parse error");
        let render = Error::Render(RenderError::UnsupportedNode {
            kind: "function call",
        });
        assert_eq!(error_kind(&render), "Render error");
    }

    #[test]
    fn oversized_literal_survives_the_pipeline() {
        assert_eq!(
            parse_and_render("99999999999999999999 + 1\n", "<expr>", false).unwrap(),
            "(99999999999999999999 + 1)"
        );
    }
}
