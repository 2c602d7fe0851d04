//! Kaleido lexer: converts source text into a lazy stream of positioned tokens.
pub mod classify;


use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

use kaleido_syntax::position::{Position, DEFAULT_FILE_NAME};
use kaleido_syntax::BigInt;
use kaleido_syntax::token::{Token, TokenKind};

/// Lexes `source`, naming it [`DEFAULT_FILE_NAME`] in token positions.
pub fn lex(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Drops [`TokenKind::Space`] tokens, leaving what the parser expects.
pub fn without_spaces<I>(tokens: I) -> impl Iterator<Item = Token>
where
    I: IntoIterator<Item = Token>,
{
    tokens.into_iter().filter(|t| !t.is_space())
}

/// Single-pass character scanner that yields tokens on demand.
///
/// Never fails: unknown characters come out as [`TokenKind::Invalid`]. The
/// cursor is private, and each token gets its own copy of it.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    cursor: Position,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over the given source string.
    pub fn new(input: &'a str) -> Self {
        Self::with_file_name(input, DEFAULT_FILE_NAME)
    }

    /// Create a lexer whose token positions carry `file_name`.
    pub fn with_file_name(input: &'a str, file_name: impl Into<String>) -> Self {
        Self {
            chars: input.chars().peekable(),
            cursor: Position::new(file_name),
        }
    }

    /// Tokenize the rest of the input eagerly.
    pub fn tokenize(self) -> Vec<Token> {
        self.collect()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        self.advance();
        let token = Token::new(kind, self.cursor.clone(), 1);
        self.cursor.advance_column(1);
        token
    }

    fn read_newline(&mut self) -> Token {
        self.advance();
        let token = Token::new(TokenKind::Eol, self.cursor.clone(), 1);
        self.cursor.advance_line();
        token
    }

    fn read_number(&mut self) -> Token {
        let start = self.cursor.clone();
        let mut value = BigInt::default();
        let mut width = 0;
        while let Some(c) = self.peek() {
            let Some(digit) = c.to_digit(10) else {
                break;
            };
            self.advance();
            width += 1;
            value = value * 10u32 + digit;
        }
        self.cursor.advance_column(width);
        Token::new(TokenKind::Number(value), start, width)
    }

    fn read_word_or_keyword(&mut self) -> Token {
        let start = self.cursor.clone();
        let mut s = String::new();
        if let Some(first) = self.advance() {
            s.push(first);
        }
        while let Some(c) = self.peek() {
            if classify::is_word_continue(c) {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        let width = s.chars().count();
        self.cursor.advance_column(width);
        let kind = classify::keyword(&s).unwrap_or(TokenKind::Word(s));
        Token::new(kind, start, width)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = self.peek()?;
        let token = if let Some(kind) = classify::special_char(c) {
            self.single(kind)
        } else if c == '\n' {
            self.read_newline()
        } else if c.is_ascii_digit() {
            self.read_number()
        } else if classify::is_word_start(c) {
            self.read_word_or_keyword()
        } else {
            self.single(TokenKind::Invalid(c))
        };
        tracing::trace!(kind = token.kind.name(), position = %token.position, "token");
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).map(|t| t.kind).collect()
    }

    fn at(line: usize, column: usize) -> Position {
        Position {
            file_name: DEFAULT_FILE_NAME.to_string(),
            line,
            column,
        }
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(lex("").next().is_none());
    }

    #[test]
    fn single_char_tokens() {
        assert_eq!(
            kinds("<>=+-() #*'.,"),
            vec![
                TokenKind::SmallerThan,
                TokenKind::GreaterThan,
                TokenKind::Equals,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::OpenBracket,
                TokenKind::ClosedBracket,
                TokenKind::Space,
                TokenKind::Hash,
                TokenKind::Asterisk,
                TokenKind::SingleQuote,
                TokenKind::Point,
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn digit_run_is_one_number() {
        let tokens = lex("12345").tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number(BigInt::from(12345)));
        assert_eq!(tokens[0].width, 5);
        assert_eq!(tokens[0].position, at(0, 0));
    }

    #[test]
    fn leading_zeros_count_towards_width() {
        let tokens = lex("007+1").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Number(BigInt::from(7)));
        assert_eq!(tokens[0].width, 3);
        assert_eq!(tokens[1].position, at(0, 3));
    }

    #[test]
    fn oversized_number_keeps_every_digit() {
        let tokens = lex("99999999999999999999").tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind.to_string(), "99999999999999999999");
        assert_eq!(tokens[0].width, 20);
        assert!(matches!(&tokens[0].kind, TokenKind::Number(n) if *n > BigInt::from(i64::MAX)));
    }

    #[test]
    fn keywords_take_precedence_over_words() {
        assert_eq!(kinds("def"), vec![TokenKind::Def]);
        assert_eq!(kinds("define"), vec![TokenKind::Word("define".into())]);
        assert_eq!(
            kinds("if then else extern"),
            vec![
                TokenKind::If,
                TokenKind::Space,
                TokenKind::Then,
                TokenKind::Space,
                TokenKind::Else,
                TokenKind::Space,
                TokenKind::Extern,
            ]
        );
    }

    #[test]
    fn words_may_contain_digits_after_first_char() {
        assert_eq!(kinds("x1y2"), vec![TokenKind::Word("x1y2".into())]);
        assert_eq!(
            kinds("1x"),
            vec![TokenKind::Number(BigInt::from(1)), TokenKind::Word("x".into())]
        );
    }

    #[test]
    fn underscore_and_at_only_start_words() {
        assert_eq!(kinds("@foo"), vec![TokenKind::Word("@foo".into())]);
        assert_eq!(
            kinds("a_b"),
            vec![TokenKind::Word("a".into()), TokenKind::Word("_b".into())]
        );
    }

    #[test]
    fn unrecognized_char_is_data() {
        assert_eq!(
            kinds("5 $ 3"),
            vec![
                TokenKind::Number(BigInt::from(5)),
                TokenKind::Space,
                TokenKind::Invalid('$'),
                TokenKind::Space,
                TokenKind::Number(BigInt::from(3)),
            ]
        );
    }

    #[test]
    fn newline_advances_line_and_resets_column() {
        let tokens = lex("ab\n 12").tokenize();
        assert_eq!(tokens[0].position, at(0, 0));
        assert_eq!(tokens[1].kind, TokenKind::Eol);
        assert_eq!(tokens[1].position, at(0, 2));
        assert_eq!(tokens[2].kind, TokenKind::Space);
        assert_eq!(tokens[2].position, at(1, 0));
        assert_eq!(tokens[3].kind, TokenKind::Number(BigInt::from(12)));
        assert_eq!(tokens[3].position, at(1, 1));
    }

    #[test]
    fn positions_are_snapshots() {
        let mut lexer = lex("1 + 2");
        let first = lexer.next().unwrap();
        let rest: Vec<_> = lexer.collect();
        assert_eq!(first.position, at(0, 0));
        assert_eq!(rest.last().unwrap().position, at(0, 4));
    }

    #[test]
    fn file_name_is_carried() {
        let tokens = Lexer::with_file_name("1", "calc.kal").tokenize();
        assert_eq!(tokens[0].position.file_name, "calc.kal");
    }

    #[test]
    fn early_stop_is_fine() {
        let mut lexer = lex("1 + 2 + 3");
        assert_eq!(lexer.next().unwrap().kind, TokenKind::Number(BigInt::from(1)));
        drop(lexer);
        assert_eq!(lex("1 + 2 + 3").count(), 9);
    }

    #[test]
    fn filtering_spaces() {
        let kinds: Vec<_> = without_spaces(lex(" 5  + 10 ")).map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number(BigInt::from(5)), TokenKind::Plus, TokenKind::Number(BigInt::from(10))]
        );
    }

    #[test]
    fn tabs_are_invalid() {
        assert_eq!(kinds("\t"), vec![TokenKind::Invalid('\t')]);
    }

    #[test]
    fn fused_after_end() {
        let mut lexer = lex("x");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }
}
