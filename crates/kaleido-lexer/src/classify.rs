//! Character and keyword lookup tables used by the lexer.

use kaleido_syntax::token::TokenKind;

/// Token for a character that always forms a token on its own.
pub fn special_char(c: char) -> Option<TokenKind> {
    let kind = match c {
        '<' => TokenKind::SmallerThan,
        '>' => TokenKind::GreaterThan,
        '=' => TokenKind::Equals,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '(' => TokenKind::OpenBracket,
        ')' => TokenKind::ClosedBracket,
        ' ' => TokenKind::Space,
        '#' => TokenKind::Hash,
        '*' => TokenKind::Asterisk,
        '\'' => TokenKind::SingleQuote,
        '.' => TokenKind::Point,
        ',' => TokenKind::Comma,
        _ => return None,
    };
    Some(kind)
}

/// Token for a reserved word.
pub fn keyword(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "def" => TokenKind::Def,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "then" => TokenKind::Then,
        "extern" => TokenKind::Extern,
        _ => return None,
    };
    Some(kind)
}

/// Words start with a letter, `_` or `@`.
pub fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '@'
}

/// After the first character a word continues with letters and digits only.
pub fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
