//! Source positions attached to every token.

use std::fmt;

/// File name used when the caller does not provide one.
pub const DEFAULT_FILE_NAME: &str = "<input>";

/// A location in a source buffer.
///
/// Both counters are 0-based: the first character of a source sits at
/// line 0, column 0. The lexer keeps one `Position` as its cursor and hands
/// every token its own clone, so advancing the cursor never changes a token
/// that was already emitted.
///
/// # Examples
///
/// ```rust
/// use kaleido_syntax::Position;
///
/// let mut cursor = Position::new("calc.kal");
/// cursor.advance_column(3);
/// let snapshot = cursor.clone();
/// cursor.advance_line();
///
/// assert_eq!((snapshot.line, snapshot.column), (0, 3));
/// assert_eq!((cursor.line, cursor.column), (1, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Name of the file (or pseudo-file) the source came from
    pub file_name: String,

    /// Line number (0-based)
    pub line: usize,

    /// Column on the line, counted in characters (0-based)
    pub column: usize,
}

impl Position {
    /// Creates a position at the start of `file_name`.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            line: 0,
            column: 0,
        }
    }

    /// Moves the cursor `n` characters to the right on the current line.
    pub fn advance_column(&mut self, n: usize) {
        self.column += n;
    }

    /// Moves the cursor to the start of the next line.
    pub fn advance_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_name, self.line, self.column)
    }
}
