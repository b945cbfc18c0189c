//! Tokenizer for console command lines
//!
//! Converts one line of console (or script) input into a flat [`Token`]
//! stream consumed by the command parser. Tokens are whitespace-separated;
//! a token of digits (with an optional leading `-`) becomes a
//! [`Token::Number`], anything else a [`Token::Word`].
//!
//! Every token carries a [`SourceLocation`] so that command errors can report
//! an accurate line and column without a separate token-to-location table.

use std::fmt;

/// Source position of a token: the input line (1-based, meaningful for
/// script files) and the column within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// All token variants produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A bare word: command keyword or type name.
    Word(String, SourceLocation),
    /// A decimal integer literal.
    Number(i64, SourceLocation),
    /// End of the input line.
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Word(_, loc) | Token::Number(_, loc) | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word, _) => write!(f, "'{}'", word),
            Token::Number(n, _) => write!(f, "'{}'", n),
            Token::Eof(_) => write!(f, "end of line"),
        }
    }
}

/// Lexer error (currently only oversized integer literals).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lex error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Tokenize one line of input. `line_no` is 1-based and carried into every
/// token's location.
pub fn tokenize(line_no: usize, input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut word = String::new();
        while let Some(&(_, c)) = chars.peek() {
            if c.is_whitespace() {
                break;
            }
            word.push(c);
            chars.next();
        }

        let location = SourceLocation::new(line_no, start + 1);
        if looks_numeric(&word) {
            let value = word.parse::<i64>().map_err(|_| LexError {
                message: format!("integer literal '{}' is out of range", word),
                location,
            })?;
            tokens.push(Token::Number(value, location));
        } else {
            tokens.push(Token::Word(word, location));
        }
    }

    let end_column = input.chars().count() + 1;
    tokens.push(Token::Eof(SourceLocation::new(line_no, end_column)));
    Ok(tokens)
}

/// A token is numeric when it is digits with an optional leading minus.
/// Mixed tokens like `12abc` stay words and fail later, where an integer is
/// actually expected.
fn looks_numeric(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
