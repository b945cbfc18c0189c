//! Console command parser
//!
//! Parses a token stream into a [`Command`]. The parser owns all input
//! validation the core registry assumes: command arity, integer arguments,
//! and (later, in the session) field-name existence. Keywords are matched
//! case-insensitively, so `STRUCT Point int int` and `struct Point int int`
//! are the same declaration.

use super::lexer::{tokenize, LexError, SourceLocation, Token};
use std::fmt;

/// A fully parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `atomic <name> <size> <align>`
    Atomic { name: String, size: i64, align: i64 },
    /// `struct <name> <field> [<field>...]`
    Struct { name: String, fields: Vec<String> },
    /// `union <name> <field> [<field>...]`
    Union { name: String, fields: Vec<String> },
    /// `show <name>`
    Show { name: String },
    /// `types`
    Types,
    /// `layout <name>` - naturally aligned placement
    Layout { name: String },
    /// `packed <name>` - zero-padding placement
    Packed { name: String },
    /// `heuristic <name>` - alignment-sorted best-fit placement
    Heuristic { name: String },
    /// `wordsize <n>` - diagram grouping width
    WordSize { size: i64 },
    /// `help`
    Help,
    /// `clear` - wipe the console transcript
    Clear,
    /// `quit` / `exit`
    Quit,
}

/// Command parse error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (column {})", self.message, self.location.column)
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Parse one line of input. Returns `Ok(None)` for blank lines and `#`
/// comments (script files use these).
pub fn parse_line(line_no: usize, input: &str) -> Result<Option<Command>, ParseError> {
    if input.trim_start().starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(line_no, input)?;
    let mut parser = CommandParser::new(tokens);
    if parser.is_at_end() {
        return Ok(None);
    }
    let command = parser.parse_command()?;
    parser.expect_end()?;
    Ok(Some(command))
}

/// Cursor over one line's token stream.
struct CommandParser {
    tokens: Vec<Token>,
    position: usize,
}

impl CommandParser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, position: 0 }
    }

    fn parse_command(&mut self) -> Result<Command, ParseError> {
        let (keyword, location) = self.expect_word("a command")?;

        match keyword.to_ascii_lowercase().as_str() {
            "atomic" => {
                let (name, _) = self.expect_word("a type name")?;
                let size = self.expect_integer("a size in bytes")?;
                let align = self.expect_integer("an alignment in bytes")?;
                Ok(Command::Atomic { name, size, align })
            }
            "struct" => {
                let (name, _) = self.expect_word("a type name")?;
                let fields = self.expect_field_list(&name)?;
                Ok(Command::Struct { name, fields })
            }
            "union" => {
                let (name, _) = self.expect_word("a type name")?;
                let fields = self.expect_field_list(&name)?;
                Ok(Command::Union { name, fields })
            }
            "show" => {
                let (name, _) = self.expect_word("a type name")?;
                Ok(Command::Show { name })
            }
            "types" => Ok(Command::Types),
            "layout" | "unpacked" => {
                let (name, _) = self.expect_word("a type name")?;
                Ok(Command::Layout { name })
            }
            "packed" => {
                let (name, _) = self.expect_word("a type name")?;
                Ok(Command::Packed { name })
            }
            "heuristic" => {
                let (name, _) = self.expect_word("a type name")?;
                Ok(Command::Heuristic { name })
            }
            "wordsize" => {
                let size = self.expect_integer("a word size in bytes")?;
                Ok(Command::WordSize { size })
            }
            "help" => Ok(Command::Help),
            "clear" => Ok(Command::Clear),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ParseError {
                message: format!("Unknown command '{}' (try 'help')", keyword),
                location,
            }),
        }
    }

    // ===== Helper methods =====

    fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    fn expect_word(&mut self, what: &str) -> Result<(String, SourceLocation), ParseError> {
        match self.advance() {
            Token::Word(word, location) => Ok((word, location)),
            other => Err(ParseError {
                message: format!("Expected {}, found {}", what, other),
                location: other.location(),
            }),
        }
    }

    fn expect_integer(&mut self, what: &str) -> Result<i64, ParseError> {
        match self.advance() {
            Token::Number(value, _) => Ok(value),
            other => Err(ParseError {
                message: format!("Expected {}, found {}", what, other),
                location: other.location(),
            }),
        }
    }

    /// One or more field names. Numbers are rejected outright - a field is
    /// always a registered type name.
    fn expect_field_list(&mut self, type_name: &str) -> Result<Vec<String>, ParseError> {
        let mut fields = Vec::new();
        while !self.is_at_end() {
            let (field, _) = self.expect_word("a field type name")?;
            fields.push(field);
        }
        if fields.is_empty() {
            return Err(ParseError {
                message: format!("Type '{}' needs at least one field", type_name),
                location: self.peek().location(),
            });
        }
        Ok(fields)
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            let token = self.peek();
            Err(ParseError {
                message: format!("Unexpected trailing input: {}", token),
                location: token.location(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Option<Command>, ParseError> {
        parse_line(1, input)
    }

    #[test]
    fn test_parse_atomic() {
        let command = parse("atomic int 4 4").unwrap().unwrap();
        assert_eq!(
            command,
            Command::Atomic {
                name: "int".to_string(),
                size: 4,
                align: 4,
            }
        );
    }

    #[test]
    fn test_parse_struct_with_fields() {
        let command = parse("STRUCT MyStruct int char").unwrap().unwrap();
        assert_eq!(
            command,
            Command::Struct {
                name: "MyStruct".to_string(),
                fields: vec!["int".to_string(), "char".to_string()],
            }
        );
    }

    #[test]
    fn test_struct_requires_fields() {
        let err = parse("struct Empty").unwrap_err();
        assert!(err.message.contains("at least one field"));
    }

    #[test]
    fn test_atomic_requires_integer_size() {
        let err = parse("atomic int four 4").unwrap_err();
        assert!(err.message.contains("Expected a size in bytes"));
        assert_eq!(err.location.column, 12);
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("frobnicate now").unwrap_err();
        assert!(err.message.contains("Unknown command 'frobnicate'"));
        assert_eq!(err.location.column, 1);
    }

    #[test]
    fn test_trailing_input_rejected() {
        let err = parse("show Point extra").unwrap_err();
        assert!(err.message.contains("Unexpected trailing input"));
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("# seed file header").unwrap(), None);
    }

    #[test]
    fn test_layout_aliases() {
        assert_eq!(
            parse("unpacked S").unwrap().unwrap(),
            Command::Layout {
                name: "S".to_string()
            }
        );
    }

    #[test]
    fn test_quit_aliases() {
        assert_eq!(parse("quit").unwrap().unwrap(), Command::Quit);
        assert_eq!(parse("EXIT").unwrap().unwrap(), Command::Quit);
    }
}
