//! Error types for the tiny-sexpr front end

use thiserror::Error;

/// Scanner errors
///
/// The scanner stops at the first of these; no tokens are returned alongside.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that is not a paren, whitespace, digit, quote or letter
    ///
    /// **Example:** `(add 2 @)` fails at `@`, position 7
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Character offset in the source (0-indexed)
        position: usize,
    },

    /// Input ended before the closing `"` of a string literal
    #[error("Unterminated string starting at position {position}")]
    UnterminatedString {
        /// Character offset of the opening quote
        position: usize,
    },
}

impl LexError {
    /// Character offset the error points at
    pub fn position(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::UnterminatedString { position } => *position,
        }
    }
}

/// Parser errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token at the cursor does not fit the grammar at this point
    ///
    /// **Triggered by:** a bare name outside call position, a stray `)`,
    /// or a non-name right after `(`
    /// **Example:** `add 2)`
    #[error("Unexpected token: expected {expected}, found {found} `{value}` at position {position}")]
    UnexpectedToken {
        /// Grammar context that was expected
        expected: &'static str,
        /// Kind of the token actually found
        found: crate::lexer::TokenKind,
        /// Text of the token actually found
        value: String,
        /// Character offset of the token in the source
        position: usize,
    },

    /// Token sequence ended in the middle of a form
    ///
    /// **Example:** `(add 2` (missing closing parenthesis)
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// Grammar context that was expected
        expected: &'static str,
    },
}

/// Which stage produced an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Scanner failure
    Lex,
    /// Parser failure
    Parse,
    /// JSON rendering failure
    Serialization,
}

/// Crate-wide error, for callers running both stages in one function
#[derive(Error, Debug)]
pub enum Error {
    /// Scanning failed
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    /// Parsing failed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Rendering the AST as JSON failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Classify the error by stage
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(_) => ErrorKind::Lex,
            Error::Parse(_) => ErrorKind::Parse,
            Error::Serialization(_) => ErrorKind::Serialization,
        }
    }
}

/// Result type for tiny-sexpr operations
pub type Result<T> = std::result::Result<T, Error>;
