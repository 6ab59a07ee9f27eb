use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Text the token stands for (string tokens hold the unquoted content)
    pub value: String,
    /// Character offset of the token's first character (0-indexed)
    pub position: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, value: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            position,
        }
    }

    /// True for a `(` paren token
    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.value == "("
    }

    /// True for a `)` paren token
    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.value == ")"
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "{} \"{}\"", self.kind, self.value),
            _ => write!(f, "{} `{}`", self.kind, self.value),
        }
    }
}

/// All possible token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// `(` or `)`
    Paren,
    /// Run of decimal digits
    Number,
    /// Double-quoted string literal
    String,
    /// Run of ASCII letters
    Name,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Paren => "paren",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Name => "name",
        };
        f.write_str(name)
    }
}
