use super::token::{Token, TokenKind};
use crate::error::LexError;

/// Scanner for the s-expression source syntax
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
}

impl SExprScanner {
    /// Creates a new scanner over `source`
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, LexError> {
        while !self.is_at_end() {
            self.start = self.current;
            if let Err(err) = self.scan_token() {
                tracing::debug!(%err, "scan failed");
                return Err(err);
            }
        }

        tracing::debug!(
            chars = self.source.len(),
            tokens = self.tokens.len(),
            "scan complete"
        );
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        let c = self.advance();

        match c {
            '(' | ')' => self.add_token(TokenKind::Paren, c.to_string()),

            c if c.is_whitespace() => {}

            '"' => self.scan_string()?,

            c if c.is_ascii_digit() => {
                let value = self.take_while(|c| c.is_ascii_digit());
                self.add_token(TokenKind::Number, value);
            }

            c if c.is_ascii_alphabetic() => {
                let value = self.take_while(|c| c.is_ascii_alphabetic());
                self.add_token(TokenKind::Name, value);
            }

            _ => {
                return Err(LexError::UnexpectedCharacter {
                    character: c,
                    position: self.start,
                });
            }
        }

        Ok(())
    }

    fn scan_string(&mut self) -> Result<(), LexError> {
        let mut value = String::new();

        while !self.is_at_end() && self.peek() != '"' {
            value.push(self.advance());
        }

        if self.is_at_end() {
            return Err(LexError::UnterminatedString {
                position: self.start,
            });
        }

        self.advance(); // Closing "

        self.add_token(TokenKind::String, value);
        Ok(())
    }

    /// Extends the current token while `accept` holds, returning its full text
    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        while !self.is_at_end() && accept(self.peek()) {
            self.advance();
        }
        self.source[self.start..self.current].iter().collect()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn add_token(&mut self, kind: TokenKind, value: String) {
        tracing::trace!(%kind, %value, position = self.start, "token");
        self.tokens.push(Token::new(kind, value, self.start));
    }
}

/// Scans `source` into an ordered token sequence
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    SExprScanner::new(source).scan_tokens()
}
