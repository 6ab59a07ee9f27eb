use super::ast::{Expression, Program};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};

const EXPECTED_FORM: &str = "a number, string or `(`";
const EXPECTED_NAME: &str = "a function name";
const EXPECTED_CLOSE: &str = "`)`";

/// Recursive-descent parser over a scanned token sequence
pub struct SExprParser<'a> {
    tokens: &'a [Token],
    current: usize,
}

impl<'a> SExprParser<'a> {
    /// Creates a new parser positioned at the first token
    pub fn new(tokens: &'a [Token]) -> Self {
        SExprParser { tokens, current: 0 }
    }

    /// Parses the tokens into an AST
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            match self.parse_form() {
                Ok(expr) => body.push(expr),
                Err(err) => {
                    tracing::debug!(%err, cursor = self.current, "parse failed");
                    return Err(err);
                }
            }
        }

        tracing::debug!(
            tokens = self.tokens.len(),
            forms = body.len(),
            "parse complete"
        );
        Ok(Program { body })
    }

    /// Parse one form: a literal or a parenthesized call
    fn parse_form(&mut self) -> Result<Expression, ParseError> {
        let token = self.peek_or_eof(EXPECTED_FORM)?;

        match token.kind {
            TokenKind::Number => {
                let value = self.advance().value.clone();
                Ok(Expression::NumberLiteral { value })
            }
            TokenKind::String => {
                let value = self.advance().value.clone();
                Ok(Expression::StringLiteral { value })
            }
            TokenKind::Paren if token.is_open_paren() => self.parse_call(),
            _ => Err(Self::unexpected(token, EXPECTED_FORM)),
        }
    }

    /// Parse (name form*) with the cursor on the opening paren
    fn parse_call(&mut self) -> Result<Expression, ParseError> {
        self.advance(); // (

        let head = self.peek_or_eof(EXPECTED_NAME)?;
        if head.kind != TokenKind::Name {
            return Err(Self::unexpected(head, EXPECTED_NAME));
        }
        let name = self.advance().value.clone();
        tracing::trace!(%name, cursor = self.current, "call");

        let mut params = Vec::new();
        while !self.peek_or_eof(EXPECTED_CLOSE)?.is_close_paren() {
            params.push(self.parse_form()?);
        }

        self.advance(); // )

        Ok(Expression::CallExpression { name, params })
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn peek(&self) -> Option<&'a Token> {
        let tokens = self.tokens;
        tokens.get(self.current)
    }

    /// Token at the cursor, or an end-of-input error naming what was expected
    fn peek_or_eof(&self, expected: &'static str) -> Result<&'a Token, ParseError> {
        self.peek().ok_or(ParseError::UnexpectedEof { expected })
    }

    /// Consume the token at the cursor; callers peek first
    fn advance(&mut self) -> &'a Token {
        let tokens = self.tokens;
        let token = &tokens[self.current];
        self.current += 1;
        token
    }

    fn unexpected(token: &Token, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: token.kind,
            value: token.value.clone(),
            position: token.position,
        }
    }
}

/// Parses a token sequence into a [`Program`]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    SExprParser::new(tokens).parse()
}
