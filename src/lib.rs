//! # tiny-sexpr
//!
//! A small s-expression front end: a scanner that turns source text into
//! tokens and a recursive-descent parser that turns tokens into an AST of
//! nested calls and literals.
//!
//! ## Quick Start
//!
//! ```rust
//! use tiny_sexpr::{parse, scan, Expression};
//!
//! # fn main() -> tiny_sexpr::Result<()> {
//! let tokens = scan("(add 2 (subtract 4 2))")?;
//! let program = parse(&tokens)?;
//!
//! assert_eq!(
//!     program.body,
//!     vec![Expression::call(
//!         "add",
//!         vec![
//!             Expression::number("2"),
//!             Expression::call("subtract", vec![Expression::number("4"), Expression::number("2")]),
//!         ],
//!     )]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Language
//!
//! ```text
//! program    := form*
//! form       := NUMBER | STRING | "(" NAME form* ")"
//! NUMBER     := digit+
//! STRING     := '"' any-char-except-quote* '"'
//! NAME       := letter+
//! ```
//!
//! No escapes inside strings, no comments, no signs or decimals. A bare
//! name is only valid as the head of a call.
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → AST
//! ```
//!
//! The two stages are exposed separately so callers can inspect or rewrite
//! the token sequence before parsing.
//!
//! - [`SExprScanner`] / [`scan`] - Tokenizes source code
//! - [`SExprParser`] / [`parse`] - Builds the [`Program`] tree
//!
//! ## Error Handling
//!
//! Both stages stop at the first problem:
//!
//! ```rust
//! use tiny_sexpr::{parse, scan, LexError, ParseError};
//!
//! assert!(matches!(
//!     scan("(add 2 @)"),
//!     Err(LexError::UnexpectedCharacter { character: '@', position: 7 })
//! ));
//!
//! let tokens = scan("(add 2").unwrap();
//! assert!(matches!(parse(&tokens), Err(ParseError::UnexpectedEof { .. })));
//! ```

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, ErrorKind, LexError, ParseError, Result};
pub use lexer::{scan, SExprScanner, Token, TokenKind};
pub use parser::{parse, Expression, Program, SExprParser};

/// Type alias for the s-expression scanner.
pub type Scanner = SExprScanner;

/// Type alias for the s-expression parser.
pub type Parser<'a> = SExprParser<'a>;
