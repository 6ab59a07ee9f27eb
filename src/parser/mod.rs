//! Parser Module
//!
//! Parses a token sequence into an Abstract Syntax Tree (AST) of nested
//! calls and literals.

mod ast;
mod sexpr_parser;

pub use ast::{Expression, Program};
pub use sexpr_parser::{parse, SExprParser};
