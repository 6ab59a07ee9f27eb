use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Complete parsed program
///
/// Serialized with a `"type": "Program"` tag so JSON output matches the
/// tagged shape of [`Expression`] nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Program {
    /// Top-level forms in source order
    pub body: Vec<Expression>,
}

impl Program {
    /// Number of top-level forms
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// True when the source held no forms at all
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Compact JSON rendering of the tree
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON rendering of the tree
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// AST nodes below the program root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// Decimal numeral, kept as source text
    NumberLiteral {
        /// Digits exactly as written
        value: String,
    },

    /// String literal with the quotes stripped
    StringLiteral {
        /// Content between the quotes
        value: String,
    },

    /// Call form: (name param...)
    CallExpression {
        /// Function name
        name: String,
        /// Arguments in source order
        params: Vec<Expression>,
    },
}

impl Expression {
    /// Shorthand for a number node
    pub fn number(value: impl Into<String>) -> Self {
        Expression::NumberLiteral {
            value: value.into(),
        }
    }

    /// Shorthand for a string node
    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral {
            value: value.into(),
        }
    }

    /// Shorthand for a call node
    pub fn call(name: impl Into<String>, params: Vec<Expression>) -> Self {
        Expression::CallExpression {
            name: name.into(),
            params,
        }
    }

    /// Call nesting depth: 0 for literals, 1 + deepest param for calls
    pub fn depth(&self) -> usize {
        match self {
            Expression::NumberLiteral { .. } | Expression::StringLiteral { .. } => 0,
            Expression::CallExpression { params, .. } => {
                1 + params.iter().map(Expression::depth).max().unwrap_or(0)
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::NumberLiteral { value } => write!(f, "{}", value),
            Expression::StringLiteral { value } => write!(f, "\"{}\"", value),
            Expression::CallExpression { name, params } => {
                write!(f, "({}", name)?;
                for param in params {
                    write!(f, " {}", param)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, expr) in self.body.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", expr)?;
        }
        Ok(())
    }
}
