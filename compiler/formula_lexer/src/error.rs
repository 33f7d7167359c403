//! Lexing failures

use thiserror::Error;

use crate::token::Span;

/// Raised when part of the expression is not a number, operator or parenthesis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// An unrecognised run of characters. The message names the whole
    /// expression as the caller passed it; `span` locates the offending run.
    #[error("Invalid characters in expression: {expression}")]
    InvalidCharacters {
        /// The original, unmodified expression
        expression: String,
        /// The first unrecognised run of characters
        span: Span,
    },
}

impl LexError {
    /// Location of the offending input
    pub fn span(&self) -> Span {
        match self {
            LexError::InvalidCharacters { span, .. } => *span,
        }
    }
}
