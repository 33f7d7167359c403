use formula_lexer::Span;
use thiserror::Error;

/// Failures detected while reordering tokens into postfix form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `)` with no `(` before it
    #[error("Mismatched parentheses")]
    UnmatchedRightParen { span: Span },

    /// A `(` that is never closed
    #[error("Mismatched parentheses")]
    UnclosedLeftParen { span: Span },
}

impl ParseError {
    /// Location of the unbalanced parenthesis
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnmatchedRightParen { span } | ParseError::UnclosedLeftParen { span } => {
                *span
            }
        }
    }
}
