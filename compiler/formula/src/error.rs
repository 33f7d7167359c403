//! The error type surfaced to callers of [`evaluate`](crate::evaluate)

use formula_eval::EvalError;
use formula_lexer::{LexError, Span};
use formula_parser::ParseError;
use thiserror::Error;

/// Why an expression could not be evaluated.
///
/// Callers can treat this as a single kind of failure and show its message.
/// [`kind`](Self::kind) classifies the cause for callers that want to branch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidExpressionError {
    /// No input, or input that is only whitespace
    #[error("Expression cannot be null or empty")]
    Empty,

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Classification of an [`InvalidExpressionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    Empty,
    InvalidCharacters,
    MismatchedParentheses,
    InsufficientOperands,
    TooManyOperands,
    DivisionByZero,
}

impl InvalidExpressionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InvalidExpressionError::Empty => ErrorKind::Empty,
            InvalidExpressionError::Lex(LexError::InvalidCharacters { .. }) => {
                ErrorKind::InvalidCharacters
            }
            InvalidExpressionError::Parse(_) => ErrorKind::MismatchedParentheses,
            InvalidExpressionError::Eval(err) => match err {
                EvalError::InsufficientOperands { .. } | EvalError::MissingOperand => {
                    ErrorKind::InsufficientOperands
                }
                EvalError::TooManyOperands { .. } => ErrorKind::TooManyOperands,
                EvalError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            },
        }
    }

    /// Where in the expression the problem was found, when it has a location
    pub fn span(&self) -> Option<Span> {
        match self {
            InvalidExpressionError::Empty => None,
            InvalidExpressionError::Lex(err) => Some(err.span()),
            InvalidExpressionError::Parse(err) => Some(err.span()),
            InvalidExpressionError::Eval(err) => err.span(),
        }
    }

    /// Human-readable description. Not guaranteed stable across versions.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_lexer::Operator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stage_messages_pass_through() {
        let err: InvalidExpressionError = ParseError::UnclosedLeftParen {
            span: Span::new(0, 1),
        }
        .into();
        assert_eq!(err.message(), "Mismatched parentheses");
        assert_eq!(err.kind(), ErrorKind::MismatchedParentheses);
        assert_eq!(err.span(), Some(Span::new(0, 1)));

        let err: InvalidExpressionError = EvalError::InsufficientOperands {
            operator: Operator::Add,
            span: Span::new(3, 4),
        }
        .into();
        assert_eq!(err.message(), "Invalid expression: insufficient operands");
        assert_eq!(err.kind(), ErrorKind::InsufficientOperands);
    }

    #[test]
    fn test_empty() {
        let err = InvalidExpressionError::Empty;
        assert_eq!(err.message(), "Expression cannot be null or empty");
        assert_eq!(err.kind(), ErrorKind::Empty);
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_missing_operand_counts_as_insufficient() {
        let err = InvalidExpressionError::from(EvalError::MissingOperand);
        assert_eq!(err.kind(), ErrorKind::InsufficientOperands);
    }
}
