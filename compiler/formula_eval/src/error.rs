use formula_lexer::{Operator, Span};
use thiserror::Error;

/// Failures detected while running a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operator found fewer than two values on the operand stack
    #[error("Invalid expression: insufficient operands")]
    InsufficientOperands { operator: Operator, span: Span },

    /// The sequence produced no value at all, e.g. `()`
    #[error("Invalid expression: insufficient operands")]
    MissingOperand,

    /// More than one value was left once every operator had run, e.g. `5 5`
    #[error("Invalid expression: too many operands")]
    TooManyOperands { count: usize },

    /// The right-hand side of `/` was exactly zero
    #[error("Division by zero")]
    DivisionByZero { span: Span },
}

impl EvalError {
    /// Location of the operator at fault, when there is one
    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::InsufficientOperands { span, .. } | EvalError::DivisionByZero { span } => {
                Some(*span)
            }
            EvalError::MissingOperand | EvalError::TooManyOperands { .. } => None,
        }
    }
}
