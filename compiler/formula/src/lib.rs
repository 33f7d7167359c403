//! Arithmetic formula evaluation.
//!
//! ```text
//! evaluate("((10 + 2) * (5 - 4)) / 2") == Ok(6.0)
//! ```
//!
//! The input runs through three stages: `formula_lexer` turns it into
//! tokens, `formula_parser` reorders them into postfix form, and
//! `formula_eval` reduces the postfix sequence on an operand stack. Every
//! call is independent; nothing is cached between calls.

pub mod error;
pub mod evaluator;

pub use error::{ErrorKind, InvalidExpressionError};
pub use evaluator::{evaluate, FormulaEvaluator};

// Re-export the pipeline stages for callers that want intermediate results
pub use formula_eval::{evaluate_postfix, EvalError};
pub use formula_lexer::{tokenize, LexError, Operator, Span, Token, TokenKind};
pub use formula_parser::{to_postfix, ParseError, Postfix, PostfixItem, PostfixToken};
