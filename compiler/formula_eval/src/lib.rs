//! Evaluation of postfix arithmetic formulas.

pub mod error;
pub mod evaluator;

pub use error::EvalError;
pub use evaluator::{apply, evaluate_postfix};
