use formula_eval::evaluate_postfix;
use formula_lexer::tokenize;
use formula_parser::to_postfix;

use crate::error::InvalidExpressionError;

/// Evaluate an arithmetic expression.
///
/// Accepts `&str` directly, or an `Option<&str>` where `None` stands for a
/// missing expression. Missing and blank input fail with
/// [`InvalidExpressionError::Empty`] before any lexing takes place; every
/// other failure comes from one of the pipeline stages, message unchanged.
///
/// Unary signs are not supported, so `-5 + 2` is rejected.
pub fn evaluate<'a>(expression: impl Into<Option<&'a str>>) -> Result<f64, InvalidExpressionError> {
    let expression = match expression.into() {
        Some(expression) if !expression.trim().is_empty() => expression,
        _ => {
            log::debug!("rejecting empty expression");
            return Err(InvalidExpressionError::Empty);
        }
    };

    run(expression).inspect_err(|err| log::debug!("failed to evaluate {expression:?}: {err}"))
}

fn run(expression: &str) -> Result<f64, InvalidExpressionError> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;
    let value = evaluate_postfix(&postfix)?;
    log::debug!("{expression:?} = {value}");
    Ok(value)
}

/// Object-style entry point. Holds no state, so a single instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormulaEvaluator;

impl FormulaEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// See [`evaluate`]
    pub fn evaluate<'a>(
        &self,
        expression: impl Into<Option<&'a str>>,
    ) -> Result<f64, InvalidExpressionError> {
        evaluate(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_expression() {
        assert_eq!(evaluate("2 + 4"), Ok(6.0));
    }

    #[test]
    fn test_missing_and_blank_input() {
        for input in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = evaluate(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Empty, "input: {input:?}");
        }
    }

    #[test]
    fn test_evaluator_handle() {
        let evaluator = FormulaEvaluator::new();
        assert_eq!(evaluator.evaluate("((10 + 2) * (5 - 4)) / 2"), Ok(6.0));
        assert!(evaluator.evaluate(None).is_err());
    }

    #[test]
    fn test_stage_errors_are_not_rewrapped() {
        let err = evaluate("10 / 0").unwrap_err();
        assert_eq!(err.to_string(), "Division by zero");
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }
}
