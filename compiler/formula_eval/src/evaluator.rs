//! Postfix evaluator
//! Runs a postfix sequence over an explicit operand stack

use formula_lexer::{Operator, Span};
use formula_parser::{Postfix, PostfixItem};

use crate::error::EvalError;

/// Evaluate a postfix sequence to a single value.
///
/// Numbers are pushed onto the operand stack. Each operator pops the
/// right-hand operand, then the left-hand operand, and pushes the result.
/// Exactly one value must remain at the end.
///
/// Overflow and other IEEE 754 edge cases are not errors: `1e308 * 10`
/// yields infinity. Only a literal zero divisor is rejected.
pub fn evaluate_postfix(postfix: &Postfix) -> Result<f64, EvalError> {
    let mut operands: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token.item {
            PostfixItem::Number(value) => operands.push(value),
            PostfixItem::Operator(op) => {
                let (b, a) = match (operands.pop(), operands.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    _ => {
                        log::debug!("'{op}' at {} is missing an operand", token.span);
                        return Err(EvalError::InsufficientOperands {
                            operator: op,
                            span: token.span,
                        });
                    }
                };
                let result = apply(a, b, op, token.span)?;
                log::trace!("{a} {op} {b} = {result}");
                operands.push(result);
            }
        }
    }

    match operands.as_slice() {
        [result] => {
            log::debug!("{postfix} => {result}");
            Ok(*result)
        }
        [] => Err(EvalError::MissingOperand),
        rest => {
            log::debug!("{} operands left after evaluating {postfix}", rest.len());
            Err(EvalError::TooManyOperands { count: rest.len() })
        }
    }
}

/// Apply a binary operator to `a` (left) and `b` (right).
///
/// Division fails when `b` compares equal to `0.0`, which includes `-0.0`
/// and values that underflowed to zero. There is no tolerance band.
pub fn apply(a: f64, b: f64, op: Operator, span: Span) -> Result<f64, EvalError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div if b == 0.0 => Err(EvalError::DivisionByZero { span }),
        Operator::Div => Ok(a / b),
    }
}
