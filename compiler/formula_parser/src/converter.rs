//! Shunting-yard conversion from infix tokens to postfix order.

use formula_lexer::{Operator, Span, Token, TokenKind};

use crate::error::ParseError;
use crate::postfix::{Postfix, PostfixToken};
use crate::precedence::precedence;

/// What the operator stack can hold. Numbers go straight to the output, so
/// there is no variant for them.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    Operator(Operator, Span),
    LeftParen(Span),
}

/// Reorder infix `tokens` into postfix order.
///
/// All operators are left-associative: an operator on the stack is popped
/// when its precedence is greater than or equal to the incoming one, so
/// `10 - 3 - 2` becomes `10 3 - 2 -`. Parentheses are consumed and never
/// appear in the output.
///
/// Only parenthesis balance is checked here. Operand/operator mismatches such
/// as `1 + + 2` pass through and are caught by the evaluator.
pub fn to_postfix(tokens: &[Token]) -> Result<Postfix, ParseError> {
    let mut output: Vec<PostfixToken> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number(value) => output.push(PostfixToken::number(value, token.span)),
            TokenKind::Operator(op) => {
                while let Some(&StackEntry::Operator(top, span)) = stack.last() {
                    if precedence(top) < precedence(op) {
                        break;
                    }
                    log::trace!("pop {top} (before {op})");
                    stack.pop();
                    output.push(PostfixToken::operator(top, span));
                }
                stack.push(StackEntry::Operator(op, token.span));
            }
            TokenKind::LeftParen => stack.push(StackEntry::LeftParen(token.span)),
            TokenKind::RightParen => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(op, span)) => {
                        output.push(PostfixToken::operator(op, span))
                    }
                    Some(StackEntry::LeftParen(_)) => break,
                    None => {
                        log::debug!("unmatched ')' at {}", token.span);
                        return Err(ParseError::UnmatchedRightParen { span: token.span });
                    }
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op, span) => output.push(PostfixToken::operator(op, span)),
            StackEntry::LeftParen(span) => {
                log::debug!("unclosed '(' at {span}");
                return Err(ParseError::UnclosedLeftParen { span });
            }
        }
    }

    let postfix = Postfix::new(output);
    log::debug!("postfix: {postfix}");
    Ok(postfix)
}
