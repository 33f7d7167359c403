//! Infix to postfix conversion for arithmetic formulas.
//!
//! [`to_postfix`] reorders the tokens produced by `formula_lexer` into
//! Reverse Polish Notation using the shunting-yard algorithm, with an
//! explicit operator stack and the fixed table in [`precedence`].

pub mod converter;
pub mod error;
pub mod postfix;
pub mod precedence;

pub use converter::to_postfix;
pub use error::ParseError;
pub use postfix::{Postfix, PostfixItem, PostfixToken};
pub use precedence::precedence;
