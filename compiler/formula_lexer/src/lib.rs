//! Formula lexical analyzer
//!
//! Converts the text of an arithmetic formula into a sequence of tokens
//! for the postfix converter.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use token::{Operator, Span, Token, TokenKind};
