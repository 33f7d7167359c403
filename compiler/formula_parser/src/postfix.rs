//! Postfix (Reverse Polish) token sequences

use std::fmt;
use std::slice;

use formula_lexer::{Operator, Span};

/// An element of a postfix sequence. Parentheses never appear here: the
/// ordering they expressed is already encoded in the token order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixItem {
    Number(f64),
    Operator(Operator),
}

/// A postfix item with the span of the source token it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostfixToken {
    pub item: PostfixItem,
    pub span: Span,
}

impl PostfixToken {
    pub fn number(value: f64, span: Span) -> Self {
        Self {
            item: PostfixItem::Number(value),
            span,
        }
    }

    pub fn operator(op: Operator, span: Span) -> Self {
        Self {
            item: PostfixItem::Operator(op),
            span,
        }
    }
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.item {
            PostfixItem::Number(value) => write!(f, "{value}"),
            PostfixItem::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// An expression in postfix order, ready for a single left-to-right pass
/// over an operand stack.
///
/// Displays as its tokens separated by single spaces, e.g. `10 3 - 2 -`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix {
    tokens: Vec<PostfixToken>,
}

impl Postfix {
    pub fn new(tokens: Vec<PostfixToken>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, PostfixToken> {
        self.tokens.iter()
    }

    pub fn into_tokens(self) -> Vec<PostfixToken> {
        self.tokens
    }
}

impl From<Vec<PostfixToken>> for Postfix {
    fn from(tokens: Vec<PostfixToken>) -> Self {
        Self::new(tokens)
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a PostfixToken;
    type IntoIter = slice::Iter<'a, PostfixToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
