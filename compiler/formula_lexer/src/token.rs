//! Token definitions for arithmetic formulas

use std::fmt;
use std::ops::Range;

use logos::Logos;

/// Byte range of a token in the original expression.
///
/// Offsets are 0-based and refer to the unmodified input, so a span can be
/// used to slice the caller's string directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// The 0-based byte offset of the first byte
    pub start: usize,
    /// The 0-based byte offset one past the last byte
    pub end: usize,
}

impl Span {
    /// Create a span covering `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered by the span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the span covers no input
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// The four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// The single-character source form of the operator
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Raw token kinds recognised by the logos-generated scanner.
///
/// Whitespace is skipped between tokens. It is never required, but it does
/// separate two adjacent numbers.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// A decimal literal: digits with an optional `.` and fraction.
    /// No sign and no exponent are part of the literal.
    #[regex(r"[0-9]+(\.[0-9]*)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    /// One of `+ - * /`
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),

    /// `(`
    #[token("(")]
    LeftParen,

    /// `)`
    #[token(")")]
    RightParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "{value}"),
            TokenKind::Operator(op) => write!(f, "{op}"),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
        }
    }
}

/// A token together with where it was found in the expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What was recognised
    pub kind: TokenKind,
    /// Where it was recognised
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The operator carried by this token, if it is one
    pub fn as_operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
