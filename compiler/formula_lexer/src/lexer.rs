//! Lexer implementation for arithmetic formulas
//! Converts an expression string into a stream of tokens for the converter

use logos::{Logos, SpannedIter};

use crate::error::LexError;
use crate::token::{Span, Token, TokenKind};

/// Iterator over the tokens of a single expression.
///
/// Yields `Err` for every run of characters that is not a recognised lexeme.
/// Use [`tokenize`] to stop at the first such error.
pub struct Lexer<'a> {
    /// The expression being lexed
    source: &'a str,
    /// The inner logos lexer
    inner: SpannedIter<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given expression
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: TokenKind::lexer(source).spanned(),
        }
    }

    /// The expression being lexed
    pub fn source(&self) -> &'a str {
        self.source
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (result, range) = self.inner.next()?;
        let span: Span = range.into();

        let item = match result {
            Ok(kind) => {
                #[cfg(feature = "logging")]
                log::trace!("token {kind:?} at {span}");
                Ok(Token::new(kind, span))
            }
            Err(()) => {
                #[cfg(feature = "logging")]
                log::trace!(
                    "unrecognised input {:?} at {span}",
                    &self.source[span.start..span.end]
                );
                Err(LexError::InvalidCharacters {
                    expression: self.source.to_string(),
                    span,
                })
            }
        };
        Some(item)
    }
}

/// Tokenize a whole expression.
///
/// The tokens must cover the input contiguously: any character that is
/// neither whitespace nor part of a number, operator or parenthesis fails the
/// whole call with [`LexError::InvalidCharacters`].
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(expression).collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "logging")]
    log::debug!("tokenized {expression:?} into {} tokens", tokens.len());

    Ok(tokens)
}
