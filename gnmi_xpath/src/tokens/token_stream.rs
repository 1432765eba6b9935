//! Token stream produced by the tokenizer
//!
//! Keeps every token with its original span, and an index of the
//! significant (non-whitespace) ones that the path builder consumes.

use crate::{tokens::token::*, utils::Spanned};

/// A token with span information
pub type SpannedToken = Spanned<Token>;

/// Ordered tokens of one expression
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    /// All tokens (including whitespace) with original spans
    all_tokens: Vec<SpannedToken>,
    /// Indices into all_tokens for significant tokens
    significant_indices: Vec<usize>,
}

impl TokenStream {
    pub fn new(tokens: Vec<SpannedToken>) -> Self {
        let significant_indices = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.value.is_significant())
            .map(|(i, _)| i)
            .collect();

        Self {
            all_tokens: tokens,
            significant_indices,
        }
    }

    /// Number of tokens including whitespace
    pub fn len(&self) -> usize {
        self.all_tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_tokens.is_empty()
    }

    /// Number of tokens the path builder will see
    pub fn significant_len(&self) -> usize {
        self.significant_indices.len()
    }

    pub fn all_tokens(&self) -> &[SpannedToken] {
        &self.all_tokens
    }

    /// Consume the stream, yielding only significant tokens
    pub fn into_significant(self) -> impl Iterator<Item = SpannedToken> {
        self.all_tokens
            .into_iter()
            .filter(|token| token.value.is_significant())
    }
}

impl IntoIterator for TokenStream {
    type Item = SpannedToken;
    type IntoIter = std::vec::IntoIter<SpannedToken>;

    /// Iterates every token, whitespace included
    fn into_iter(self) -> Self::IntoIter {
        self.all_tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a SpannedToken;
    type IntoIter = std::slice::Iter<'a, SpannedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.all_tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::tokenize;

    #[test]
    fn test_significant_filtering() {
        let stream = tokenize("a[k =v]").unwrap();
        assert_eq!(stream.len(), 7);
        assert_eq!(stream.significant_len(), 6);

        let consumed: Vec<Token> = stream.into_significant().map(|t| t.value).collect();
        assert_eq!(consumed.len(), 6);
        assert!(consumed.iter().all(Token::is_significant));
        assert_eq!(consumed[3], Token::Delimiter(Delimiter::Equals));
    }

    #[test]
    fn test_spans_are_preserved() {
        let source = "a[k =v]";
        let stream = tokenize(source).unwrap();
        let equals = stream
            .into_significant()
            .find(|t| t.value == Token::Delimiter(Delimiter::Equals))
            .unwrap();
        assert_eq!(equals.span.slice(source), "=");
        assert_eq!(equals.span.start.column, 5);
    }

    #[test]
    fn test_borrowed_iteration_keeps_whitespace() {
        let stream = tokenize("a / b").unwrap();
        let whitespace = (&stream)
            .into_iter()
            .filter(|t| t.value == Token::Whitespace)
            .count();
        assert_eq!(whitespace, 2);
        assert_eq!(stream.all_tokens().len(), 5);
    }

    #[test]
    fn test_empty_stream() {
        let stream = TokenStream::default();
        assert!(stream.is_empty());
        assert_eq!(stream.significant_len(), 0);
        assert_eq!(stream.into_iter().count(), 0);
    }
}
