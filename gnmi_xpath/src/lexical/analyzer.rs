//! Core tokenizer for path expressions
//!
//! Scans an expression left to right into delimiters, text runs, and
//! whitespace runs. The only context it keeps is whether a key filter is
//! open, which decides whether `/` is a delimiter or part of a value.

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{is_quote_char, Delimiter, Token, TokenStream};
use crate::utils::{Position, Span, Spanned};
use crate::{log_debug, log_rejection, log_success};
use std::iter::Peekable;
use std::str::Chars;

/// Lexical analysis errors with compile-time security boundaries
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerError {
    #[error("Unterminated {quote} quote starting at {position}")]
    UnterminatedQuote { quote: char, position: Position },

    #[error("Path expression too long: {length} bytes (max {MAX_XPATH_LENGTH})")]
    XPathTooLong { length: usize },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },

    #[error("Text too long at {position}: {length} bytes (max {MAX_TEXT_LENGTH})")]
    TextTooLong { length: usize, position: Position },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::UnterminatedQuote { .. } => codes::lexical::UNTERMINATED_QUOTE,
            LexerError::XPathTooLong { .. } => codes::lexical::XPATH_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
            LexerError::TextTooLong { .. } => codes::lexical::TEXT_TOO_LONG,
        }
    }

    /// Source location of the failure, where one exists
    pub fn span(&self) -> Option<Span> {
        match self {
            LexerError::UnterminatedQuote { position, .. }
            | LexerError::TextTooLong { position, .. } => Some(Span::point(*position)),
            _ => None,
        }
    }
}

/// Per-analysis token statistics
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub delimiter_tokens: usize,
    pub text_tokens: usize,
    pub whitespace_tokens: usize,

    // Only collected with detailed metrics enabled
    pub quoted_literals: usize,
    pub max_text_length: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        match token {
            Token::Whitespace => {
                if !preferences.include_whitespace_in_counts {
                    return;
                }
                self.whitespace_tokens += 1;
            }
            Token::Delimiter(_) => self.delimiter_tokens += 1,
            Token::Text(text) => {
                self.text_tokens += 1;
                if preferences.collect_detailed_metrics {
                    if token.is_quoted() {
                        self.quoted_literals += 1;
                    }
                    self.max_text_length = self.max_text_length.max(text.len());
                }
            }
        }
        self.total_tokens += 1;
    }
}

/// Path expression tokenizer
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Tokenize an expression whose surrounding `/` have already been removed
    pub fn tokenize(&mut self, xpath: &str) -> Result<TokenStream, LexerError> {
        self.metrics = LexicalMetrics::default();

        if xpath.len() > MAX_XPATH_LENGTH {
            return Err(self.fail(
                LexerError::XPathTooLong {
                    length: xpath.len(),
                },
                "Path expression exceeds length limit",
            ));
        }

        log_debug!("Starting lexical analysis",
            "xpath" => xpath,
            "byte_count" => xpath.len(),
            "max_tokens_allowed" => MAX_TOKEN_COUNT
        );

        let mut tokens = Vec::new();
        let mut chars = xpath.chars().peekable();
        let mut pos = Position::start();
        let mut in_filter = false;

        while let Some(&ch) = chars.peek() {
            if tokens.len() >= MAX_TOKEN_COUNT {
                return Err(self.fail(
                    LexerError::TooManyTokens {
                        count: tokens.len(),
                    },
                    "Token limit exceeded",
                ));
            }

            let start = pos;
            let token = if ch.is_whitespace() {
                while let Some(&c) = chars.peek() {
                    if !c.is_whitespace() {
                        break;
                    }
                    chars.next();
                    pos = pos.advance(c);
                }
                Token::Whitespace
            } else if let Some(delimiter) = delimiter_at(ch, in_filter) {
                chars.next();
                pos = pos.advance(ch);
                match delimiter {
                    Delimiter::OpenBracket => in_filter = true,
                    Delimiter::CloseBracket => in_filter = false,
                    _ => {}
                }
                Token::Delimiter(delimiter)
            } else {
                match scan_text(&mut chars, &mut pos, in_filter) {
                    Ok(text) => Token::Text(text),
                    Err(error) => return Err(self.fail(error, "Lexical analysis failed")),
                }
            };

            self.metrics.record_token(&token, &self.preferences);
            tokens.push(Spanned::new(token, Span::new(start, pos)));
        }

        let token_stream = TokenStream::new(tokens);

        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed successfully",
            "token_count" => token_stream.len(),
            "significant_tokens" => token_stream.significant_len(),
            "delimiters" => self.metrics.delimiter_tokens,
            "text" => self.metrics.text_tokens,
            "quoted_literals" => self.metrics.quoted_literals,
            "max_text_length" => self.metrics.max_text_length
        );

        Ok(token_stream)
    }

    /// Get current metrics
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    fn fail(&self, error: LexerError, message: &str) -> LexerError {
        match error.span() {
            Some(span) if self.preferences.include_position_in_errors => {
                log_rejection!(error.error_code(), message,
                    span = span,
                    "error" => &error
                );
            }
            _ => {
                log_rejection!(error.error_code(), message,
                    "error" => &error
                );
            }
        }
        error
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// `/` is only a delimiter outside an open filter
fn delimiter_at(ch: char, in_filter: bool) -> Option<Delimiter> {
    match Delimiter::from_char(ch)? {
        Delimiter::Slash if in_filter => None,
        delimiter => Some(delimiter),
    }
}

/// Scan one text run. A run that opens with a quote takes the quoted
/// section whole, closing quote included, so it may contain delimiters and
/// whitespace. A quote anywhere else in the run is an ordinary character.
fn scan_text(
    chars: &mut Peekable<Chars<'_>>,
    pos: &mut Position,
    in_filter: bool,
) -> Result<String, LexerError> {
    let start = *pos;
    let mut text = String::new();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() || delimiter_at(ch, in_filter).is_some() {
            break;
        }

        let opens_literal = text.is_empty() && is_quote_char(ch);
        chars.next();
        text.push(ch);
        let quote_start = *pos;
        *pos = pos.advance(ch);

        if opens_literal {
            loop {
                match chars.next() {
                    Some(c) => {
                        text.push(c);
                        *pos = pos.advance(c);
                        if c == ch {
                            break;
                        }
                    }
                    None => {
                        return Err(LexerError::UnterminatedQuote {
                            quote: ch,
                            position: quote_start,
                        })
                    }
                }
            }
        }
    }

    if text.len() > MAX_TEXT_LENGTH {
        return Err(LexerError::TextTooLong {
            length: text.len(),
            position: start,
        });
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn values(xpath: &str) -> Vec<Token> {
        LexicalAnalyzer::new()
            .tokenize(xpath)
            .unwrap()
            .into_iter()
            .map(|t| t.value)
            .collect()
    }

    fn text(s: &str) -> Token {
        Token::Text(s.to_string())
    }

    fn delim(ch: char) -> Token {
        Token::Delimiter(Delimiter::from_char(ch).unwrap())
    }

    #[test]
    fn test_simple_path() {
        assert_eq!(
            values("interfaces/interface"),
            vec![text("interfaces"), delim('/'), text("interface")]
        );
    }

    #[test]
    fn test_filter_tokens() {
        assert_eq!(
            values("intf[name=eth0]"),
            vec![
                text("intf"),
                delim('['),
                text("name"),
                delim('='),
                text("eth0"),
                delim(']'),
            ]
        );
    }

    #[test]
    fn test_slash_inside_filter_is_text() {
        assert_eq!(
            values("if[name=Gi0/0/0]/state"),
            vec![
                text("if"),
                delim('['),
                text("name"),
                delim('='),
                text("Gi0/0/0"),
                delim(']'),
                delim('/'),
                text("state"),
            ]
        );
    }

    #[test]
    fn test_quoted_literal_keeps_quotes_and_contents() {
        let tokens = values("a[k='x] y=z']");
        assert_eq!(tokens[4], text("'x] y=z'"));
        assert_eq!(tokens[5], delim(']'));
        assert_eq!(tokens.len(), 6);

        let tokens = values("a[k=\"eth/0\"]");
        assert_eq!(tokens[4], text("\"eth/0\""));
    }

    #[test]
    fn test_whitespace_is_its_own_token() {
        assert_eq!(
            values("a[k=1  and j=2]"),
            vec![
                text("a"),
                delim('['),
                text("k"),
                delim('='),
                text("1"),
                Token::Whitespace,
                text("and"),
                Token::Whitespace,
                text("j"),
                delim('='),
                text("2"),
                delim(']'),
            ]
        );
    }

    #[test]
    fn test_relational_operators_are_delimiters() {
        let tokens = values("intf[rate>5]");
        assert_eq!(tokens[3], Token::Delimiter(Delimiter::GreaterThan));
        let tokens = values("intf[rate<5]");
        assert_eq!(tokens[3], Token::Delimiter(Delimiter::LessThan));
    }

    #[test]
    fn test_token_spans() {
        let source = "ab[k=v]/c";
        let stream = LexicalAnalyzer::new().tokenize(source).unwrap();
        let last = stream.all_tokens().last().unwrap();
        assert_eq!(last.span.slice(source), "c");
        assert_eq!(last.span.start.column, 9);
        for token in stream.all_tokens() {
            assert_eq!(token.span.slice(source), token.value.to_string());
        }
    }

    #[test]
    fn test_empty_input() {
        let stream = LexicalAnalyzer::new().tokenize("").unwrap();
        assert!(stream.is_empty());
    }

    #[test]
    fn test_unterminated_quote() {
        let err = LexicalAnalyzer::new().tokenize("a[k='eth0]").unwrap_err();
        assert_matches!(err, LexerError::UnterminatedQuote { quote: '\'', .. });
        assert_eq!(err.error_code(), codes::lexical::UNTERMINATED_QUOTE);
        assert_eq!(err.span().unwrap().start.column, 5);
    }

    #[test]
    fn test_inner_quote_is_ordinary_text() {
        assert_eq!(
            values("intf[desc=it's]"),
            vec![
                text("intf"),
                delim('['),
                text("desc"),
                delim('='),
                text("it's"),
                delim(']'),
            ]
        );
        assert_eq!(values("a'b/c"), vec![text("a'b"), delim('/'), text("c")]);
        assert_eq!(values("x[len=5']")[4], text("5'"));
    }

    #[test]
    fn test_quote_after_literal_continues_run() {
        let tokens = values("x[k='a\"b'\"c\"]");
        assert_eq!(tokens[4], text("'a\"b'\"c\""));
        assert_eq!(tokens[5], delim(']'));
    }

    #[test]
    fn test_xpath_too_long() {
        let long = "a".repeat(MAX_XPATH_LENGTH + 1);
        let err = LexicalAnalyzer::new().tokenize(&long).unwrap_err();
        assert_matches!(err, LexerError::XPathTooLong { length } if length == MAX_XPATH_LENGTH + 1);
    }

    #[test]
    fn test_text_too_long() {
        let long = format!("a/{}", "b".repeat(MAX_TEXT_LENGTH + 1));
        let err = LexicalAnalyzer::new().tokenize(&long).unwrap_err();
        assert_matches!(err, LexerError::TextTooLong { position, .. } if position.column == 3);
    }

    #[test]
    fn test_metrics() {
        let mut analyzer = LexicalAnalyzer::with_preferences(LexicalPreferences {
            collect_detailed_metrics: true,
            include_whitespace_in_counts: false,
            include_position_in_errors: true,
        });
        analyzer.tokenize("a[k='v' and j=w]").unwrap();
        let metrics = analyzer.metrics();
        assert_eq!(metrics.delimiter_tokens, 4);
        assert_eq!(metrics.text_tokens, 6);
        assert_eq!(metrics.whitespace_tokens, 0);
        assert_eq!(metrics.total_tokens, 10);
        assert_eq!(metrics.quoted_literals, 1);
        assert_eq!(metrics.max_text_length, 3);
    }
}
