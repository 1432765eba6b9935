//! Lexical analysis module
//!
//! Tokenizes path expressions under compile-time security limits and
//! reports through the global logging macros.

pub mod analyzer;

use crate::tokens::TokenStream;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics};

/// Tokenize with default preferences
pub fn tokenize(xpath: &str) -> Result<TokenStream, LexerError> {
    LexicalAnalyzer::new().tokenize(xpath)
}
