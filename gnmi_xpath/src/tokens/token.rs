//! Token definitions for path expressions
//!
//! A token is either one punctuation delimiter, a run of text (names, key
//! names, the `and` junction, unquoted or quoted values), or a whitespace
//! run that consumers skip.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-character punctuation recognised by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delimiter {
    /// `/` - separates path elements
    Slash,
    /// `[` - opens a key filter
    OpenBracket,
    /// `]` - closes a key filter
    CloseBracket,
    /// `=` - equality operator
    Equals,
    /// `<` - unsupported comparison
    LessThan,
    /// `>` - unsupported comparison
    GreaterThan,
}

impl Delimiter {
    /// Classify a character as a delimiter
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '/' => Some(Self::Slash),
            '[' => Some(Self::OpenBracket),
            ']' => Some(Self::CloseBracket),
            '=' => Some(Self::Equals),
            '<' => Some(Self::LessThan),
            '>' => Some(Self::GreaterThan),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Slash => '/',
            Self::OpenBracket => '[',
            Self::CloseBracket => ']',
            Self::Equals => '=',
            Self::LessThan => '<',
            Self::GreaterThan => '>',
        }
    }

    /// Comparison operators other than `=`
    pub fn is_relational(&self) -> bool {
        matches!(self, Self::LessThan | Self::GreaterThan)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Path expression token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// One punctuation character
    Delimiter(Delimiter),
    /// Name, keyword, unquoted value, or quoted literal (quotes retained)
    Text(String),
    /// Whitespace run, carries no text
    Whitespace,
}

/// The junction keyword allowed between key filters in one bracket group
pub const AND_KEYWORD: &str = "and";

impl Token {
    /// Whitespace tokens are skipped by the path builder
    pub fn is_significant(&self) -> bool {
        !matches!(self, Self::Whitespace)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this is a text token enclosed in matching quotes
    pub fn is_quoted(&self) -> bool {
        self.as_text().map(is_quoted_literal).unwrap_or(false)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delimiter(d) => write!(f, "{}", d),
            Self::Text(text) => write!(f, "{}", text),
            Self::Whitespace => write!(f, " "),
        }
    }
}

/// Quote characters that may enclose a literal
pub fn is_quote_char(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

/// Text enclosed in one pair of matching quotes
pub fn is_quoted_literal(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => is_quote_char(first) && first == last,
        _ => false,
    }
}

/// Remove a single pair of surrounding matching quotes, if present
pub fn strip_quotes(text: &str) -> &str {
    if is_quoted_literal(text) {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
