//! Error types for path construction
//!
//! Integrated with the global logging code registry.

use crate::lexical::LexerError;
use crate::logging::codes;
use crate::utils::Span;
use thiserror::Error;

/// Result type for path parsing
pub type PathResult<T> = Result<T, PathError>;

/// Every way parsing a path expression can fail
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Expression or origin was not a string
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A `/` closed an element that never received a name
    #[error("Element at {span} has no name")]
    IncompleteElement { span: Span },

    /// A key filter used `<` or `>`
    #[error("Unsupported operator '{operator}' for key '{key}' at {span}, only '=' is supported")]
    UnsupportedOperator {
        operator: char,
        key: String,
        span: Span,
    },

    #[error("Duplicate key '{key}' in element '{element}' at {span}")]
    DuplicateKey {
        key: String,
        element: String,
        span: Span,
    },

    /// A key name was never given a value
    #[error("Key filter '{key}' at {span} has no value")]
    HangingKeyFilter { key: String, span: Span },

    /// A `[` was never closed
    #[error("Key filter opened at {span} is never closed")]
    UnterminatedXPath { span: Span },

    #[error("Unexpected '{token}' at {span}")]
    UnexpectedToken { token: String, span: Span },

    /// Two names for one element with no `/` between them (strict mode)
    #[error("Element name '{second}' at {span} follows '{first}' without a '/'")]
    AmbiguousElementName {
        first: String,
        second: String,
        span: Span,
    },

    #[error("Too many path elements (max {limit})")]
    TooManyElements { limit: usize },

    #[error("Too many keys in element '{element}' (max {limit})")]
    TooManyKeys { element: String, limit: usize },

    #[error("Origin '{supplied}' rejected, expected '{required}'")]
    OriginRejected { supplied: String, required: String },

    #[error(transparent)]
    Lexical(#[from] LexerError),
}

/// Fieldless error category for matching without destructuring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    IncompleteElement,
    UnsupportedOperator,
    DuplicateKey,
    HangingKeyFilter,
    UnterminatedXPath,
    UnexpectedToken,
    AmbiguousElementName,
    TooManyElements,
    TooManyKeys,
    OriginRejected,
    Lexical,
}

impl PathError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::InvalidInput { .. } => ErrorKind::InvalidInput,
            PathError::IncompleteElement { .. } => ErrorKind::IncompleteElement,
            PathError::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
            PathError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            PathError::HangingKeyFilter { .. } => ErrorKind::HangingKeyFilter,
            PathError::UnterminatedXPath { .. } => ErrorKind::UnterminatedXPath,
            PathError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            PathError::AmbiguousElementName { .. } => ErrorKind::AmbiguousElementName,
            PathError::TooManyElements { .. } => ErrorKind::TooManyElements,
            PathError::TooManyKeys { .. } => ErrorKind::TooManyKeys,
            PathError::OriginRejected { .. } => ErrorKind::OriginRejected,
            PathError::Lexical(_) => ErrorKind::Lexical,
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            PathError::InvalidInput { .. } => codes::input::INVALID_INPUT,
            PathError::IncompleteElement { .. } => codes::path::INCOMPLETE_ELEMENT,
            PathError::UnsupportedOperator { .. } => codes::path::UNSUPPORTED_OPERATOR,
            PathError::DuplicateKey { .. } => codes::path::DUPLICATE_KEY,
            PathError::HangingKeyFilter { .. } => codes::path::HANGING_KEY_FILTER,
            PathError::UnterminatedXPath { .. } => codes::path::UNTERMINATED_XPATH,
            PathError::UnexpectedToken { .. } => codes::path::UNEXPECTED_TOKEN,
            PathError::AmbiguousElementName { .. } => codes::path::AMBIGUOUS_ELEMENT_NAME,
            PathError::TooManyElements { .. } => codes::path::TOO_MANY_ELEMENTS,
            PathError::TooManyKeys { .. } => codes::path::TOO_MANY_KEYS,
            PathError::OriginRejected { .. } => codes::origin::ORIGIN_REJECTED,
            PathError::Lexical(e) => e.error_code(),
        }
    }

    /// Source location of the failure, where one exists
    pub fn span(&self) -> Option<Span> {
        match self {
            PathError::IncompleteElement { span }
            | PathError::UnsupportedOperator { span, .. }
            | PathError::DuplicateKey { span, .. }
            | PathError::HangingKeyFilter { span, .. }
            | PathError::UnterminatedXPath { span }
            | PathError::UnexpectedToken { span, .. }
            | PathError::AmbiguousElementName { span, .. } => Some(*span),
            PathError::Lexical(e) => e.span(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Position;

    #[test]
    fn test_kind_and_code() {
        let err = PathError::HangingKeyFilter {
            key: "a".to_string(),
            span: Span::dummy(),
        };
        assert_eq!(err.kind(), ErrorKind::HangingKeyFilter);
        assert_eq!(err.error_code(), codes::path::HANGING_KEY_FILTER);

        let err = PathError::invalid_input("xpath must be a string");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.error_code().as_str(), "E001");
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_lexical_errors_keep_their_code() {
        let err: PathError = LexerError::TooManyTokens { count: 9 }.into();
        assert_eq!(err.kind(), ErrorKind::Lexical);
        assert_eq!(err.error_code(), codes::lexical::TOO_MANY_TOKENS);
    }

    #[test]
    fn test_display_includes_location() {
        let span = Span::new(Position::new(9, 1, 10), Position::new(10, 1, 11));
        let err = PathError::UnsupportedOperator {
            operator: '>',
            key: "rate".to_string(),
            span,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported operator '>' for key 'rate' at 1:10-11, only '=' is supported"
        );
        assert_eq!(err.span(), Some(span));
    }
}
