//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// Input validation error codes
pub mod input {
    use super::Code;

    pub const INVALID_INPUT: Code = Code::new("E001");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const UNTERMINATED_QUOTE: Code = Code::new("E020");
    pub const XPATH_TOO_LONG: Code = Code::new("E021");
    pub const TOO_MANY_TOKENS: Code = Code::new("E022");
    pub const TEXT_TOO_LONG: Code = Code::new("E023");
}

/// Path construction error codes
pub mod path {
    use super::Code;

    pub const INCOMPLETE_ELEMENT: Code = Code::new("E040");
    pub const UNSUPPORTED_OPERATOR: Code = Code::new("E041");
    pub const DUPLICATE_KEY: Code = Code::new("E042");
    pub const HANGING_KEY_FILTER: Code = Code::new("E043");
    pub const UNTERMINATED_XPATH: Code = Code::new("E044");
    pub const UNEXPECTED_TOKEN: Code = Code::new("E045");
    pub const AMBIGUOUS_ELEMENT_NAME: Code = Code::new("E046");
    pub const TOO_MANY_ELEMENTS: Code = Code::new("E047");
    pub const TOO_MANY_KEYS: Code = Code::new("E048");
}

/// Origin resolution error codes
pub mod origin {
    use super::Code;

    pub const ORIGIN_REJECTED: Code = Code::new("E060");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const PATH_CONSTRUCTION_COMPLETE: Code = Code::new("I040");
    pub const XPATH_PARSED: Code = Code::new("I050");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "E001",
                "Input",
                Severity::High,
                "XPath or origin argument is not a string",
                "Pass the expression and origin as UTF-8 strings",
            ),
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                "Quoted literal is missing its closing quote",
                "Close the literal with the same quote character that opened it",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::Critical,
                "XPath exceeds maximum length",
                "Shorten the expression or raise max_xpath_length",
            ),
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::Critical,
                "XPath produced too many tokens",
                "Shorten the expression or raise max_token_count",
            ),
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::High,
                "Name or value exceeds maximum length",
                "Shorten the name or raise max_text_length",
            ),
            ErrorMetadata::new(
                "E040",
                "Path",
                Severity::High,
                "Path element has no name before '/'",
                "Remove the doubled '/' or give the element a name",
            ),
            ErrorMetadata::new(
                "E041",
                "Path",
                Severity::High,
                "Only '=' is supported inside key filters",
                "Rewrite the filter as an equality",
            ),
            ErrorMetadata::new(
                "E042",
                "Path",
                Severity::High,
                "Key appears twice in one element",
                "Remove the repeated key filter",
            ),
            ErrorMetadata::new(
                "E043",
                "Path",
                Severity::High,
                "Key filter has no value",
                "Complete the filter as key=value",
            ),
            ErrorMetadata::new(
                "E044",
                "Path",
                Severity::High,
                "Key filter bracket is never closed",
                "Add the closing ']'",
            ),
            ErrorMetadata::new(
                "E045",
                "Path",
                Severity::High,
                "Token is not valid at this position",
                "Check operator placement in the expression",
            ),
            ErrorMetadata::new(
                "E046",
                "Path",
                Severity::Medium,
                "More than one name given for a single element",
                "Separate elements with '/' or disable strict element names",
            ),
            ErrorMetadata::new(
                "E047",
                "Path",
                Severity::Critical,
                "Path has too many elements",
                "Shorten the path or raise max_elements",
            ),
            ErrorMetadata::new(
                "E048",
                "Path",
                Severity::Critical,
                "Element has too many key filters",
                "Reduce the filters or raise max_keys_per_element",
            ),
            ErrorMetadata::new(
                "E060",
                "Origin",
                Severity::Medium,
                "Origin policy rejected the supplied origin",
                "Omit the origin or choose a policy that accepts it",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_code_has_metadata() {
        let codes = [
            input::INVALID_INPUT,
            lexical::UNTERMINATED_QUOTE,
            lexical::XPATH_TOO_LONG,
            lexical::TOO_MANY_TOKENS,
            lexical::TEXT_TOO_LONG,
            path::INCOMPLETE_ELEMENT,
            path::UNSUPPORTED_OPERATOR,
            path::DUPLICATE_KEY,
            path::HANGING_KEY_FILTER,
            path::UNTERMINATED_XPATH,
            path::UNEXPECTED_TOKEN,
            path::AMBIGUOUS_ELEMENT_NAME,
            path::TOO_MANY_ELEMENTS,
            path::TOO_MANY_KEYS,
            origin::ORIGIN_REJECTED,
        ];

        for code in codes {
            let metadata = get_error_metadata(code.as_str());
            assert!(metadata.is_some(), "missing metadata for {}", code);
            assert_ne!(get_description(code.as_str()), "Unknown error");
        }
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("E999"), "Unknown error");
        assert_eq!(get_category("E999"), "Unknown");
        assert_eq!(get_severity("E999"), Severity::Medium);
        assert_eq!(get_action("E999"), "No specific action available");
    }

    #[test]
    fn test_categories() {
        assert_eq!(get_category(path::DUPLICATE_KEY.as_str()), "Path");
        assert_eq!(get_category(lexical::UNTERMINATED_QUOTE.as_str()), "Lexical");
        assert_eq!(
            get_severity(lexical::XPATH_TOO_LONG.as_str()),
            Severity::Critical
        );
    }
}
