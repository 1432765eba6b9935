//! Type-safe logging macros using Code types with Display support

// ============================================================================
// REJECTION LOGGING MACROS
// ============================================================================

/// Log a rejected expression with its Code. The error itself goes back to
/// the caller, so the record is emitted at debug level.
#[macro_export]
macro_rules! log_rejection {
    ($code:expr, $message:expr) => {
        if $crate::logging::debug_enabled() {
            $crate::logging::log_rejection_with_context($code, $message, None, &[])
        }
    };

    ($code:expr, $message:expr, span = $span:expr) => {
        if $crate::logging::debug_enabled() {
            $crate::logging::log_rejection_with_context($code, $message, Some($span), &[])
        }
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::debug_enabled() {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::log_rejection_with_context($code, $message, None, &context_strings)
        }
    };

    ($code:expr, $message:expr, span = $span:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::debug_enabled() {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::log_rejection_with_context($code, $message, Some($span), &context_strings)
        }
    };
}

// ============================================================================
// SUCCESS LOGGING MACROS
// ============================================================================

/// Log success with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        $crate::logging::log_success_with_context($code, $message, &[])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::log_success_with_context($code, $message, &context_strings)
        }
    };
}

// ============================================================================
// LEVELED LOGGING MACROS
// ============================================================================

/// Log informational message - accepts Display types for context values
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::log_with_context($crate::logging::LogLevel::Info, $message, &[])
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::log_with_context($crate::logging::LogLevel::Info, $message, &context_strings)
        }
    };
}

/// Log warning message - accepts Display types for context values
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        $crate::logging::log_with_context($crate::logging::LogLevel::Warn, $message, &[])
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::log_with_context($crate::logging::LogLevel::Warn, $message, &context_strings)
        }
    };
}

/// Log debug message - context is only formatted when debug output is enabled
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        if $crate::logging::debug_enabled() {
            $crate::logging::log_with_context($crate::logging::LogLevel::Debug, $message, &[])
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::debug_enabled() {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::log_with_context($crate::logging::LogLevel::Debug, $message, &context_strings)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::logging::codes;
    use crate::utils::Span;

    #[test]
    fn test_macros_accept_display_values() {
        let token_count: usize = 12;

        log_rejection!(codes::path::DUPLICATE_KEY, "Duplicate key",
            "key" => "name",
            "position" => token_count
        );
        log_rejection!(codes::path::UNTERMINATED_XPATH, "Unterminated", span = Span::dummy());
        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenized",
            "tokens" => token_count
        );
        log_info!("Parsing", "xpath" => "a/b");
        log_warning!("Ambiguous element name", "name" => 'x');
        log_debug!("Transition", "in_filter" => true);
        log_debug!("No context");
    }
}
