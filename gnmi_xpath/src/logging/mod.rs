//! Logging module for gnmi_xpath
//!
//! Coded, structured log records emitted through the `log` facade. The
//! library never installs a logger; binaries choose one (the CLI uses
//! `env_logger`).

pub mod codes;
pub mod macros;

use crate::config::compile_time::logging::MAX_LOGGED_VALUE_LENGTH;
use crate::utils::Span;

// Re-export main types
pub use codes::Code;
pub use log::Level as LogLevel;

/// Target used for every record this crate emits
pub const LOG_TARGET: &str = "gnmi_xpath";

/// Whether debug records would be emitted (used by log_debug!)
pub fn debug_enabled() -> bool {
    log::log_enabled!(target: LOG_TARGET, log::Level::Debug)
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log a rejected expression with context (used by log_rejection! macro)
pub fn log_rejection_with_context(
    code: Code,
    message: &str,
    span: Option<Span>,
    context: &[(&str, String)],
) {
    let line = format_event(Some(code), message, span, context);
    log::debug!(target: LOG_TARGET, "{}", line);
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: &[(&str, String)]) {
    let line = format_event(Some(code), message, None, context);
    log::info!(target: LOG_TARGET, "{}", line);
}

/// Log uncoded message at the given level (used by log_info!, log_warning!, log_debug!)
pub fn log_with_context(level: LogLevel, message: &str, context: &[(&str, String)]) {
    let line = format_event(None, message, None, context);
    log::log!(target: LOG_TARGET, level, "{}", line);
}

/// Render one record as `[CODE] message at L:C key=value ...`
pub fn format_event(
    code: Option<Code>,
    message: &str,
    span: Option<Span>,
    context: &[(&str, String)],
) -> String {
    let mut line = String::new();

    if let Some(code) = code {
        line.push_str(&format!("[{}] ", code));
    }
    line.push_str(message);

    if let Some(span) = span {
        line.push_str(&format!(" at {}", span.start));
    }

    for (key, value) in context {
        line.push_str(&format!(" {}={}", key, truncate_value(value)));
    }

    line
}

/// Cargo-style multi-line report for an error code, used by front ends
pub fn format_error_report(code: Code, message: &str) -> String {
    format!(
        "error[{}]: {}\n  = note: {}\n  = help: {}",
        code,
        message,
        codes::get_description(code.as_str()),
        codes::get_action(code.as_str())
    )
}

fn truncate_value(value: &str) -> std::borrow::Cow<'_, str> {
    if value.len() <= MAX_LOGGED_VALUE_LENGTH {
        return std::borrow::Cow::Borrowed(value);
    }

    let mut end = MAX_LOGGED_VALUE_LENGTH;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    std::borrow::Cow::Owned(format!("{}...", &value[..end]))
}
