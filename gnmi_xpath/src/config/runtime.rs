// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to collect per-kind token counts
    pub collect_detailed_metrics: bool,

    /// Whether whitespace tokens count towards the token metrics
    pub include_whitespace_in_counts: bool,

    /// Whether to show position information in error log records
    pub include_position_in_errors: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: true,
            include_whitespace_in_counts: false,
            include_position_in_errors: true,
        }
    }
}

impl LexicalPreferences {
    /// Defaults overridden by any `GNMI_XPATH_LEXICAL_*` variables that are set
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            collect_detailed_metrics: env_flag(
                env_vars::LEXICAL_DETAILED_METRICS,
                defaults.collect_detailed_metrics,
            ),
            include_whitespace_in_counts: env_flag(
                env_vars::LEXICAL_INCLUDE_WHITESPACE,
                defaults.include_whitespace_in_counts,
            ),
            include_position_in_errors: env_flag(
                env_vars::LEXICAL_INCLUDE_POSITIONS,
                defaults.include_position_in_errors,
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserPreferences {
    /// Fail when a second bare name appears before the next `/` instead of
    /// letting the last one win
    pub strict_element_names: bool,

    /// Whether to log every state transition at debug level
    pub trace_transitions: bool,
}

impl Default for ParserPreferences {
    fn default() -> Self {
        Self {
            strict_element_names: false,
            trace_transitions: false,
        }
    }
}

impl ParserPreferences {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            strict_element_names: env_flag(
                env_vars::PARSER_STRICT_ELEMENT_NAMES,
                defaults.strict_element_names,
            ),
            trace_transitions: env_flag(
                env_vars::PARSER_TRACE_TRANSITIONS,
                defaults.trace_transitions,
            ),
        }
    }
}

/// Fixed defaults unless built with [`RuntimeConfig::from_env`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub parser: ParserPreferences,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self {
            lexical: LexicalPreferences::from_env(),
            parser: ParserPreferences::from_env(),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    parse_flag(env::var(name).ok().as_deref()).unwrap_or(default)
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "GNMI_XPATH_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_INCLUDE_WHITESPACE: &str = "GNMI_XPATH_LEXICAL_INCLUDE_WHITESPACE";
    pub const LEXICAL_INCLUDE_POSITIONS: &str = "GNMI_XPATH_LEXICAL_INCLUDE_POSITIONS";

    // Parser
    pub const PARSER_STRICT_ELEMENT_NAMES: &str = "GNMI_XPATH_STRICT_ELEMENT_NAMES";
    pub const PARSER_TRACE_TRANSITIONS: &str = "GNMI_XPATH_TRACE_TRANSITIONS";
}
