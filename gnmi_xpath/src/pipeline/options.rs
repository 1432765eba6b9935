use crate::config::runtime::{LexicalPreferences, ParserPreferences, RuntimeConfig};
use crate::path::{OriginPolicy, PassThrough};
use std::sync::Arc;

/// Preferences and origin policy for one or more parses
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub lexical: LexicalPreferences,
    pub parser: ParserPreferences,
    pub origin_policy: Arc<dyn OriginPolicy>,
}

impl ParseOptions {
    /// Default preferences with the pass-through origin policy
    pub fn new() -> Self {
        Self::from_runtime_config(RuntimeConfig::default())
    }

    /// Preferences taken from `GNMI_XPATH_*` environment variables
    pub fn from_env() -> Self {
        Self::from_runtime_config(RuntimeConfig::from_env())
    }

    pub fn from_runtime_config(config: RuntimeConfig) -> Self {
        Self {
            lexical: config.lexical,
            parser: config.parser,
            origin_policy: Arc::new(PassThrough),
        }
    }

    pub fn with_origin_policy(mut self, policy: impl OriginPolicy + 'static) -> Self {
        self.origin_policy = Arc::new(policy);
        self
    }

    pub fn with_strict_element_names(mut self, strict: bool) -> Self {
        self.parser.strict_element_names = strict;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
