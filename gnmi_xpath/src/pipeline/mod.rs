//! Public parsing entry points
//!
//! Trims the expression, tokenizes it, builds the path, then applies the
//! origin policy. The first failure aborts the parse.
//!
//! Error spans are relative to the trimmed expression returned by
//! [`trim_xpath`].

mod batch;
mod options;

pub use batch::{parse_many, BatchEntry, BatchResults};
pub use options::ParseOptions;

use crate::lexical::LexicalAnalyzer;
use crate::logging::codes;
use crate::path::{Path, PathBuilder, PathError, PathResult};
use crate::{log_debug, log_rejection, log_success};
use serde_json::Value;

/// Strip every leading and trailing `/`
pub fn trim_xpath(xpath: &str) -> &str {
    xpath.trim_matches('/')
}

/// Parse with default preferences and the pass-through origin policy
pub fn parse_xpath(xpath: &str, origin: Option<&str>) -> PathResult<Path> {
    parse_xpath_with(xpath, origin, &ParseOptions::default())
}

pub fn parse_xpath_with(
    xpath: &str,
    origin: Option<&str>,
    options: &ParseOptions,
) -> PathResult<Path> {
    log_debug!("Parsing path expression",
        "xpath" => xpath,
        "origin" => origin.unwrap_or("-"),
        "origin_policy" => options.origin_policy.name()
    );

    let trimmed = trim_xpath(xpath);
    let tokens = LexicalAnalyzer::with_preferences(options.lexical.clone()).tokenize(trimmed)?;
    let path = PathBuilder::with_preferences(options.parser.clone()).build(tokens, None)?;
    let path = options
        .origin_policy
        .apply(path, origin)
        .map_err(|error| {
            log_rejection!(error.error_code(), "Origin resolution failed",
                "error" => &error,
                "origin_policy" => options.origin_policy.name()
            );
            error
        })?;

    log_success!(codes::success::XPATH_PARSED,
        "Path expression parsed",
        "xpath" => xpath,
        "elements" => path.len(),
        "origin" => path.origin().unwrap_or("-")
    );

    Ok(path)
}

/// Parse dynamically typed input. A missing or null origin means none.
pub fn parse_value(xpath: &Value, origin: Option<&Value>) -> PathResult<Path> {
    parse_value_with(xpath, origin, &ParseOptions::default())
}

pub fn parse_value_with(
    xpath: &Value,
    origin: Option<&Value>,
    options: &ParseOptions,
) -> PathResult<Path> {
    let Value::String(xpath) = xpath else {
        return Err(invalid_input(format!(
            "xpath must be a string, got {}",
            value_type(xpath)
        )));
    };

    let origin = match origin {
        None | Some(Value::Null) => None,
        Some(Value::String(origin)) => Some(origin.as_str()),
        Some(other) => {
            return Err(invalid_input(format!(
                "origin must be a string, got {}",
                value_type(other)
            )))
        }
    };

    parse_xpath_with(xpath, origin, options)
}

/// Parse raw bytes, which must be UTF-8
pub fn parse_bytes(xpath: &[u8], origin: Option<&str>) -> PathResult<Path> {
    let xpath = std::str::from_utf8(xpath)
        .map_err(|e| invalid_input(format!("xpath is not valid UTF-8: {}", e)))?;
    parse_xpath(xpath, origin)
}

fn invalid_input(message: String) -> PathError {
    let error = PathError::invalid_input(message);
    log_rejection!(error.error_code(), "Invalid parser input", "error" => &error);
    error
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
