//! Expression sources: positional arguments and JSON input files

use crate::error::CliError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One expression to parse, kept as JSON so type errors reach the parser
#[derive(Debug, Clone, PartialEq)]
pub struct InputEntry {
    pub xpath: Value,
    pub origin: Option<Value>,
}

impl InputEntry {
    pub fn from_arg(xpath: &str, origin: Option<&str>) -> Self {
        Self {
            xpath: Value::String(xpath.to_string()),
            origin: origin.map(|o| Value::String(o.to_string())),
        }
    }

    /// Text shown next to the result
    pub fn label(&self) -> String {
        match &self.xpath {
            Value::String(xpath) => xpath.clone(),
            other => other.to_string(),
        }
    }

    /// Object entries use their `xpath` and `origin` fields; a bare string is
    /// an expression with no origin. Anything else becomes an entry whose
    /// xpath is not a string.
    fn from_json(value: Value, default_origin: Option<&str>) -> Self {
        let fallback = default_origin.map(|o| Value::String(o.to_string()));

        match value {
            Value::Object(mut fields) => Self {
                xpath: fields.remove("xpath").unwrap_or(Value::Null),
                origin: fields.remove("origin").or(fallback),
            },
            other => Self {
                xpath: other,
                origin: fallback,
            },
        }
    }
}

/// Read entries from a JSON array file
pub fn load_entries(path: &Path, default_origin: Option<&str>) -> Result<Vec<InputEntry>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(items) = document else {
        return Err(CliError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    log::debug!("Loaded {} entries from {}", items.len(), path.display());

    Ok(items
        .into_iter()
        .map(|item| InputEntry::from_json(item, default_origin))
        .collect())
}
