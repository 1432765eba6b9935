//! Batch parsing
//!
//! Every input is parsed independently; a failure never stops the batch.

use super::{parse_xpath_with, ParseOptions};
use crate::log_info;
use crate::path::{Path, PathError};

/// Outcome of one input in a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub xpath: String,
    pub origin: Option<String>,
    pub result: Result<Path, PathError>,
}

/// Per-input results in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResults {
    pub entries: Vec<BatchEntry>,
}

impl BatchResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: BatchEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_ok()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.entries.iter().all(|e| e.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&BatchEntry, &PathError)> {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().err().map(|err| (e, err)))
    }

    pub fn summary(&self) -> String {
        format!(
            "{} expressions: {} parsed, {} failed",
            self.len(),
            self.success_count(),
            self.failure_count()
        )
    }
}

/// Parse each `(xpath, origin)` pair, one result per input
pub fn parse_many<'a, I>(inputs: I, options: &ParseOptions) -> BatchResults
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut results = BatchResults::new();

    for (xpath, origin) in inputs {
        results.push(BatchEntry {
            xpath: xpath.to_string(),
            origin: origin.map(str::to_string),
            result: parse_xpath_with(xpath, origin, options),
        });
    }

    log_info!("Batch parsing finished",
        "total" => results.len(),
        "parsed" => results.success_count(),
        "failed" => results.failure_count()
    );

    results
}
