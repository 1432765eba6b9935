//! Rendering parse outcomes

use crate::args::OutputFormat;
use crate::error::CliError;
use gnmi_xpath::logging::{codes, format_error_report};
use gnmi_xpath::utils::{render_snippet, Span};
use gnmi_xpath::{trim_xpath, Path, PathError};
use serde::Serialize;

/// One parsed (or failed) expression
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub label: String,
    pub result: Result<Path, PathError>,
}

#[derive(Serialize)]
struct ErrorRecord {
    code: &'static str,
    category: &'static str,
    severity: &'static str,
    kind: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<Span>,
}

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    xpath: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRecord>,
}

/// Text destined for stdout and stderr
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    pub stdout: String,
    pub stderr: String,
}

pub fn render(outcomes: &[Outcome], format: OutputFormat) -> Result<Rendered, CliError> {
    match format {
        OutputFormat::Json => Ok(Rendered {
            stdout: serde_json::to_string(&records(outcomes))? + "\n",
            stderr: String::new(),
        }),
        OutputFormat::Pretty => Ok(Rendered {
            stdout: serde_json::to_string_pretty(&records(outcomes))? + "\n",
            stderr: String::new(),
        }),
        OutputFormat::Text => Ok(render_text(outcomes)),
    }
}

fn records(outcomes: &[Outcome]) -> Vec<OutcomeRecord<'_>> {
    outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(path) => OutcomeRecord {
                xpath: &outcome.label,
                path: Some(path),
                error: None,
            },
            Err(error) => OutcomeRecord {
                xpath: &outcome.label,
                path: None,
                error: Some(ErrorRecord {
                    code: error.error_code().as_str(),
                    category: codes::get_category(error.error_code().as_str()),
                    severity: codes::get_severity(error.error_code().as_str()).as_str(),
                    kind: format!("{:?}", error.kind()),
                    message: error.to_string(),
                    span: error.span(),
                }),
            },
        })
        .collect()
}

fn render_text(outcomes: &[Outcome]) -> Rendered {
    let mut rendered = Rendered::default();

    for outcome in outcomes {
        match &outcome.result {
            Ok(path) => {
                let origin = path
                    .origin()
                    .map(|o| format!(" (origin {})", o))
                    .unwrap_or_default();
                rendered
                    .stdout
                    .push_str(&format!("{} -> {}{}\n", outcome.label, path, origin));
            }
            Err(error) => {
                rendered.stderr.push_str(&format_error_report(
                    error.error_code(),
                    &error.to_string(),
                ));
                rendered.stderr.push('\n');
                if let Some(span) = error.span() {
                    rendered
                        .stderr
                        .push_str(&render_snippet(trim_xpath(&outcome.label), &span));
                    rendered.stderr.push('\n');
                }
            }
        }
    }

    rendered
}
