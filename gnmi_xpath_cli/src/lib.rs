//! # gnmi-xpath command line
//!
//! Parses path expressions from arguments or a JSON input file and prints
//! the resulting gNMI paths.

pub mod args;
pub mod error;
pub mod input;
pub mod output;

use args::Cli;
use error::CliError;
use gnmi_xpath::parse_value_with;
use input::InputEntry;
use output::{Outcome, Rendered};

/// Result of one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rendered: Rendered,
    pub parsed: usize,
    pub failed: usize,
}

impl Report {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Gather every expression the invocation names, file entries first
pub fn collect_entries(cli: &Cli) -> Result<Vec<InputEntry>, CliError> {
    let mut entries = match &cli.input {
        Some(path) => input::load_entries(path, cli.default_origin())?,
        None => Vec::new(),
    };

    entries.extend(
        cli.xpaths
            .iter()
            .map(|xpath| InputEntry::from_arg(xpath, cli.default_origin())),
    );

    if entries.is_empty() {
        return Err(CliError::NoInput);
    }

    Ok(entries)
}

pub fn run(cli: &Cli) -> Result<Report, CliError> {
    let options = cli.parse_options()?;
    let entries = collect_entries(cli)?;

    log::info!(
        "Parsing {} expressions with origin policy {}",
        entries.len(),
        options.origin_policy.name()
    );

    let outcomes: Vec<Outcome> = entries
        .iter()
        .map(|entry| Outcome {
            label: entry.label(),
            result: parse_value_with(&entry.xpath, entry.origin.as_ref(), &options),
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();

    Ok(Report {
        rendered: output::render(&outcomes, cli.format)?,
        parsed: outcomes.len() - failed,
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["gnmi-xpath"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_run_positional() {
        let report = run(&cli(&["--origin", "openconfig", "a/b", "c[k=v]"])).unwrap();
        assert!(report.all_succeeded());
        assert_eq!(report.parsed, 2);

        let value: serde_json::Value = serde_json::from_str(&report.rendered.stdout).unwrap();
        assert_eq!(value[1]["path"]["origin"], "openconfig");
        assert_eq!(value[1]["path"]["elem"][0]["key"]["k"], "v");
    }

    #[test]
    fn test_run_reports_failures() {
        let report = run(&cli(&["a/b", "intf[a"])).unwrap();
        assert!(!report.all_succeeded());
        assert_eq!(report.parsed, 1);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_run_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"xpath": "openconfig-interfaces:interfaces/interface[name=eth0]"}}, {{"xpath": 5}}]"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let report = run(&cli(&["--origin-policy", "module-prefix", "--input", &path])).unwrap();
        assert_eq!(report.parsed, 1);
        assert_eq!(report.failed, 1);

        let value: serde_json::Value = serde_json::from_str(&report.rendered.stdout).unwrap();
        assert_eq!(value[0]["path"]["origin"], "openconfig-interfaces");
        assert_eq!(value[0]["path"]["elem"][0]["name"], "interfaces");
        assert_eq!(value[1]["error"]["kind"], "InvalidInput");
    }

    #[test]
    fn test_fixed_origin_conflict() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"xpath": "a", "origin": "rfc7951"}}, "b"]"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let report = run(&cli(&[
            "--origin-policy",
            "fixed",
            "--origin",
            "openconfig",
            "--input",
            &path,
        ]))
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.rendered.stdout).unwrap();
        assert_eq!(value[0]["error"]["kind"], "OriginRejected");
        assert_eq!(value[1]["path"]["origin"], "openconfig");
    }

    #[test]
    fn test_no_input() {
        assert!(matches!(run(&cli(&[])), Err(CliError::NoInput)));
    }
}
