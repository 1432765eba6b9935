//! Command-line arguments

use crate::error::CliError;
use clap::{ArgAction, Parser, ValueEnum};
use gnmi_xpath::{FixedOrigin, ModulePrefix, ParseOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gnmi-xpath")]
#[command(version)]
#[command(about = "Parse XPath-style expressions into gNMI paths", long_about = None)]
pub struct Cli {
    /// Path expressions to parse
    #[arg(value_name = "XPATH")]
    pub xpaths: Vec<String>,

    /// Origin for every expression (the required origin with --origin-policy fixed)
    #[arg(long)]
    pub origin: Option<String>,

    /// How the origin of each path is decided
    #[arg(long, value_enum, default_value_t = OriginPolicyArg::PassThrough)]
    pub origin_policy: OriginPolicyArg,

    /// Reject a second element name before the next '/'
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// JSON file holding an array of {"xpath": ..., "origin": ...} entries
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OriginPolicyArg {
    PassThrough,
    ModulePrefix,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
    Text,
}

impl Cli {
    /// Parser options for this invocation, starting from `GNMI_XPATH_*`
    /// environment preferences
    pub fn parse_options(&self) -> Result<ParseOptions, CliError> {
        let options = ParseOptions::from_env();
        let strict = self.strict || options.parser.strict_element_names;
        let options = options.with_strict_element_names(strict);

        Ok(match self.origin_policy {
            OriginPolicyArg::PassThrough => options,
            OriginPolicyArg::ModulePrefix => options.with_origin_policy(ModulePrefix),
            OriginPolicyArg::Fixed => {
                let origin = self.origin.as_deref().ok_or(CliError::MissingFixedOrigin)?;
                options.with_origin_policy(FixedOrigin::new(origin))
            }
        })
    }

    /// Origin supplied alongside expressions that do not carry their own
    pub fn default_origin(&self) -> Option<&str> {
        match self.origin_policy {
            OriginPolicyArg::Fixed => None,
            _ => self.origin.as_deref(),
        }
    }

    /// Log filter implied by `-v`
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
