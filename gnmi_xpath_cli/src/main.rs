//! # gnmi-xpath
//!
//! Parses XPath-style expressions into gNMI paths and prints them.

use clap::Parser;
use gnmi_xpath_cli::args::Cli;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();
    log::debug!("{}", gnmi_xpath::config::build_info::source_info());

    let report = gnmi_xpath_cli::run(&cli)?;

    std::io::stdout().write_all(report.rendered.stdout.as_bytes())?;
    std::io::stderr().write_all(report.rendered.stderr.as_bytes())?;

    if !report.all_succeeded() {
        log::warn!("{} of {} expressions failed", report.failed, report.parsed + report.failed);
        std::process::exit(1);
    }

    Ok(())
}
