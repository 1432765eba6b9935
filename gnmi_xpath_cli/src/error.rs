use std::path::PathBuf;
use thiserror::Error;

/// Failures of the command line itself, as opposed to expressions that fail to parse
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read input file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input file {path} must contain a JSON array")]
    NotAnArray { path: PathBuf },

    #[error("--origin-policy fixed requires --origin")]
    MissingFixedOrigin,

    #[error("No path expressions given (pass XPATH arguments or --input)")]
    NoInput,

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}
