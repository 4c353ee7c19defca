//! Errors reported by the `valigen` binary.

use std::path::PathBuf;

use thiserror::Error;
use valigen_core::IngestError;

/// Failures of a `valigen` invocation. Each maps to exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// Nowhere to write and `--stdout` not given.
    #[error("No output destination: pass --output, set `output` in valigen.toml, or use --stdout")]
    MissingOutput,

    /// The export or a config/template file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The current output could not be read for `--check`.
    #[error("Failed to read existing output {}: {source}", .path.display())]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export is not valid JSON of the expected shape.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// `valigen.toml` failed to parse.
    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// The output could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `--check` found a stale output.
    #[error("{} is out of date, run `valigen generate` to update it", .path.display())]
    OutOfDate { path: PathBuf },
}
