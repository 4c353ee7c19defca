//! `valigen generate`: resolve paths, render, then write or check.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{debug, info};
use valigen_common::Inflector;
use valigen_core::generate_from_json;

use crate::config::Config;
use crate::error::CliError;
use crate::output::{check, write_atomic};

/// Export file read when neither `--input` nor the config names one.
pub const DEFAULT_INPUT: &str = "pb_schema.json";

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Collection export (JSON array) to read
    #[arg(long, short = 'i', value_name = "SCHEMA_JSON")]
    pub input: Option<PathBuf>,

    /// TypeScript file to write
    #[arg(long, short = 'o', value_name = "FILE_TS")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./valigen.toml when present)
    #[arg(long, short = 'c', value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Fail with a diff instead of writing when the output is stale
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the generated code instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

/// Run `valigen generate`, returning the process exit code.
pub fn run(args: GenerateArgs) -> i32 {
    match run_inner(&args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn run_inner(args: &GenerateArgs) -> Result<(), CliError> {
    let config = Config::load(args.config.as_deref())?;

    let input = args
        .input
        .clone()
        .or_else(|| config.input.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = args.output.clone().or_else(|| config.output.clone());
    if output.is_none() && !args.stdout {
        return Err(CliError::MissingOutput);
    }

    let code = render(&input, &config)?;

    if args.stdout {
        print!("{code}");
        return Ok(());
    }
    let Some(path) = output else {
        return Err(CliError::MissingOutput);
    };

    if args.check {
        check(&path, &code)?;
        info!(path = %path.display(), "Generated file is up to date.");
    } else {
        write_atomic(&path, &code)?;
        info!(path = %path.display(), "Generated file written.");
    }

    Ok(())
}

fn render(input: &Path, config: &Config) -> Result<String, CliError> {
    debug!(input = %input.display(), "Reading collection export.");
    let json = fs::read_to_string(input).map_err(|source| CliError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    let templates = config.templates()?;
    Ok(generate_from_json(&json, &Inflector::new(), &templates)?)
}
