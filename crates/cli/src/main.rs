//! `valigen`: generate Valibot schemas from a PocketBase collection export.

use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod config;
mod error;
mod generate;
mod output;

#[derive(Parser)]
#[command(
    name = "valigen",
    version,
    about = "Valibot schemas and TypeScript types for PocketBase collections"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the schema file from a collection export
    Generate(generate::GenerateArgs),
}

/// Crates whose spans and events are shown for a plain `VALIGEN_LOG` level.
const LOG_TARGETS: [&str; 3] = ["valigen", "valigen_core", "valigen_common"];

fn main() -> ExitCode {
    init_tracing();

    let code = match Cli::try_parse() {
        Ok(cli) => match cli.command {
            Some(Commands::Generate(args)) => generate::run(args),
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    };

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn log_filter(var: Option<&str>) -> String {
    // VALIGEN_LOG controls log level: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter spec like "valigen_core=debug"
    let level = match var {
        Some(spec) if !is_plain_level(spec) => return spec.to_string(),
        Some(level) => level.to_ascii_lowercase(),
        None => "info".to_string(),
    };
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn init_tracing() {
    let var = std::env::var("VALIGEN_LOG").ok();
    let filter = log_filter(var.as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
