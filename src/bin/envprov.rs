// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot command-line front end for the environment provider.
//!
//! Runs init, fetch and shutdown against the process environment and prints
//! the typed value as JSON on stdout. Logs go to stderr.
//!
//! ```bash
//! export MYAPP_DATABASE_PORT=5432
//! envprov --config '{"prefix": "MYAPP_"}' database port    # 5432.0
//! envprov --literal PATH
//! ```

use clap::Parser;
use env_provider::prelude::*;
use serde_json::Value;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Print an environment variable as a typed configuration value.
#[derive(Debug, Parser)]
#[command(name = "envprov", version, about)]
struct Cli {
    /// Provider configuration as a JSON object
    #[arg(short, long, value_name = "JSON")]
    config: Option<String>,

    /// Alias reported by the provider
    #[arg(short, long, default_value = "env")]
    alias: String,

    /// Treat the single argument as a literal variable name
    #[arg(short, long)]
    literal: bool,

    /// Log resolution details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Path segments, e.g. `database host`
    #[arg(required = true, value_name = "SEGMENT")]
    segments: Vec<String>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit status for configuration and init failures.
const EXIT_CONFIG: u8 = 1;
/// Exit status for fetch failures.
const EXIT_FETCH: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    ExitCode::from(run(cli, ProcessEnvironment::new()))
}

/// Runs init, fetch and shutdown against `source` and returns the exit status.
fn run<S>(cli: Cli, source: S) -> u8
where
    S: EnvironmentSource + 'static,
{
    let config: Value = match cli.config.as_deref().map(serde_json::from_str::<Value>).transpose() {
        Ok(config) => config.unwrap_or(Value::Null),
        Err(e) => {
            eprintln!("error: --config is not valid JSON: {e}");
            return EXIT_CONFIG;
        }
    };

    let lookup = if cli.literal {
        match cli.segments.as_slice() {
            [name] => Lookup::literal(name.as_str()),
            _ => {
                eprintln!("error: --literal takes exactly one variable name");
                return EXIT_CONFIG;
            }
        }
    } else {
        Lookup::Path(LookupPath::new(cli.segments))
    };

    let provider = EnvironmentProvider::with_source(source);
    if let Err(e) = provider.init(&cli.alias, &config) {
        eprintln!("error: {e}");
        return EXIT_CONFIG;
    }

    let result = provider.fetch(&lookup);
    provider.shutdown();

    match result.map(|value| serde_json::to_string(&value)) {
        Ok(Ok(json)) => {
            println!("{json}");
            0
        }
        Ok(Err(e)) => {
            eprintln!("error: could not serialize value: {e}");
            EXIT_FETCH
        }
        Err(e) => {
            eprintln!("error [{}]: {e}", e.kind());
            EXIT_FETCH
        }
    }
}
