//! balance entry point.
//!
//! Check once:
//! ```bash
//! cargo run -p balance-repl -- '([{}])'
//! ```
//!
//! Or start the interactive prompt:
//! ```bash
//! cargo run -p balance-repl
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use balance_repl::{Cli, cli, exit_codes};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var). Stdout carries verdicts.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Cli::parse_from(cli::normalize_args(std::env::args_os()));

    match balance_repl::dispatch(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_codes::USAGE_ERROR)
        }
    }
}
