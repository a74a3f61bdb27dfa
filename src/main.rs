//! Tracegraph - replayable graph traversal CLI
//!
//! Loads a graph document, runs BFS, DFS or Dijkstra over it, and prints the
//! ordered trace of steps so another tool can animate them.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use tracegraph_core::error::{ExitCode as TraceExitCode, TraceError};
use tracegraph_core::format::OutputFormat;
use tracegraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `Cli.format` exists; honour a JSON request
            // seen in argv with a structured error envelope.
            if argv_format_json {
                let trace_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        TraceError::UsageError(err.to_string())
                    }
                    _ => TraceError::Other(err.to_string()),
                };

                eprintln!("{}", trace_error.to_json());
                return ExitCode::from(trace_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    // Errors follow the effective format once config is loaded
    let (result, format) = match commands::dispatch::context(&cli, start) {
        Ok(ctx) => (commands::dispatch::execute(&ctx), ctx.format()),
        Err(e) => (
            Err(e),
            cli.format.map(OutputFormat::from).unwrap_or_default(),
        ),
    };

    match result {
        Ok(()) => ExitCode::from(TraceExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
