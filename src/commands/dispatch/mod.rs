//! Command dispatch logic for tracegraph

use std::time::Instant;

use crate::cli::Cli;
use tracegraph_core::config::TraceConfig;
use tracegraph_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::{Command, CommandContext, NoCommand};

/// Load configuration and build the context every command runs in
pub fn context(cli: &Cli, start: Instant) -> Result<CommandContext<'_>> {
    let cwd = std::env::current_dir()?;
    let config = TraceConfig::discover(&cwd, cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    Ok(CommandContext::new(cli, config, start))
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    match &ctx.cli.command {
        None => NoCommand.execute(ctx),
        Some(cmd) => cmd.execute(ctx),
    }
}
