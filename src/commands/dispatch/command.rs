//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use tracegraph_core::config::TraceConfig;
use tracegraph_core::error::Result;
use tracegraph_core::format::OutputFormat;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: TraceConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: TraceConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format` wins over the config file; human is the fallback
    pub fn format(&self) -> OutputFormat {
        self.cli
            .format
            .map(OutputFormat::from)
            .or(self.config.output.format)
            .unwrap_or_default()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("tracegraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Replayable BFS, DFS and Dijkstra traces over weighted graphs.");
        println!();
        println!("Run `tracegraph --help` for usage information.");
        Ok(())
    }
}
