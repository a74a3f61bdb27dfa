//! Command implementations for all tracegraph commands

use crate::cli::{Algorithm, Commands};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{algorithms, path, traverse};
use tracegraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Bfs(args) => traverse::execute(ctx, Algorithm::Bfs, args),
            Commands::Dfs(args) => traverse::execute(ctx, Algorithm::Dfs, args),
            Commands::Dijkstra(args) => path::execute(ctx, args),
            Commands::Algorithms { key } => algorithms::execute(ctx, key.as_deref()),
        }
    }
}
