//! CLI argument parsing for tracegraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod algorithm;
pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use algorithm::Algorithm;
pub use args::{PathArgs, TraverseArgs};
pub use output::FormatArg;

/// Tracegraph - replayable graph traversal and shortest-path traces
#[derive(Parser, Debug)]
#[command(name = "tracegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the config file, then human)
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Config file (defaults to ./tracegraph.toml when present)
    #[arg(long, global = true, env = "TRACEGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `tracegraph_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first traversal trace from a start node
    Bfs(TraverseArgs),

    /// Depth-first traversal trace from a start node
    Dfs(TraverseArgs),

    /// Shortest path between two nodes, with settle-order trace
    Dijkstra(PathArgs),

    /// List the available algorithms
    Algorithms {
        /// Show a single algorithm by key
        key: Option<String>,
    },
}
