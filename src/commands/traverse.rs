//! BFS / DFS traversal commands

use crate::cli::{Algorithm, TraverseArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::load::{load_graph, warn_unknown_nodes};
use tracegraph_core::error::Result;
use tracegraph_core::format::{format_step_human, OutputFormat};
use tracegraph_core::graph::{bfs_traverse, dfs_traverse, NodeId, TraceEdge};
use tracegraph_core::records::traversal_records;

/// Execute a traversal command
pub fn execute(ctx: &CommandContext, algorithm: Algorithm, args: &TraverseArgs) -> Result<()> {
    let graph = load_graph(ctx, &args.graph)?;
    warn_unknown_nodes(&graph, &[args.start]);

    let trace = match algorithm {
        Algorithm::Dfs => dfs_traverse(&graph, args.start),
        _ => bfs_traverse(&graph, args.start),
    };

    if ctx.cli.verbose {
        tracing::debug!(elapsed = ?ctx.start.elapsed(), steps = trace.len(), "traverse");
    }

    match ctx.format() {
        OutputFormat::Json => output_json(algorithm, args.start, &trace)?,
        OutputFormat::Human => output_human(ctx, algorithm, args.start, &trace),
        OutputFormat::Records => {
            for line in traversal_records(algorithm.key(), args.start, &trace) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn output_json(algorithm: Algorithm, start: NodeId, trace: &[TraceEdge]) -> Result<()> {
    let output = serde_json::json!({
        "algorithm": algorithm,
        "start": start,
        "trace": trace,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(ctx: &CommandContext, algorithm: Algorithm, start: NodeId, trace: &[TraceEdge]) {
    if !ctx.cli.quiet {
        let noun = if trace.len() == 1 { "node" } else { "nodes" };
        println!(
            "{} from {}: {} {} visited",
            algorithm.name(),
            start,
            trace.len(),
            noun
        );
    }
    for (index, step) in trace.iter().enumerate() {
        println!("{}", format_step_human(index, step));
    }
}
