//! Dijkstra shortest-path command

use crate::cli::{Algorithm, PathArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::load::{load_graph, warn_unknown_nodes};
use tracegraph_core::error::Result;
use tracegraph_core::format::{format_cost, format_step_human, OutputFormat};
use tracegraph_core::graph::{dijkstra_search, ShortestPathResult};
use tracegraph_core::records::shortest_path_records;

/// Execute the dijkstra command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let algorithm = Algorithm::Dijkstra;
    let graph = load_graph(ctx, &args.graph)?;
    warn_unknown_nodes(&graph, &[args.start, args.end]);

    let result = dijkstra_search(&graph, args.start, args.end);

    if ctx.cli.verbose {
        tracing::debug!(
            elapsed = ?ctx.start.elapsed(),
            settled = result.visited_edges.len(),
            found = result.found(),
            "dijkstra"
        );
    }

    match ctx.format() {
        OutputFormat::Json => output_json(algorithm, &result)?,
        OutputFormat::Human => output_human(ctx, algorithm, &result),
        OutputFormat::Records => {
            for line in shortest_path_records(algorithm.key(), &result) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn output_json(algorithm: Algorithm, result: &ShortestPathResult) -> Result<()> {
    let mut output = serde_json::json!({
        "algorithm": algorithm,
        "start": result.start,
        "end": result.end,
        "found": result.found(),
        "cost": result.cost,
        "path_length": result.path_length(),
        "shortest_path": result.shortest_path,
        "visited_edges": result.visited_edges,
    });
    if let (false, Some(message)) = (result.found(), algorithm.failure()) {
        if let Some(obj) = output.as_object_mut() {
            obj.insert("message".to_string(), serde_json::json!(message));
        }
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(ctx: &CommandContext, algorithm: Algorithm, result: &ShortestPathResult) {
    if !ctx.cli.quiet {
        println!(
            "{} from {} to {}: {} settled",
            algorithm.name(),
            result.start,
            result.end,
            result.visited_edges.len()
        );
    }
    for (index, step) in result.visited_edges.iter().enumerate() {
        println!("{}", format_step_human(index, step));
    }

    match result.cost {
        Some(cost) if result.found() => {
            let hops = result.path_length();
            println!();
            println!(
                "Path length: {} {}, cost {}",
                hops,
                if hops == 1 { "hop" } else { "hops" },
                format_cost(cost)
            );
            for (index, step) in result.shortest_path.iter().enumerate() {
                println!("{}", format_step_human(index, step));
            }
        }
        _ => {
            println!();
            println!("{}", algorithm.failure().unwrap_or("No path found."));
        }
    }
}
