//! `algorithms` command: list what the CLI can run

use crate::cli::Algorithm;
use crate::commands::dispatch::CommandContext;
use tracegraph_core::error::Result;
use tracegraph_core::format::OutputFormat;

/// Execute the algorithms command
pub fn execute(ctx: &CommandContext, key: Option<&str>) -> Result<()> {
    let selected: Vec<Algorithm> = match key {
        Some(key) => vec![key.parse::<Algorithm>()?],
        None => Algorithm::ALL.to_vec(),
    };

    match ctx.format() {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = selected
                .iter()
                .map(|algo| {
                    serde_json::json!({
                        "key": algo.key(),
                        "name": algo.name(),
                        "category": algo.category(),
                        "info": algo.info(),
                        "failure": algo.failure(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            for algo in &selected {
                println!("{:<9} {:<21} [{}]", algo.key(), algo.name(), algo.category());
                if !ctx.cli.quiet {
                    println!("          {}", algo.info());
                }
            }
        }
        OutputFormat::Records => {
            for algo in &selected {
                println!(
                    "A {} category={} name=\"{}\"",
                    algo.key(),
                    algo.category(),
                    algo.name()
                );
            }
        }
    }

    Ok(())
}
