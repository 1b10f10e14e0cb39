//! Route query command
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::require_graph;
use waymark_core::error::Result;
use waymark_core::graph::shortest_path;
use waymark_core::load::load_graph;

/// Execute the route command
pub fn execute(cli: &Cli, from: &str, to: &str, start: Instant) -> Result<()> {
    let graph_path = require_graph(cli)?;
    let graph = load_graph(&graph_path)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_graph");
    }

    let route = shortest_path(&graph, from, to)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&route)?);
        }
        OutputFormat::Human => {
            println!("{}", route.path.join(" -> "));
            if !cli.quiet {
                println!("total weight: {}", route.total_weight);
                println!("hops: {}", route.hops);
            }
        }
    }

    Ok(())
}
