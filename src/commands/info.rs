//! Graph summary command
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::require_graph;
use waymark_core::error::Result;
use waymark_core::load::load_graph;

/// Execute the info command
pub fn execute(cli: &Cli, start: Instant) -> Result<()> {
    let graph_path = require_graph(cli)?;
    let graph = load_graph(&graph_path)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_graph");
    }

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "graph": graph_path,
                    "vertices": graph.vertex_count(),
                    "edges": graph.edge_count(),
                })
            );
        }
        OutputFormat::Human => {
            println!("graph: {}", graph_path.display());
            println!("vertices: {}", graph.vertex_count());
            println!("edges: {}", graph.edge_count());
        }
    }

    Ok(())
}
