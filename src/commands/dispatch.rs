//! Command dispatch logic for waymark
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use waymark_core::error::{Result, WaymarkError};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(WaymarkError::UsageError(
            "no command given (try `waymark route <FROM> <TO>`)".to_string(),
        )),

        Some(Commands::Route { from, to }) => commands::route::execute(cli, from, to, start),

        Some(Commands::Info) => commands::info::execute(cli, start),
    }
}

/// Resolve the graph path from `--graph` / `WAYMARK_GRAPH`.
pub fn require_graph(cli: &Cli) -> Result<PathBuf> {
    cli.graph.clone().ok_or_else(|| {
        WaymarkError::UsageError(
            "no graph file given (use --graph or set WAYMARK_GRAPH)".to_string(),
        )
    })
}
