//! CLI argument parsing for waymark
//!
//! Uses clap for argument parsing.
//! Supports global flags: --graph, --format, --quiet, --verbose

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use waymark_core::format::OutputFormat;

/// Waymark - weighted-graph shortest-path CLI
#[derive(Parser, Debug)]
#[command(name = "waymark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the JSON graph description
    #[arg(long, global = true, env = "WAYMARK_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the cheapest route between two vertices
    Route {
        /// Starting vertex
        from: String,

        /// Destination vertex
        to: String,
    },

    /// Show a summary of the loaded graph
    Info,
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
