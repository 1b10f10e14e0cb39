//! JSON graph descriptions for the CLI surface
//!
//! The solver's contract is a pure in-process API; this module only gives
//! the command line a way to hand it a graph:
//!
//! ```json
//! {
//!   "vertices": ["A", "B"],
//!   "edges": [ { "a": "A", "b": "B", "weight": 4 } ]
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, WaymarkError};
use crate::graph::model::WeightedGraph;
use crate::graph::types::Weight;

/// One undirected edge of the description.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeSpec {
    pub a: String,
    pub b: String,
    pub weight: f64,
}

/// On-disk graph description.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphFile {
    /// Build the graph through the public construction API, so an edge
    /// naming an undeclared vertex fails with `UnknownVertex`.
    pub fn build(&self) -> Result<WeightedGraph> {
        let mut graph = WeightedGraph::new();
        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone());
        }
        for edge in &self.edges {
            graph.add_edge(&edge.a, &edge.b, Weight::new(edge.weight))?;
        }
        Ok(graph)
    }
}

/// Read and build a graph from the JSON description at `path`.
#[tracing::instrument]
pub fn load_graph(path: &Path) -> Result<WeightedGraph> {
    let raw = fs::read_to_string(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            WaymarkError::GraphNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WaymarkError::Io(err)
        }
    })?;

    let file: GraphFile =
        serde_json::from_str(&raw).map_err(|err| WaymarkError::InvalidGraph {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    let graph = file.build()?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph_loaded"
    );
    Ok(graph)
}
