use std::collections::HashMap;

use crate::error::{Result, WaymarkError};
use crate::graph::types::Weight;

/// One adjacency entry: a neighboring vertex and the connecting edge weight.
#[derive(Debug, Clone)]
pub struct Neighbor {
    pub id: String,
    pub weight: Weight,
}

/// Undirected weighted graph keyed by caller-supplied vertex labels.
///
/// The adjacency list is owned by the instance, so independent graphs never
/// share state. Construction (add_vertex/add_edge) must finish before
/// queries begin; queries never mutate the graph.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    adjacency: HashMap<String, Vec<Neighbor>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        WeightedGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Register a vertex. Re-adding an existing vertex leaves its
    /// adjacency entry untouched.
    pub fn add_vertex(&mut self, id: impl Into<String>) {
        self.adjacency.entry(id.into()).or_default();
    }

    /// Connect two existing vertices with an undirected edge: both
    /// directions are recorded with the same weight.
    ///
    /// Fails with `UnknownVertex` if either endpoint was never added.
    /// Weights must be non-negative for shortest-path queries to be
    /// meaningful; this is a caller contract, not a checked condition.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Weight) -> Result<()> {
        if !self.adjacency.contains_key(a) {
            return Err(WaymarkError::UnknownVertex { id: a.to_string() });
        }
        if !self.adjacency.contains_key(b) {
            return Err(WaymarkError::UnknownVertex { id: b.to_string() });
        }

        self.adjacency.entry(a.to_string()).or_default().push(Neighbor {
            id: b.to_string(),
            weight,
        });
        self.adjacency.entry(b.to_string()).or_default().push(Neighbor {
            id: a.to_string(),
            weight,
        });
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Adjacency entries for `id`, empty for unknown vertices.
    pub fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (each is stored as two adjacency entries).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}
