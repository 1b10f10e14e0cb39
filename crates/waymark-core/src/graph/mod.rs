//! Weighted-graph model and shortest-path queries
//!
//! Provides the pieces of a route query:
//! - undirected weighted graph built through add-vertex/add-edge calls
//! - Dijkstra shortest-path solving against an immutable graph
//! - weight and route types shared by both

pub mod model;
pub mod route;
pub mod types;

pub use model::WeightedGraph;
pub use route::shortest_path;
pub use types::{Route, Weight};
