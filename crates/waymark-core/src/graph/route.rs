//! Dijkstra shortest-path queries

use std::collections::HashMap;

use crate::error::{Result, WaymarkError};
use crate::graph::model::WeightedGraph;
use crate::graph::types::{Route, Weight};
use crate::queue::MinQueue;

/// Distance table and frontier seeded with every vertex: the source at
/// zero, everything else at infinity.
fn seed_tables(graph: &WeightedGraph, source: &str) -> (HashMap<String, Weight>, MinQueue<String>) {
    let mut distances = HashMap::with_capacity(graph.vertex_count());
    let mut frontier = MinQueue::new();

    for vertex in graph.vertices() {
        let initial = if vertex == source {
            Weight::ZERO
        } else {
            Weight::INFINITY
        };
        distances.insert(vertex.to_string(), initial);
        frontier.insert(vertex.to_string(), initial);
    }

    (distances, frontier)
}

/// Walk predecessor links from the destination back to the source, then
/// reverse into source-first order.
///
/// A broken chain means the destination was never reached; that surfaces
/// as `NoPath`, never as a malformed partial sequence.
fn walk_back(
    source: &str,
    destination: &str,
    predecessors: &HashMap<String, String>,
) -> Result<Vec<String>> {
    let mut path = vec![destination.to_string()];
    let mut current = destination;

    while current != source {
        let Some(previous) = predecessors.get(current) else {
            return Err(WaymarkError::NoPath {
                from: source.to_string(),
                to: destination.to_string(),
            });
        };
        path.push(previous.clone());
        current = previous.as_str();
    }

    path.reverse();
    Ok(path)
}

/// Shortest path between two vertices under non-negative edge weights.
///
/// Dijkstra's algorithm with re-insertion: every distance improvement
/// enqueues the vertex again instead of decreasing a key in place, and
/// extraction discards stale entries whose recorded priority exceeds the
/// vertex's current best distance. The graph is read-only for the duration
/// of the call; the distance/predecessor tables and the frontier queue are
/// allocated per call and discarded on return.
///
/// Fails with `UnknownVertex` if either endpoint was never added to the
/// graph, and with `NoPath` if the destination is unreachable from the
/// source.
#[tracing::instrument(skip(graph), fields(from = %source, to = %destination))]
pub fn shortest_path(graph: &WeightedGraph, source: &str, destination: &str) -> Result<Route> {
    if !graph.contains(source) {
        return Err(WaymarkError::UnknownVertex {
            id: source.to_string(),
        });
    }
    if !graph.contains(destination) {
        return Err(WaymarkError::UnknownVertex {
            id: destination.to_string(),
        });
    }

    let (mut distances, mut frontier) = seed_tables(graph, source);
    let mut predecessors: HashMap<String, String> = HashMap::new();

    while let Some(entry) = frontier.pop() {
        let current = entry.value;
        let best = distances[&current];

        // Obsolete duplicate left behind by a re-insertion; the vertex was
        // already finalized with a shorter distance.
        if entry.priority > best {
            continue;
        }

        if current == destination {
            break;
        }

        // An infinite minimum means everything still queued is unreachable.
        if best.is_infinite() {
            continue;
        }

        for neighbor in graph.neighbors(&current) {
            let candidate = best + neighbor.weight;
            if candidate < distances[&neighbor.id] {
                distances.insert(neighbor.id.clone(), candidate);
                predecessors.insert(neighbor.id.clone(), current.clone());
                frontier.insert(neighbor.id.clone(), candidate);
            }
        }
    }

    let total = distances[destination];
    if total.is_infinite() {
        return Err(WaymarkError::NoPath {
            from: source.to_string(),
            to: destination.to_string(),
        });
    }

    let path = walk_back(source, destination, &predecessors)?;
    let hops = path.len() - 1;
    tracing::debug!(hops, total_weight = total.value(), "route_found");

    Ok(Route {
        from: source.to_string(),
        to: destination.to_string(),
        path,
        total_weight: total.value(),
        hops,
    })
}
