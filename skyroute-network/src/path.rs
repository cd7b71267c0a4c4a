use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

use crate::graph::NetworkGraph;
use crate::{NetworkError, NetworkResult};

/// Shortest route between two airports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub distance: u64,
    pub path: Vec<String>,
}

/// Dijkstra's algorithm from `source` to `dest`.
///
/// Stops as soon as `dest` is settled. Among equally short routes, which one
/// is returned is unspecified.
pub fn dijkstra(graph: &NetworkGraph, source: &str, dest: &str) -> NetworkResult<Route> {
    let s = graph.require(source)?;
    let t = graph.require(dest)?;

    let n = graph.airport_count();
    let mut best: Vec<Option<u64>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    best[s] = Some(0);
    heap.push(Reverse((0u64, s)));

    while let Some(Reverse((dist, node))) = heap.pop() {
        if node == t {
            break;
        }
        // Stale entry, a shorter distance was recorded after this push
        if best[node].is_some_and(|b| dist > b) {
            continue;
        }

        for link in graph.links(node) {
            let candidate = dist + u64::from(link.weight);
            if best[link.to].map_or(true, |b| candidate < b) {
                best[link.to] = Some(candidate);
                parent[link.to] = Some(node);
                heap.push(Reverse((candidate, link.to)));
            }
        }
    }

    let distance = best[t].ok_or_else(|| NetworkError::Unreachable {
        from: source.to_string(),
        to: dest.to_string(),
    })?;

    let mut path = Vec::new();
    let mut current = Some(t);
    while let Some(node) = current {
        path.push(graph.name(node).to_string());
        current = parent[node];
    }
    path.reverse();

    debug!("Shortest route {} -> {}: {} ({} hops)", source, dest, distance, path.len() - 1);
    Ok(Route { distance, path })
}
