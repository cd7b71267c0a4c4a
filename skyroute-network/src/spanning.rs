use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

use crate::graph::NetworkGraph;
use crate::union_find::UnionFind;
use crate::NetworkResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningEdge {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

/// Selected edges in selection order, with their summed weight.
///
/// From `kruskal` this may hold several trees; callers must not assume the
/// network is connected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpanningForest {
    pub edges: Vec<SpanningEdge>,
    pub total_weight: u64,
}

impl SpanningForest {
    fn push(&mut self, graph: &NetworkGraph, from: usize, to: usize, weight: u32) {
        self.total_weight += u64::from(weight);
        self.edges.push(SpanningEdge {
            from: graph.name(from).to_string(),
            to: graph.name(to).to_string(),
            weight,
        });
    }
}

/// Min-heap of arcs leaving the tree. The push counter breaks weight ties
/// in favour of the arc discovered first.
struct Frontier {
    heap: BinaryHeap<Reverse<(u32, u64, usize, usize)>>,
    pushed: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    fn extend(&mut self, graph: &NetworkGraph, from: usize, in_tree: &[bool]) {
        for link in graph.links(from) {
            if !in_tree[link.to] {
                self.heap.push(Reverse((link.weight, self.pushed, from, link.to)));
                self.pushed += 1;
            }
        }
    }
}

/// Prim's algorithm grown from `start`.
///
/// Only the component containing `start` is spanned; airports that cannot
/// be reached from it are left out of the result.
pub fn prim(graph: &NetworkGraph, start: &str) -> NetworkResult<SpanningForest> {
    let s = graph.require(start)?;

    let mut in_tree = vec![false; graph.airport_count()];
    let mut forest = SpanningForest::default();
    let mut frontier = Frontier::new();

    in_tree[s] = true;
    frontier.extend(graph, s, &in_tree);

    while let Some(Reverse((weight, _, from, to))) = frontier.heap.pop() {
        if in_tree[to] {
            continue;
        }
        in_tree[to] = true;
        forest.push(graph, from, to, weight);
        frontier.extend(graph, to, &in_tree);
    }

    debug!("Prim from {}: {} edges, weight {}", start, forest.edges.len(), forest.total_weight);
    Ok(forest)
}

/// Kruskal's algorithm over the whole network, yielding a spanning forest.
///
/// Each flight is taken once, from the endpoint with the lower airport
/// index; self-loops never qualify. Equal weights keep discovery order.
pub fn kruskal(graph: &NetworkGraph) -> SpanningForest {
    let n = graph.airport_count();

    let mut candidates = Vec::new();
    for from in 0..n {
        for link in graph.links(from) {
            if from < link.to {
                candidates.push((from, link.to, link.weight));
            }
        }
    }
    candidates.sort_by_key(|&(_, _, weight)| weight);

    let mut sets = UnionFind::new(n);
    let mut forest = SpanningForest::default();
    for (from, to, weight) in candidates {
        if sets.union(from, to) {
            forest.push(graph, from, to, weight);
        }
    }

    debug!("Kruskal: {} edges, weight {}", forest.edges.len(), forest.total_weight);
    forest
}
