use std::collections::VecDeque;

use crate::graph::NetworkGraph;
use crate::NetworkResult;

/// Depth-first visitation order from `start`.
///
/// Uses an explicit stack of `(airport, next arc)` frames so deep networks
/// cannot overflow the call stack; each airport is pushed at most once, so
/// the stack never holds more frames than there are airports.
pub fn dfs(graph: &NetworkGraph, start: &str) -> NetworkResult<Vec<String>> {
    let s = graph.require(start)?;

    let mut visited = vec![false; graph.airport_count()];
    let mut order = vec![s];
    let mut stack: Vec<(usize, usize)> = vec![(s, 0)];
    visited[s] = true;

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        match graph.links(node).get(next) {
            Some(link) => {
                frame.1 += 1;
                if !visited[link.to] {
                    visited[link.to] = true;
                    order.push(link.to);
                    stack.push((link.to, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(names(graph, order))
}

/// Breadth-first visitation order from `start`
pub fn bfs(graph: &NetworkGraph, start: &str) -> NetworkResult<Vec<String>> {
    let s = graph.require(start)?;

    let mut visited = vec![false; graph.airport_count()];
    let mut order = Vec::new();
    let mut frontier = VecDeque::from([s]);
    visited[s] = true;

    while let Some(node) = frontier.pop_front() {
        order.push(node);
        for link in graph.links(node) {
            if !visited[link.to] {
                visited[link.to] = true;
                frontier.push_back(link.to);
            }
        }
    }

    Ok(names(graph, order))
}

fn names(graph: &NetworkGraph, order: Vec<usize>) -> Vec<String> {
    order.into_iter().map(|i| graph.name(i).to_string()).collect()
}
