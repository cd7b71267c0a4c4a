use serde::Serialize;
use skyroute_shared::Flight;
use std::collections::HashMap;
use tracing::debug;

use crate::{NetworkError, NetworkResult};

/// One directed half of a flight, stored in the departure airport's list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub to: usize,
    pub weight: u32,
}

/// Undirected weighted multigraph of airports.
///
/// Airports are numbered in order of first appearance and every arc list
/// keeps flight order, so two rebuilds from the same flights are equal.
/// Parallel flights stay as separate arcs; a flight whose source equals its
/// destination becomes a self-loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkGraph {
    index: HashMap<String, usize>,
    airports: Vec<String>,
    adjacency: Vec<Vec<Link>>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_flights<'a>(flights: impl IntoIterator<Item = &'a Flight>) -> Self {
        let mut graph = Self::new();
        graph.rebuild(flights);
        graph
    }

    /// Throw away the current snapshot and rebuild it from the active
    /// flights in `flights`, in iteration order
    pub fn rebuild<'a>(&mut self, flights: impl IntoIterator<Item = &'a Flight>) {
        self.index.clear();
        self.airports.clear();
        self.adjacency.clear();

        let mut arcs = 0usize;
        for flight in flights.into_iter().filter(|f| f.active) {
            let from = self.intern(&flight.source);
            let to = self.intern(&flight.destination);
            self.adjacency[from].push(Link { to, weight: flight.distance });
            self.adjacency[to].push(Link { to: from, weight: flight.distance });
            arcs += 2;
        }

        debug!("Network rebuilt: {} airports, {} arcs", self.airports.len(), arcs);
    }

    fn intern(&mut self, code: &str) -> usize {
        if let Some(&i) = self.index.get(code) {
            return i;
        }
        let i = self.airports.len();
        self.index.insert(code.to_string(), i);
        self.airports.push(code.to_string());
        self.adjacency.push(Vec::new());
        i
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.index.get(code).copied()
    }

    /// Index of `code`, or `NotFound` if no active flight touches it
    pub fn require(&self, code: &str) -> NetworkResult<usize> {
        self.index_of(code)
            .ok_or_else(|| NetworkError::NotFound(code.to_string()))
    }

    pub(crate) fn name(&self, index: usize) -> &str {
        &self.airports[index]
    }

    pub(crate) fn links(&self, index: usize) -> &[Link] {
        &self.adjacency[index]
    }

    /// Neighbors of `code` with their distances, in flight order
    pub fn adjacency(&self, code: &str) -> Option<Vec<(&str, u32)>> {
        let i = self.index_of(code)?;
        Some(
            self.adjacency[i]
                .iter()
                .map(|link| (self.name(link.to), link.weight))
                .collect(),
        )
    }

    /// Airport codes in first-appearance order
    pub fn airports(&self) -> &[String] {
        &self.airports
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}
