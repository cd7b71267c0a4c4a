use chrono::{DateTime, Utc};
use serde::Serialize;
use skyroute_shared::Flight;
use tracing::debug;

use crate::registry::FlightRegistry;

/// One recorded source-airport query
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchEntry {
    pub query: String,
    pub searched_at: DateTime<Utc>,
}

/// Append-only log of normalized source queries.
///
/// The log is neither capped nor deduplicated, so it grows for as long as
/// the session lives.
#[derive(Debug, Default)]
pub struct SearchHistory {
    entries: Vec<SearchEntry>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a query after trimming and lower-casing it. Blank queries
    /// are ignored; returns the stored form when something was recorded.
    pub fn record_search(&mut self, query: &str) -> Option<&str> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return None;
        }

        debug!("Recording search for source {}", normalized);
        self.entries.push(SearchEntry {
            query: normalized,
            searched_at: Utc::now(),
        });
        self.entries.last().map(|e| e.query.as_str())
    }

    /// Queries, most recent first
    pub fn recent_searches(&self) -> Vec<String> {
        self.entries.iter().rev().map(|e| e.query.clone()).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &SearchEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Active flights departing from `source`, compared case-insensitively.
///
/// A blank query lists every active flight and is not recorded.
pub fn search_by_source<'a>(
    registry: &'a FlightRegistry,
    history: &mut SearchHistory,
    source: &str,
) -> Vec<&'a Flight> {
    let normalized = normalize(source);
    if normalized.is_empty() {
        return registry.active_flights().collect();
    }

    let matches = registry
        .active_flights()
        .filter(|f| f.source.to_lowercase() == normalized)
        .collect();
    history.record_search(&normalized);
    matches
}
