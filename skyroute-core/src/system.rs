use serde::Serialize;
use skyroute_catalog::{search_by_source, FlightRegistry, RegistryError, SearchHistory};
use skyroute_network::{self as network, NetworkError, NetworkGraph, Route, SpanningForest};
use skyroute_order::BookingCoordinator;
use skyroute_shared::{Booking, BookingId, Flight};
use skyroute_store::{FlightFileStore, SkipReason, SkippedLine};
use tracing::{info, warn};

use crate::CoreResult;

/// Flights loaded when a fresh store holds nothing
const DEFAULT_FLIGHTS: [(&str, &str, &str, u32, u32); 3] = [
    ("F101", "Pune", "Mumbai", 150, 5),
    ("F102", "Delhi", "Mumbai", 1400, 3),
    ("F103", "Pune", "Bangalore", 840, 2),
];

/// Dashboard counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub total_flights: usize,
    pub active_flights: usize,
    pub confirmed_bookings: usize,
    pub pending_requests: usize,
    pub airports: usize,
}

/// One booking session: the flight registry, the network snapshot derived
/// from it, the booking queue and the search log.
///
/// Every successful registry change rebuilds the network before returning,
/// so algorithm calls always see the current active flights. When a store
/// is attached, flight changes are also written through to it.
pub struct FlightSystem {
    registry: FlightRegistry,
    network: NetworkGraph,
    bookings: BookingCoordinator,
    history: SearchHistory,
    store: Option<FlightFileStore>,
}

impl FlightSystem {
    pub fn new() -> Self {
        Self::with_registry(FlightRegistry::new())
    }

    pub fn with_max_flights(max_flights: usize) -> Self {
        Self::with_registry(FlightRegistry::with_capacity(max_flights))
    }

    fn with_registry(registry: FlightRegistry) -> Self {
        Self {
            registry,
            network: NetworkGraph::new(),
            bookings: BookingCoordinator::new(),
            history: SearchHistory::new(),
            store: None,
        }
    }

    /// Load flights from `store` and keep writing changes back to it.
    ///
    /// Lines that could not be loaded are returned rather than failing the
    /// whole load.
    pub fn open(store: FlightFileStore, max_flights: usize) -> CoreResult<(Self, Vec<SkippedLine>)> {
        let loaded = store.load()?;
        let mut system = Self::with_max_flights(max_flights);
        let mut skipped = loaded.skipped;

        for record in loaded.records {
            let reason = match system.registry.restore(record.flight) {
                Ok(_) => continue,
                Err(RegistryError::DuplicateId(_)) => SkipReason::DuplicateId,
                Err(_) => SkipReason::RegistryFull,
            };
            warn!("Skipping flight line {}: {}", record.line_number, reason);
            skipped.push(SkippedLine {
                line_number: record.line_number,
                content: record.content,
                reason,
            });
        }
        skipped.sort_by_key(|s| s.line_number);

        system.rebuild_network();
        system.store = Some(store);
        info!("Opened flight system with {} flights", system.registry.len());
        Ok((system, skipped))
    }

    /// Add the built-in sample flights when the registry is empty.
    /// Returns whether anything was added.
    ///
    /// Either all sample flights are added or none are.
    pub fn seed_if_empty(&mut self) -> CoreResult<bool> {
        if !self.registry.is_empty() {
            return Ok(false);
        }
        let max = self.registry.max_flights();
        if self.registry.len() + DEFAULT_FLIGHTS.len() > max {
            return Err(RegistryError::CapacityExceeded(max).into());
        }
        for (id, source, destination, distance, seats) in DEFAULT_FLIGHTS {
            self.registry.add_flight(id, source, destination, distance, seats)?;
        }
        self.commit_flight_change()?;
        Ok(true)
    }

    // ---- flights -------------------------------------------------------

    pub fn add_flight(
        &mut self,
        id: &str,
        source: &str,
        destination: &str,
        distance: u32,
        seats: u32,
    ) -> CoreResult<Flight> {
        let flight = self
            .registry
            .add_flight(id, source, destination, distance, seats)?
            .clone();
        self.commit_flight_change()?;
        Ok(flight)
    }

    pub fn cancel_flight(&mut self, id: &str) -> CoreResult<()> {
        self.registry.cancel_flight(id)?;
        self.commit_flight_change()
    }

    pub fn schedule_flight(&mut self, id: &str) -> CoreResult<()> {
        self.registry.schedule_flight(id)?;
        self.commit_flight_change()
    }

    pub fn list_flights(&self) -> Vec<Flight> {
        self.registry.list_flights()
    }

    /// Active flights ordered by flight id
    pub fn active_flights_by_id(&self) -> Vec<Flight> {
        self.registry.active_by_id().into_iter().cloned().collect()
    }

    pub fn flight(&self, id: &str) -> Option<&Flight> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &FlightRegistry {
        &self.registry
    }

    fn rebuild_network(&mut self) {
        self.network.rebuild(self.registry.flights());
    }

    fn commit_flight_change(&mut self) -> CoreResult<()> {
        self.rebuild_network();
        if let Some(store) = &self.store {
            store.save(self.registry.flights())?;
        }
        Ok(())
    }

    // ---- search --------------------------------------------------------

    pub fn search_by_source(&mut self, source: &str) -> Vec<Flight> {
        search_by_source(&self.registry, &mut self.history, source)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.history.recent_searches()
    }

    // ---- network -------------------------------------------------------

    pub fn network(&self) -> &NetworkGraph {
        &self.network
    }

    pub fn adjacency(&self, airport: &str) -> CoreResult<Vec<(String, u32)>> {
        let links = self
            .network
            .adjacency(airport)
            .ok_or_else(|| NetworkError::NotFound(airport.to_string()))?;
        Ok(links
            .into_iter()
            .map(|(code, weight)| (code.to_string(), weight))
            .collect())
    }

    pub fn shortest_path(&self, source: &str, dest: &str) -> CoreResult<Route> {
        Ok(network::dijkstra(&self.network, source, dest)?)
    }

    pub fn dfs(&self, start: &str) -> CoreResult<Vec<String>> {
        Ok(network::dfs(&self.network, start)?)
    }

    pub fn bfs(&self, start: &str) -> CoreResult<Vec<String>> {
        Ok(network::bfs(&self.network, start)?)
    }

    pub fn prim(&self, start: &str) -> CoreResult<SpanningForest> {
        Ok(network::prim(&self.network, start)?)
    }

    pub fn kruskal(&self) -> SpanningForest {
        network::kruskal(&self.network)
    }

    // ---- bookings ------------------------------------------------------

    pub fn queue_booking(&mut self, flight_id: &str, passenger_name: &str) -> CoreResult<()> {
        Ok(self
            .bookings
            .queue_booking(&self.registry, flight_id, passenger_name)?)
    }

    pub fn process_next_booking(&mut self, passenger_name: &str) -> CoreResult<Booking> {
        Ok(self
            .bookings
            .process_next_booking(&mut self.registry, passenger_name)?)
    }

    pub fn cancel_booking(&mut self, flight_id: &str, booking_id: BookingId) -> CoreResult<Booking> {
        Ok(self
            .bookings
            .cancel_booking_by_id(&mut self.registry, flight_id, booking_id)?)
    }

    pub fn bookings_for_flight(&self, flight_id: &str) -> Vec<Booking> {
        self.bookings.get_bookings_for_flight(&self.registry, flight_id)
    }

    pub fn list_queue(&self) -> Vec<String> {
        self.bookings.list_queue()
    }

    /// Flight id of the request `process_next_booking` will take next
    pub fn next_pending(&self) -> Option<&str> {
        self.bookings.peek_next()
    }

    pub fn summary(&self) -> NetworkSummary {
        let flights = self.registry.flights();
        NetworkSummary {
            total_flights: flights.len(),
            active_flights: flights.iter().filter(|f| f.active).count(),
            confirmed_bookings: flights.iter().map(|f| f.bookings.len()).sum(),
            pending_requests: self.bookings.pending(),
            airports: self.network.airport_count(),
        }
    }
}

impl Default for FlightSystem {
    fn default() -> Self {
        Self::new()
    }
}
