use skyroute_shared::Flight;
use std::collections::HashMap;
use tracing::info;

pub const DEFAULT_MAX_FLIGHTS: usize = 100;

/// Owns every flight in insertion order, with a hash index by flight id
pub struct FlightRegistry {
    flights: Vec<Flight>,
    index: HashMap<String, usize>,
    max_flights: usize,
}

impl FlightRegistry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_FLIGHTS)
    }

    pub fn with_capacity(max_flights: usize) -> Self {
        Self {
            flights: Vec::new(),
            index: HashMap::new(),
            max_flights,
        }
    }

    /// Create a new active flight with no bookings
    pub fn add_flight(
        &mut self,
        id: &str,
        source: &str,
        destination: &str,
        distance: u32,
        seats: u32,
    ) -> Result<&Flight, RegistryError> {
        if distance == 0 {
            return Err(RegistryError::InvalidDistance(id.to_string()));
        }
        self.insert(Flight::new(id, source, destination, distance, seats))
    }

    /// Insert a flight read back from storage, under the same id and
    /// capacity rules as `add_flight`
    pub fn restore(&mut self, flight: Flight) -> Result<&Flight, RegistryError> {
        self.insert(flight)
    }

    fn insert(&mut self, flight: Flight) -> Result<&Flight, RegistryError> {
        if self.index.contains_key(&flight.id) {
            return Err(RegistryError::DuplicateId(flight.id));
        }
        if self.flights.len() >= self.max_flights {
            return Err(RegistryError::CapacityExceeded(self.max_flights));
        }

        info!("Registered flight {}", flight);
        let position = self.flights.len();
        self.index.insert(flight.id.clone(), position);
        self.flights.push(flight);

        Ok(&self.flights[position])
    }

    /// Soft-cancel: the flight stays listed but leaves the network
    pub fn cancel_flight(&mut self, id: &str) -> Result<(), RegistryError> {
        let flight = self.get_mut(id).ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        if !flight.active {
            return Err(RegistryError::AlreadyInactive(id.to_string()));
        }

        flight.active = false;
        info!("Flight {} cancelled", id);
        Ok(())
    }

    /// Reactivate a cancelled flight
    pub fn schedule_flight(&mut self, id: &str) -> Result<(), RegistryError> {
        let flight = self.get_mut(id).ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        if flight.active {
            return Err(RegistryError::AlreadyActive(id.to_string()));
        }

        flight.active = true;
        info!("Flight {} scheduled", id);
        Ok(())
    }

    /// Every flight, active or not, in insertion order
    pub fn list_flights(&self) -> Vec<Flight> {
        self.flights.clone()
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn active_flights(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter().filter(|f| f.active)
    }

    /// Active flights ordered by flight id
    pub fn active_by_id(&self) -> Vec<&Flight> {
        let mut active: Vec<&Flight> = self.active_flights().collect();
        active.sort_by(|a, b| a.id.cmp(&b.id));
        active
    }

    pub fn get(&self, id: &str) -> Option<&Flight> {
        self.index.get(id).map(|&i| &self.flights[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Flight> {
        let position = *self.index.get(id)?;
        self.flights.get_mut(position)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn max_flights(&self) -> usize {
        self.max_flights
    }
}

impl Default for FlightRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Flight not found: {0}")]
    NotFound(String),

    #[error("Flight ID already exists: {0}")]
    DuplicateId(String),

    #[error("Registry is full ({0} flights)")]
    CapacityExceeded(usize),

    #[error("Flight is already active: {0}")]
    AlreadyActive(String),

    #[error("Flight is already cancelled: {0}")]
    AlreadyInactive(String),

    #[error("Flight {0} must have a positive distance")]
    InvalidDistance(String),
}
