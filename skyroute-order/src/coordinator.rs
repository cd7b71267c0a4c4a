use skyroute_catalog::FlightRegistry;
use skyroute_shared::{Booking, BookingId};
use std::collections::VecDeque;
use tracing::{info, warn};

/// FIFO allocation of seats to pending booking requests.
///
/// A queued request holds only the flight id. The passenger is named when
/// the request is processed, and the flight is validated again at that
/// point because it may have been cancelled or sold out in between.
pub struct BookingCoordinator {
    queue: VecDeque<String>,
    next_id: BookingId,
}

impl BookingCoordinator {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Queue a request for `flight_id`.
    ///
    /// `_passenger_name` is accepted but not kept; the booking is recorded
    /// under the name given to `process_next_booking`.
    pub fn queue_booking(
        &mut self,
        registry: &FlightRegistry,
        flight_id: &str,
        _passenger_name: &str,
    ) -> Result<(), BookingError> {
        let flight = registry
            .get(flight_id)
            .ok_or_else(|| BookingError::FlightNotFound(flight_id.to_string()))?;

        if !flight.active {
            return Err(BookingError::FlightInactive(flight_id.to_string()));
        }

        self.queue.push_back(flight_id.to_string());
        info!("Booking request queued for {} ({} pending)", flight_id, self.queue.len());
        Ok(())
    }

    /// Take the oldest request and seat `passenger_name` on its flight.
    ///
    /// A request that no longer validates is dropped, not requeued.
    pub fn process_next_booking(
        &mut self,
        registry: &mut FlightRegistry,
        passenger_name: &str,
    ) -> Result<Booking, BookingError> {
        let flight_id = self.queue.pop_front().ok_or(BookingError::EmptyQueue)?;

        let flight = match registry.get_mut(&flight_id) {
            Some(flight) => flight,
            None => {
                warn!("Dropping booking request: flight {} not found", flight_id);
                return Err(BookingError::FlightNotFound(flight_id));
            }
        };

        if !flight.active {
            warn!("Dropping booking request: flight {} is cancelled", flight_id);
            return Err(BookingError::FlightInactive(flight_id));
        }
        if !flight.has_seats() {
            warn!("Dropping booking request: no seats left on {}", flight_id);
            return Err(BookingError::SoldOut(flight_id));
        }

        let booking = Booking::new(self.next_id, passenger_name);
        if !flight.add_booking(booking.clone()) {
            return Err(BookingError::SoldOut(flight_id));
        }
        self.next_id += 1;

        info!(
            "Booking {} confirmed on {}, seats left: {}",
            booking.id, flight_id, flight.seats
        );
        Ok(booking)
    }

    /// Remove a booking and restore its seat. The id is never issued again.
    pub fn cancel_booking_by_id(
        &self,
        registry: &mut FlightRegistry,
        flight_id: &str,
        booking_id: BookingId,
    ) -> Result<Booking, BookingError> {
        let flight = registry
            .get_mut(flight_id)
            .ok_or_else(|| BookingError::FlightNotFound(flight_id.to_string()))?;

        let booking = flight
            .remove_booking(booking_id)
            .ok_or(BookingError::BookingNotFound {
                flight_id: flight_id.to_string(),
                booking_id,
            })?;

        info!("Booking {} cancelled, seat restored on {}", booking_id, flight_id);
        Ok(booking)
    }

    /// Bookings on `flight_id` in booking order; empty for unknown flights
    pub fn get_bookings_for_flight(&self, registry: &FlightRegistry, flight_id: &str) -> Vec<Booking> {
        registry
            .get(flight_id)
            .map(|f| f.bookings.clone())
            .unwrap_or_default()
    }

    /// Pending flight ids, oldest first
    pub fn list_queue(&self) -> Vec<String> {
        self.queue.iter().cloned().collect()
    }

    pub fn peek_next(&self) -> Option<&str> {
        self.queue.front().map(String::as_str)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// The id the next confirmed booking will receive
    pub fn next_booking_id(&self) -> BookingId {
        self.next_id
    }
}

impl Default for BookingCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error("Flight {0} is cancelled")]
    FlightInactive(String),

    #[error("No seats left on {0}")]
    SoldOut(String),

    #[error("No bookings in queue")]
    EmptyQueue,

    #[error("Booking {booking_id} not found on flight {flight_id}")]
    BookingNotFound {
        flight_id: String,
        booking_id: BookingId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> FlightRegistry {
        let mut registry = FlightRegistry::new();
        registry.add_flight("F1", "A", "B", 100, 2).unwrap();
        registry.add_flight("F2", "B", "C", 50, 1).unwrap();
        registry
    }

    fn assert_seat_accounting(registry: &FlightRegistry) {
        for flight in registry.flights() {
            assert_eq!(
                flight.seats as usize + flight.bookings.len(),
                flight.capacity as usize,
                "seat accounting broken on {}",
                flight.id
            );
        }
    }

    #[test]
    fn test_processing_uses_the_later_passenger_name() {
        let mut registry = registry();
        let mut coordinator = BookingCoordinator::new();

        coordinator.queue_booking(&registry, "F1", "Alice").unwrap();
        let booking = coordinator.process_next_booking(&mut registry, "Bob").unwrap();

        assert_eq!(booking.id, 1);
        assert_eq!(booking.passenger.expose(), "Bob");
        assert_eq!(registry.get("F1").unwrap().seats, 1);

        let bookings = coordinator.get_bookings_for_flight(&registry, "F1");
        assert_eq!(bookings, vec![Booking::new(1, "Bob")]);
        assert_seat_accounting(&registry);
    }

    #[test]
    fn test_queue_validation() {
        let mut registry = registry();
        let mut coordinator = BookingCoordinator::new();

        assert_eq!(
            coordinator.queue_booking(&registry, "NOPE", "Alice"),
            Err(BookingError::FlightNotFound("NOPE".to_string()))
        );

        registry.cancel_flight("F2").unwrap();
        assert_eq!(
            coordinator.queue_booking(&registry, "F2", "Alice"),
            Err(BookingError::FlightInactive("F2".to_string()))
        );
        assert_eq!(coordinator.pending(), 0);
    }

    #[test]
    fn test_fifo_order() {
        let mut registry = registry();
        let mut coordinator = BookingCoordinator::new();

        coordinator.queue_booking(&registry, "F2", "x").unwrap();
        coordinator.queue_booking(&registry, "F1", "y").unwrap();
        assert_eq!(coordinator.list_queue(), vec!["F2", "F1"]);
        assert_eq!(coordinator.peek_next(), Some("F2"));

        coordinator.process_next_booking(&mut registry, "Carol").unwrap();
        assert_eq!(registry.get("F2").unwrap().bookings.len(), 1);
        assert_eq!(coordinator.list_queue(), vec!["F1"]);
        assert_eq!(coordinator.peek_next(), Some("F1"));
    }

    #[test]
    fn test_empty_queue() {
        let mut registry = registry();
        let mut coordinator = BookingCoordinator::new();
        assert_eq!(coordinator.peek_next(), None);
        assert_eq!(
            coordinator.process_next_booking(&mut registry, "Bob"),
            Err(BookingError::EmptyQueue)
        );
    }

    #[test]
    fn test_stale_requests_are_dropped() {
        let mut registry = registry();
        let mut coordinator = BookingCoordinator::new();

        // Cancelled between queueing and processing
        coordinator.queue_booking(&registry, "F1", "a").unwrap();
        registry.cancel_flight("F1").unwrap();
        assert_eq!(
            coordinator.process_next_booking(&mut registry, "Bob"),
            Err(BookingError::FlightInactive("F1".to_string()))
        );
        assert_eq!(coordinator.pending(), 0);

        // Sold out between queueing and processing
        coordinator.queue_booking(&registry, "F2", "a").unwrap();
        coordinator.queue_booking(&registry, "F2", "b").unwrap();
        coordinator.process_next_booking(&mut registry, "Bob").unwrap();
        assert_eq!(
            coordinator.process_next_booking(&mut registry, "Dan"),
            Err(BookingError::SoldOut("F2".to_string()))
        );
        assert_eq!(coordinator.pending(), 0);
        assert_eq!(registry.get("F2").unwrap().seats, 0);

        // Failed attempts do not consume booking ids
        assert_eq!(coordinator.next_booking_id(), 2);
        assert_seat_accounting(&registry);
    }

    #[test]
    fn test_cancel_restores_seat_and_never_reuses_ids() {
        let mut registry = registry();
        let mut coordinator = BookingCoordinator::new();

        for name in ["Ann", "Ben"] {
            coordinator.queue_booking(&registry, "F1", name).unwrap();
            coordinator.process_next_booking(&mut registry, name).unwrap();
        }
        assert_eq!(registry.get("F1").unwrap().seats, 0);

        let cancelled = coordinator.cancel_booking_by_id(&mut registry, "F1", 1).unwrap();
        assert_eq!(cancelled.passenger.expose(), "Ann");
        assert_eq!(registry.get("F1").unwrap().seats, 1);
        assert_seat_accounting(&registry);

        assert_eq!(
            coordinator.cancel_booking_by_id(&mut registry, "F1", 1),
            Err(BookingError::BookingNotFound {
                flight_id: "F1".to_string(),
                booking_id: 1
            })
        );
        assert_eq!(
            coordinator.cancel_booking_by_id(&mut registry, "NOPE", 2),
            Err(BookingError::FlightNotFound("NOPE".to_string()))
        );

        coordinator.queue_booking(&registry, "F1", "Cat").unwrap();
        let booking = coordinator.process_next_booking(&mut registry, "Cat").unwrap();
        assert_eq!(booking.id, 3);

        let ids: Vec<BookingId> = coordinator
            .get_bookings_for_flight(&registry, "F1")
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
        assert_seat_accounting(&registry);
    }

    #[test]
    fn test_bookings_for_unknown_flight_is_empty() {
        let registry = registry();
        let coordinator = BookingCoordinator::new();
        assert!(coordinator.get_bookings_for_flight(&registry, "NOPE").is_empty());
    }
}
