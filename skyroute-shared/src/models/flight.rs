use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::pii::Masked;

/// Global booking identifier, issued once and never reused.
pub type BookingId = u64;

/// A confirmed seat on a flight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub passenger: Masked<String>,
}

impl Booking {
    pub fn new(id: BookingId, passenger: impl Into<String>) -> Self {
        Self {
            id,
            passenger: Masked(passenger.into()),
        }
    }
}

/// A scheduled flight between two airports.
///
/// `capacity` is the seat count the flight was created (or loaded) with;
/// every seat is either still free or held by exactly one booking, so
/// `seats + bookings.len() == capacity` holds for the whole lifetime.
/// Cancelling a flight only clears `active`, flights are never removed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Flight {
    pub id: String,
    pub source: String,
    pub destination: String,
    pub distance: u32,
    pub seats: u32,
    pub capacity: u32,
    pub active: bool,
    pub bookings: Vec<Booking>,
}

impl Flight {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        distance: u32,
        seats: u32,
    ) -> Self {
        Self::restored(id, source, destination, distance, seats, true)
    }

    /// Rebuild a flight from persisted fields. Bookings are not persisted,
    /// so the remaining seats become the full capacity.
    pub fn restored(
        id: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        distance: u32,
        seats: u32,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            destination: destination.into(),
            distance,
            seats,
            capacity: seats,
            active,
            bookings: Vec::new(),
        }
    }

    pub fn has_seats(&self) -> bool {
        self.seats > 0
    }

    /// Seat a passenger. Returns `false` and leaves the flight untouched
    /// when no seat is left.
    pub fn add_booking(&mut self, booking: Booking) -> bool {
        if self.seats == 0 {
            return false;
        }
        self.seats -= 1;
        self.bookings.push(booking);
        true
    }

    /// Remove a booking and give its seat back
    pub fn remove_booking(&mut self, booking_id: BookingId) -> Option<Booking> {
        let position = self.bookings.iter().position(|b| b.id == booking_id)?;
        let booking = self.bookings.remove(position);
        self.seats += 1;
        Some(booking)
    }
}

impl Display for Flight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} -> {}, Dist: {}, Seats: {}",
            self.id, self.source, self.destination, self.distance, self.seats
        )
    }
}
