mod flight;

pub use flight::{Booking, BookingId, Flight};
