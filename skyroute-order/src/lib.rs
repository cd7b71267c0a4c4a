pub mod coordinator;

pub use coordinator::{BookingCoordinator, BookingError};
