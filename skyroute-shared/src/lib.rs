pub mod models;
pub mod pii;

pub use models::{Booking, BookingId, Flight};
pub use pii::Masked;
