pub mod app_config;
pub mod flight_file;

pub use app_config::Config;
pub use flight_file::{FlightFileStore, FlightRecord, LoadedFlights, SkipReason, SkippedLine, StoreError};
