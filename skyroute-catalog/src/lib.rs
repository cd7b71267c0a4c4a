pub mod registry;
pub mod search;

pub use registry::{FlightRegistry, RegistryError, DEFAULT_MAX_FLIGHTS};
pub use search::{search_by_source, SearchEntry, SearchHistory};
