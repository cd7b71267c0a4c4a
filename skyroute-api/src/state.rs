use std::sync::Arc;
use skyroute_core::FlightSystem;
use tokio::sync::Mutex;

/// Every handler goes through the one lock, so registry changes, network
/// rebuilds and algorithm runs never interleave.
#[derive(Clone)]
pub struct AppState {
    pub system: Arc<Mutex<FlightSystem>>,
}

impl AppState {
    pub fn new(system: FlightSystem) -> Self {
        Self {
            system: Arc::new(Mutex::new(system)),
        }
    }
}
