pub mod system;

pub use skyroute_catalog::RegistryError;
pub use skyroute_network::{NetworkError, Route, SpanningEdge, SpanningForest};
pub use skyroute_order::BookingError;
pub use skyroute_store::StoreError;
pub use system::{FlightSystem, NetworkSummary};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type CoreResult<T> = Result<T, CoreError>;
