use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skyroute_shared::Flight;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddFlightRequest {
    pub flight_id: String,
    pub source: String,
    pub destination: String,
    pub distance: u32,
    pub seats: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FlightStatusResponse {
    pub flight_id: String,
    pub active: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights", get(list_flights).post(add_flight))
        .route("/v1/flights/active", get(list_active_flights))
        .route("/v1/flights/{id}/cancel", post(cancel_flight))
        .route("/v1/flights/{id}/schedule", post(schedule_flight))
}

async fn list_flights(State(state): State<AppState>) -> Json<Vec<Flight>> {
    Json(state.system.lock().await.list_flights())
}

async fn list_active_flights(State(state): State<AppState>) -> Json<Vec<Flight>> {
    Json(state.system.lock().await.active_flights_by_id())
}

async fn add_flight(
    State(state): State<AppState>,
    Json(req): Json<AddFlightRequest>,
) -> Result<(StatusCode, Json<Flight>), AppError> {
    let flight_id = req.flight_id.trim();
    if flight_id.is_empty() {
        return Err(AppError::ValidationError("Flight ID is required".to_string()));
    }
    let (source, destination) = (req.source.trim(), req.destination.trim());
    if source.is_empty() || destination.is_empty() {
        return Err(AppError::ValidationError(
            "Source and destination are required".to_string(),
        ));
    }
    // The flight file is comma separated with no escaping
    if [flight_id, source, destination].iter().any(|f| f.contains(',')) {
        return Err(AppError::ValidationError(
            "Flight ID, source and destination must not contain commas".to_string(),
        ));
    }

    let flight = state.system.lock().await.add_flight(
        flight_id,
        source,
        destination,
        req.distance,
        req.seats,
    )?;

    info!("Flight added: {}", flight);
    Ok((StatusCode::CREATED, Json(flight)))
}

async fn cancel_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FlightStatusResponse>, AppError> {
    state.system.lock().await.cancel_flight(&id)?;
    Ok(Json(FlightStatusResponse {
        flight_id: id,
        active: false,
    }))
}

async fn schedule_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FlightStatusResponse>, AppError> {
    state.system.lock().await.schedule_flight(&id)?;
    Ok(Json(FlightStatusResponse {
        flight_id: id,
        active: true,
    }))
}
