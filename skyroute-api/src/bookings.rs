use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skyroute_shared::{Booking, BookingId};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QueueBookingRequest {
    pub flight_id: String,
    /// Accepted for compatibility; the name given at processing time is
    /// the one recorded
    #[serde(default)]
    pub passenger_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProcessBookingRequest {
    pub passenger_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueueResponse {
    pub queue: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub flight_id: String,
    pub booking: Booking,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings/queue", get(list_queue).post(queue_booking))
        .route("/v1/bookings/process", post(process_next_booking))
        .route("/v1/flights/{id}/bookings", get(bookings_for_flight))
        .route("/v1/flights/{id}/bookings/{booking_id}", delete(cancel_booking))
}

async fn queue_booking(
    State(state): State<AppState>,
    Json(req): Json<QueueBookingRequest>,
) -> Result<(StatusCode, Json<QueueResponse>), AppError> {
    let mut system = state.system.lock().await;
    system.queue_booking(req.flight_id.trim(), req.passenger_name.trim())?;

    Ok((
        StatusCode::ACCEPTED,
        Json(QueueResponse {
            queue: system.list_queue(),
        }),
    ))
}

async fn list_queue(State(state): State<AppState>) -> Json<QueueResponse> {
    Json(QueueResponse {
        queue: state.system.lock().await.list_queue(),
    })
}

async fn process_next_booking(
    State(state): State<AppState>,
    Json(req): Json<ProcessBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let passenger_name = req.passenger_name.trim();
    if passenger_name.is_empty() {
        return Err(AppError::ValidationError("Passenger name is required".to_string()));
    }

    let mut system = state.system.lock().await;
    // Read the head under the same lock so it is the request processed below
    let flight_id = system.next_pending().unwrap_or_default().to_string();
    let booking = system.process_next_booking(passenger_name)?;

    info!("Booking {} confirmed on {}", booking.id, flight_id);
    Ok(Json(BookingResponse { flight_id, booking }))
}

async fn bookings_for_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Booking>> {
    Json(state.system.lock().await.bookings_for_flight(&id))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path((id, booking_id)): Path<(String, BookingId)>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state.system.lock().await.cancel_booking(&id, booking_id)?;
    Ok(Json(BookingResponse {
        flight_id: id,
        booking,
    }))
}
