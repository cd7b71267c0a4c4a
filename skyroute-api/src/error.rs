use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skyroute_core::{BookingError, CoreError, NetworkError, RegistryError};

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    UnprocessableError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::UnprocessableError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let msg = err.to_string();
        match err {
            CoreError::Registry(e) => match e {
                RegistryError::NotFound(_) => AppError::NotFoundError(msg),
                RegistryError::DuplicateId(_)
                | RegistryError::AlreadyActive(_)
                | RegistryError::AlreadyInactive(_) => AppError::ConflictError(msg),
                RegistryError::CapacityExceeded(_) => AppError::UnprocessableError(msg),
                RegistryError::InvalidDistance(_) => AppError::ValidationError(msg),
            },
            CoreError::Network(e) => match e {
                NetworkError::NotFound(_) | NetworkError::Unreachable { .. } => {
                    AppError::NotFoundError(msg)
                }
            },
            CoreError::Booking(e) => match e {
                BookingError::FlightNotFound(_) | BookingError::BookingNotFound { .. } => {
                    AppError::NotFoundError(msg)
                }
                BookingError::FlightInactive(_)
                | BookingError::SoldOut(_)
                | BookingError::EmptyQueue => AppError::ConflictError(msg),
            },
            CoreError::Store(_) => AppError::InternalServerError(msg),
        }
    }
}
