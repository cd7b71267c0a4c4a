use axum::{extract::State, routing::get, Json, Router};
use skyroute_core::NetworkSummary;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/summary", get(get_summary))
}

async fn get_summary(State(state): State<AppState>) -> Json<NetworkSummary> {
    Json(state.system.lock().await.summary())
}
