use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use skyroute_shared::Flight;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SourceQuery {
    #[serde(default)]
    pub source: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/search", get(search_by_source))
        .route("/v1/search/recent", get(recent_searches))
}

/// Active flights from `source`; an empty source lists every active flight
async fn search_by_source(
    State(state): State<AppState>,
    Query(query): Query<SourceQuery>,
) -> Json<Vec<Flight>> {
    Json(state.system.lock().await.search_by_source(&query.source))
}

async fn recent_searches(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.system.lock().await.recent_searches())
}
