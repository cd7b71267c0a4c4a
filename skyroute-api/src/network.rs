use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skyroute_core::{Route, SpanningForest};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize)]
pub struct StartQuery {
    pub start: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub neighbor: String,
    pub distance: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdjacencyResponse {
    pub airport: String,
    pub links: Vec<LinkResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TraversalResponse {
    pub start: String,
    pub order: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/network/airports/{code}", get(adjacency))
        .route("/v1/network/path", get(shortest_path))
        .route("/v1/network/dfs", get(dfs))
        .route("/v1/network/bfs", get(bfs))
        .route("/v1/network/prim", get(prim))
        .route("/v1/network/kruskal", get(kruskal))
}

async fn adjacency(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<AdjacencyResponse>, AppError> {
    let links = state.system.lock().await.adjacency(&code)?;
    Ok(Json(AdjacencyResponse {
        airport: code,
        links: links
            .into_iter()
            .map(|(neighbor, distance)| LinkResponse { neighbor, distance })
            .collect(),
    }))
}

async fn shortest_path(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<Route>, AppError> {
    let route = state
        .system
        .lock()
        .await
        .shortest_path(query.from.trim(), query.to.trim())?;
    Ok(Json(route))
}

async fn dfs(
    State(state): State<AppState>,
    Query(query): Query<StartQuery>,
) -> Result<Json<TraversalResponse>, AppError> {
    let start = query.start.trim().to_string();
    let order = state.system.lock().await.dfs(&start)?;
    Ok(Json(TraversalResponse { start, order }))
}

async fn bfs(
    State(state): State<AppState>,
    Query(query): Query<StartQuery>,
) -> Result<Json<TraversalResponse>, AppError> {
    let start = query.start.trim().to_string();
    let order = state.system.lock().await.bfs(&start)?;
    Ok(Json(TraversalResponse { start, order }))
}

async fn prim(
    State(state): State<AppState>,
    Query(query): Query<StartQuery>,
) -> Result<Json<SpanningForest>, AppError> {
    Ok(Json(state.system.lock().await.prim(query.start.trim())?))
}

async fn kruskal(State(state): State<AppState>) -> Json<SpanningForest> {
    Json(state.system.lock().await.kruskal())
}
