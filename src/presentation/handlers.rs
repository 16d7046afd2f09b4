// HTTP request handlers
use crate::domain::load_state::LoadState;
use crate::infrastructure::payload_mapper::{cycle_to_payload, cycle_to_recent_payload};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct RecentQuery {
    pub count: Option<usize>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Statistics, display series and recent events of the latest load cycle
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    // Clone the Arc so the watch lock is released before serializing.
    let cycle = state.cycles.borrow().clone();
    (status_for(&cycle.state), Json(cycle_to_payload(&cycle)))
}

/// Most recent events first
pub async fn get_recent_events(
    Query(query): Query<RecentQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let count = query.count.unwrap_or(state.recent_events);
    let cycle = state.cycles.borrow().clone();
    (status_for(&cycle.state), Json(cycle_to_recent_payload(&cycle, count)))
}

fn status_for(load_state: &LoadState) -> StatusCode {
    match load_state {
        LoadState::Failed => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    }
}
