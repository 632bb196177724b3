//! Health check handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use common::AppResult;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Number of accounts currently held by the store
    pub accounts: usize,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - reports the account count.
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let accounts = state.accounts.count().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        accounts,
    }))
}
