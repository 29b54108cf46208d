use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and record count.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let portfolios = state.store.len().await?;
    Ok(Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "portfolio-api",
        "portfolios": portfolios
    })))
}
