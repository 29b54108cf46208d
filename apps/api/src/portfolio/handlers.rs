//! Axum route handlers for the Portfolio API and the public page.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::PortfolioData;
use crate::state::AppState;

const NOT_FOUND_MESSAGE: &str = "Portfolio not found";
const INVALID_BODY_MESSAGE: &str = "Invalid portfolio data";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioResponse {
    pub success: bool,
    pub portfolio_id: Uuid,
    pub share_url: String,
}

#[derive(Debug, Serialize)]
pub struct PortfolioDataResponse {
    pub success: bool,
    pub data: PortfolioData,
}

#[derive(Debug, Serialize)]
pub struct UpdatePortfolioResponse {
    pub success: bool,
    pub message: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/portfolio
///
/// Renders and stores a new portfolio, returning its id and public link.
pub async fn handle_create_portfolio(
    State(state): State<AppState>,
    payload: Result<Json<PortfolioData>, JsonRejection>,
) -> Result<Json<CreatePortfolioResponse>, AppError> {
    let Json(data) = payload.map_err(invalid_body)?;

    let record = state
        .store
        .create(data)
        .await
        .map_err(|e| AppError::operation("Failed to create portfolio", e))?;

    let portfolio_id = record.id;
    Ok(Json(CreatePortfolioResponse {
        success: true,
        portfolio_id,
        share_url: state.config.share_url(&portfolio_id.to_string()),
    }))
}

/// GET /portfolio/:id
///
/// Public view: the stored HTML document, or a plain-text 404.
pub async fn handle_view_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = match parse_id(&id) {
        Some(id) => state.store.get(id).await?,
        None => None,
    };

    Ok(match record {
        Some(record) => Html(record.html).into_response(),
        None => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
    })
}

/// GET /api/portfolio/:id
///
/// Returns the submitted data so the editor can load it back.
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PortfolioDataResponse>, AppError> {
    let id = parse_id(&id).ok_or_else(not_found)?;
    let record = state.store.get(id).await?.ok_or_else(not_found)?;

    Ok(Json(PortfolioDataResponse {
        success: true,
        data: record.data,
    }))
}

/// PUT /api/portfolio/:id
///
/// Replaces the portfolio's data and re-renders its page.
pub async fn handle_update_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PortfolioData>, JsonRejection>,
) -> Result<Json<UpdatePortfolioResponse>, AppError> {
    let id = parse_id(&id).ok_or_else(not_found)?;
    let Json(data) = match payload {
        Ok(body) => body,
        // An unknown id wins over a bad body.
        Err(rejection) => {
            if state.store.get(id).await?.is_none() {
                return Err(not_found());
            }
            return Err(invalid_body(rejection));
        }
    };

    state
        .store
        .update(id, data)
        .await
        .map_err(|e| AppError::operation("Failed to update portfolio", e))?
        .ok_or_else(not_found)?;

    Ok(Json(UpdatePortfolioResponse {
        success: true,
        message: "Portfolio updated successfully",
    }))
}

// Ids that are not UUIDs can never exist in the store.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

fn not_found() -> AppError {
    AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
}

// The deserializer's message stays in the log; callers get a fixed one.
fn invalid_body(rejection: JsonRejection) -> AppError {
    warn!(
        "Rejected portfolio body ({}): {}",
        rejection.status(),
        rejection.body_text()
    );
    AppError::Validation(INVALID_BODY_MESSAGE.to_string())
}
