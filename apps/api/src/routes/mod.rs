pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::portfolio::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Anything not matched below is looked up in the editor's static directory.
    let editor = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Public page
        .route("/portfolio/:id", get(handlers::handle_view_portfolio))
        // Portfolio API
        .route("/api/portfolio", post(handlers::handle_create_portfolio))
        .route(
            "/api/portfolio/:id",
            get(handlers::handle_get_portfolio).put(handlers::handle_update_portfolio),
        )
        .fallback_service(editor)
        .with_state(state)
}
