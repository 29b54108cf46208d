use std::sync::Arc;

use crate::config::Config;
use crate::portfolio::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable record store. Default: InMemoryStore, built once in `main`.
    pub store: Arc<dyn PortfolioStore>,
}
