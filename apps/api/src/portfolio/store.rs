//! Portfolio record store: pluggable, trait-based holder of every portfolio.
//!
//! Default: `InMemoryStore` (a `RwLock<HashMap>`, lives as long as the process).
//!
//! `AppState` holds an `Arc<dyn PortfolioStore>`, constructed once in `main`.
//! Every implementation must keep `html` equal to `render_portfolio(&data)`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::{PortfolioData, PortfolioRecord};
use crate::render::render_portfolio;

/// The store trait. Implement this to back portfolios with something other
/// than process memory without touching the handlers.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Renders `data`, stores it under a fresh id and returns the new record.
    async fn create(&self, data: PortfolioData) -> Result<PortfolioRecord, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<PortfolioRecord>, AppError>;

    /// Replaces data and html of an existing record, keeping `id` and
    /// `created_at`. Returns `None`, changing nothing, when `id` is unknown.
    async fn update(
        &self,
        id: Uuid,
        data: PortfolioData,
    ) -> Result<Option<PortfolioRecord>, AppError>;

    async fn len(&self) -> Result<usize, AppError>;
}

#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<Uuid, PortfolioRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioStore for InMemoryStore {
    async fn create(&self, data: PortfolioData) -> Result<PortfolioRecord, AppError> {
        let html = render_portfolio(&data);

        let mut records = self.records.write().await;
        let mut id = Uuid::new_v4();
        while records.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let record = PortfolioRecord {
            id,
            data,
            html,
            created_at: Utc::now(),
            updated_at: None,
        };
        records.insert(id, record.clone());

        info!("Created portfolio {id}");
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<PortfolioRecord>, AppError> {
        let record = self.records.read().await.get(&id).cloned();
        if record.is_none() {
            debug!("Portfolio {id} not found");
        }
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        data: PortfolioData,
    ) -> Result<Option<PortfolioRecord>, AppError> {
        let html = render_portfolio(&data);

        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(&id) else {
            debug!("Update skipped: portfolio {id} not found");
            return Ok(None);
        };

        record.data = data;
        record.html = html;
        record.updated_at = Some(Utc::now());

        info!("Updated portfolio {id}");
        Ok(Some(record.clone()))
    }

    async fn len(&self) -> Result<usize, AppError> {
        Ok(self.records.read().await.len())
    }
}
