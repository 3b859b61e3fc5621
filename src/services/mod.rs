//! Business logic services

pub mod catalog;
pub mod lending;

use std::sync::Arc;

use crate::{
    error::AppResult,
    repository::{LibraryStore, StoreTransaction},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub lending: lending::LendingService,
}

impl Services {
    /// Create all services on top of the given store
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(store.clone()),
            lending: lending::LendingService::new(store),
        }
    }
}

/// Commit `tx` when `result` is a success, roll it back otherwise.
///
/// The original error is returned even if the rollback itself fails.
pub(crate) async fn finish<T>(
    tx: Box<dyn StoreTransaction>,
    result: AppResult<T>,
) -> AppResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}
