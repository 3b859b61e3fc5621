//! Library lending server
//!
//! Registers books and borrowers and tracks who has borrowed which book,
//! over a REST JSON API backed by PostgreSQL or an in-memory store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::LibraryStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
    pub store: Arc<dyn LibraryStore>,
}

impl AppState {
    /// Wire services on top of `store`
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self {
            services: Arc::new(services::Services::new(store.clone())),
            store,
        }
    }
}
