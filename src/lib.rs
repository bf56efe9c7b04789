//! Bookshelf
//!
//! A small REST JSON API keeping a list of books in memory. Records get sequential ids that are
//! never reused; everything is reset to the seed set when the process restarts.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{BookStore, Repository};
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// State backed by a freshly seeded book store
    pub fn new(config: AppConfig) -> Self {
        let repository = Repository::new(BookStore::seeded());
        Self {
            config: Arc::new(config),
            services: Arc::new(Services::new(repository)),
        }
    }
}
