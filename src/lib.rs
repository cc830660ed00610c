//! Literary Lens
//!
//! An in-memory book catalog with star-rated reviews, served as a REST JSON
//! API: browsing by genre or author, free-text search, rating averages and
//! similar-book recommendations.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{seed, CatalogStore, Repository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state, seeding the catalog when configured to
    pub fn new(config: AppConfig) -> Self {
        let store = if config.catalog.seed_sample_data {
            seed::sample_store()
        } else {
            CatalogStore::new()
        };
        let services = services::Services::new(Repository::new(store), config.catalog.clone());

        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
