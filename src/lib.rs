pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod seed;

use anyhow::Context;
use std::sync::Arc;

pub use catalog::{Catalog, ScreeningSummary, ScreeningView};
pub use error::{ReservationError, ReservationResult};

// Shared state for the whole application
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let catalog = seed::opening_catalog(&config.theater.name)
            .context("failed to seed the opening catalog")?;

        Ok(Arc::new(Self {
            catalog: Arc::new(catalog),
            config,
        }))
    }
}
