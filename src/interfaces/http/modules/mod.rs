//! Per-resource handler modules.

pub mod brands;
pub mod health;
pub mod pricing;
pub mod products;

use std::sync::Arc;
use std::time::Instant;

use crate::application::CatalogService;

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CatalogService>,
    pub started_at: Arc<Instant>,
}
