//! # Catalog Pricing Service
//!
//! HTTP API over an in-memory catalog of brands and products, with
//! aggregate pricing reports (cheapest per category, cheapest covering
//! brand, per-category price extremes) and brand/product CRUD.
//!
//! ## Architecture
//!
//! - **domain**: catalog entities, category enumeration, error taxonomy
//! - **application**: pure pricing algorithms and the orchestrating service
//! - **infrastructure**: lock-guarded in-memory store
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;

pub use config::{default_config_path, AppConfig};
pub use server::{init_tracing, ServerHandle, ServerOptions};

// Re-export the API router for embedding
pub use interfaces::http::create_api_router;
