//! HTTP REST API interfaces
//!
//! - `common`: response envelope, error body, validated-JSON extractor
//! - `modules`: per-resource request handlers and DTOs
//! - `request_id`: X-Request-Id correlation middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod request_id;
pub mod router;

pub use router::create_api_router;
