//! Business logic: pricing reports and the catalog service.

pub mod catalog_service;
pub mod pricing;

pub use catalog_service::CatalogService;
