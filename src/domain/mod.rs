//! Core domain: catalog entities and the error taxonomy.

pub mod brand;
pub mod category;
pub mod error;

pub use brand::{Brand, Product};
pub use category::Category;
pub use error::{CatalogError, CatalogResult, ErrorClass};
