//! Catalog error taxonomy
//!
//! Closed set of domain errors, each carrying a stable code and a
//! classification the HTTP layer maps to a status code. Errors are raised
//! at the point of detection and propagate unmodified to the API
//! boundary; the lock guard's bounded retry is the only built-in
//! recovery.

use thiserror::Error;

/// Classification of a domain error, mapped to an HTTP status family by
/// the interface layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    BadRequest,
    /// Transient contention; the caller may retry.
    Conflict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Brand not found check Brand name")]
    BrandNotFound,

    #[error("Product not found check Brand name And category")]
    ProductNotFound,

    #[error("Invalid category value")]
    InvalidCategory,

    #[error("No Brand deleted check Data")]
    NoBrandDeleted,

    #[error("No Brand has all categories check Data")]
    NoBrandHasAllCategories,

    #[error("No Products in Category check Data")]
    NoProductsInCategory,

    #[error("Data read error please try again")]
    DataReadError,

    #[error("Data save error please try again")]
    DataSaveError,
}

impl CatalogError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BrandNotFound => "P001",
            Self::ProductNotFound => "P002",
            Self::InvalidCategory => "P003",
            Self::NoBrandDeleted => "P005",
            Self::NoBrandHasAllCategories => "P006",
            Self::NoProductsInCategory => "P007",
            Self::DataReadError => "P008",
            Self::DataSaveError => "P009",
        }
    }

    /// Stable symbolic name, surfaced in error payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BrandNotFound => "BRAND_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::InvalidCategory => "INVALID_CATEGORY",
            Self::NoBrandDeleted => "NO_BRAND_DELETED",
            Self::NoBrandHasAllCategories => "NO_BRAND_HAS_ALL_CATEGORIES",
            Self::NoProductsInCategory => "NO_PRODUCTS_IN_CATEGORY",
            Self::DataReadError => "DATA_READ_ERROR",
            Self::DataSaveError => "DATA_SAVE_ERROR",
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Self::BrandNotFound
            | Self::ProductNotFound
            | Self::NoBrandHasAllCategories
            | Self::NoProductsInCategory => ErrorClass::NotFound,
            Self::InvalidCategory | Self::NoBrandDeleted => ErrorClass::BadRequest,
            Self::DataReadError | Self::DataSaveError => ErrorClass::Conflict,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
