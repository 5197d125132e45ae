//! Catalog storage: repository trait, lock guard and the in-memory
//! implementation.

pub mod lock;
pub mod memory;

pub use lock::{GuardedCatalog, LockSettings};
pub use memory::InMemoryCatalogRepository;

use crate::domain::{Brand, CatalogResult, Category, Product};

/// Guarded single source of truth for brands and products.
///
/// All mutations and the enumerate-all read go through this trait. Reads
/// return owned snapshots, so callers can never mutate store internals.
pub trait CatalogRepository: Send + Sync {
    /// Insert or replace a brand by name. Total over any input.
    fn upsert_brand(&self, brand: Brand) -> CatalogResult<Brand>;

    /// Lookup by name. Absence is `None`, not an error.
    fn get_brand(&self, name: &str) -> CatalogResult<Option<Brand>>;

    /// Add a product, creating its brand if absent. A brand holds at most
    /// one product per category, so an occupied category is overwritten.
    fn upsert_product(&self, product: Product) -> CatalogResult<Product>;

    /// Replace an existing product. Fails with `BrandNotFound` if the
    /// brand is absent, `ProductNotFound` if the brand has no product in
    /// the given category.
    fn update_product(&self, brand_name: &str, product: Product) -> CatalogResult<Product>;

    /// Remove a product. Same not-found semantics as `update_product`.
    fn delete_product(&self, brand_name: &str, category: Category) -> CatalogResult<()>;

    /// Remove a brand and all its products. Fails with `NoBrandDeleted`
    /// if the brand is absent.
    fn delete_brand(&self, name: &str) -> CatalogResult<()>;

    /// Snapshot copy of all brands in insertion order.
    fn list_all_brands(&self) -> CatalogResult<Vec<Brand>>;

    /// Empty the catalog. Test/reset hook only.
    fn clear_all(&self) -> CatalogResult<()>;
}
