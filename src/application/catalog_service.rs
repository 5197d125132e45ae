//! Catalog service
//!
//! Thin orchestration over the repository and the pricing engine: parse
//! raw category strings at the boundary, take one snapshot per report,
//! propagate domain errors unmodified. Owns no state of its own.

use std::sync::Arc;

use tracing::instrument;

use super::pricing::{
    self, CategoryPriceExtremes, CheapestFullBrand, CheapestPerCategory,
};
use crate::domain::{Brand, CatalogResult, Category, Product};
use crate::infrastructure::storage::CatalogRepository;

#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    // ── Pricing reports ────────────────────────────────────────

    #[instrument(skip(self))]
    pub fn lowest_priced_by_category(&self) -> CatalogResult<CheapestPerCategory> {
        let snapshot = self.repo.list_all_brands()?;
        pricing::lowest_priced_by_category(&snapshot)
    }

    #[instrument(skip(self))]
    pub fn lowest_total_brand(&self) -> CatalogResult<CheapestFullBrand> {
        let snapshot = self.repo.list_all_brands()?;
        pricing::lowest_total_brand(&snapshot)
    }

    #[instrument(skip(self))]
    pub fn category_price_extremes(&self, category_name: &str) -> CatalogResult<CategoryPriceExtremes> {
        let category = Category::parse(category_name)?;
        let snapshot = self.repo.list_all_brands()?;
        pricing::price_extremes(&snapshot, category)
    }

    // ── Brand CRUD ─────────────────────────────────────────────

    pub fn create_brand(&self, brand: Brand) -> CatalogResult<Brand> {
        self.repo.upsert_brand(brand)
    }

    pub fn get_brand(&self, name: &str) -> CatalogResult<Option<Brand>> {
        self.repo.get_brand(name)
    }

    pub fn list_brands(&self) -> CatalogResult<Vec<Brand>> {
        self.repo.list_all_brands()
    }

    pub fn delete_brand(&self, name: &str) -> CatalogResult<()> {
        self.repo.delete_brand(name)
    }

    // ── Product CRUD ───────────────────────────────────────────

    pub fn create_product(&self, product: Product) -> CatalogResult<Product> {
        self.repo.upsert_product(product)
    }

    pub fn update_product(&self, brand_name: &str, product: Product) -> CatalogResult<Product> {
        self.repo.update_product(brand_name, product)
    }

    pub fn delete_product(&self, brand_name: &str, category_name: &str) -> CatalogResult<()> {
        let category = Category::parse(category_name)?;
        self.repo.delete_product(brand_name, category)
    }

    /// Reset hook for test isolation.
    pub fn clear_all(&self) -> CatalogResult<()> {
        self.repo.clear_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogError;
    use crate::infrastructure::storage::{InMemoryCatalogRepository, LockSettings};

    fn seeded_service() -> CatalogService {
        let repo = InMemoryCatalogRepository::new(LockSettings::default());
        repo.seed_reference_data().unwrap();
        CatalogService::new(Arc::new(repo))
    }

    fn empty_service() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryCatalogRepository::new(
            LockSettings::default(),
        )))
    }

    #[test]
    fn extremes_parses_category_case_insensitively() {
        let service = seeded_service();
        let report = service.category_price_extremes("ToP").unwrap();
        assert_eq!(report.category, Category::Top);
        assert_eq!(report.lowest_price[0].brand_name, "C");
        assert_eq!(report.lowest_price[0].price, 10000);
        assert_eq!(report.highest_price[0].brand_name, "I");
        assert_eq!(report.highest_price[0].price, 11400);
    }

    #[test]
    fn extremes_rejects_unknown_category_before_snapshot() {
        assert_eq!(
            seeded_service().category_price_extremes("couture").unwrap_err(),
            CatalogError::InvalidCategory
        );
    }

    #[test]
    fn delete_product_parses_category() {
        let service = seeded_service();
        assert_eq!(
            service.delete_product("A", "not-a-category").unwrap_err(),
            CatalogError::InvalidCategory
        );
        service.delete_product("A", "hat").unwrap();
        assert!(service
            .get_brand("A")
            .unwrap()
            .unwrap()
            .product_in(Category::Hat)
            .is_none());
    }

    #[test]
    fn report_errors_propagate_unmodified() {
        let service = empty_service();
        assert_eq!(
            service.lowest_priced_by_category().unwrap_err(),
            CatalogError::ProductNotFound
        );
        assert_eq!(
            service.lowest_total_brand().unwrap_err(),
            CatalogError::NoBrandHasAllCategories
        );
        assert_eq!(
            service.category_price_extremes("top").unwrap_err(),
            CatalogError::NoProductsInCategory
        );
    }

    #[test]
    fn clear_all_resets_between_scenarios() {
        let service = seeded_service();
        assert_eq!(service.list_brands().unwrap().len(), 9);
        service.clear_all().unwrap();
        assert!(service.list_brands().unwrap().is_empty());
    }
}
