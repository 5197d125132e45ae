//! In-memory catalog repository

use indexmap::IndexMap;
use tracing::debug;

use super::lock::{GuardedCatalog, LockSettings};
use super::CatalogRepository;
use crate::domain::{Brand, CatalogError, CatalogResult, Category, Product};

/// Insertion-ordered brand map guarded by a single readers-writer lock.
///
/// Insertion order matters: the pricing reports break price ties by
/// first-found in scan order, and scan order here is insertion order.
pub struct InMemoryCatalogRepository {
    catalog: GuardedCatalog<IndexMap<String, Brand>>,
}

impl InMemoryCatalogRepository {
    pub fn new(settings: LockSettings) -> Self {
        Self {
            catalog: GuardedCatalog::new(IndexMap::new(), settings),
        }
    }

    /// Load the fixed reference dataset: brands A–I, each stocking all
    /// eight categories. Startup hook only, not part of the steady-state
    /// contract.
    pub fn seed_reference_data(&self) -> CatalogResult<()> {
        const SEED: [(&str, [u64; 8]); 9] = [
            ("A", [11200, 5500, 4200, 9000, 2000, 1700, 1800, 2300]),
            ("B", [10500, 5900, 3800, 9100, 2100, 2000, 2000, 2200]),
            ("C", [10000, 6200, 3300, 9200, 2200, 1900, 2200, 2100]),
            ("D", [10100, 5100, 3000, 9500, 2500, 1500, 2400, 2000]),
            ("E", [10700, 5000, 3800, 9900, 2300, 1800, 2100, 2100]),
            ("F", [11200, 7200, 4000, 9300, 2100, 1600, 2300, 1900]),
            ("G", [10500, 5800, 3900, 9000, 2200, 1700, 2100, 2000]),
            ("H", [10800, 6300, 3100, 9700, 2100, 1600, 2000, 2000]),
            ("I", [11400, 6700, 3200, 9500, 2400, 1700, 1700, 2400]),
        ];

        self.catalog.write("seed_reference_data", |catalog| {
            for (name, prices) in SEED {
                let products = Category::ALL
                    .iter()
                    .zip(prices)
                    .map(|(category, price)| Product::new(name, *category, price))
                    .collect();
                catalog.insert(name.to_string(), Brand::new(name, products));
            }
            debug!(brands = SEED.len(), "seeded reference catalog");
        })
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn upsert_brand(&self, brand: Brand) -> CatalogResult<Brand> {
        self.catalog.write("upsert_brand", |catalog| {
            catalog.insert(brand.name.clone(), brand.clone());
            brand
        })
    }

    fn get_brand(&self, name: &str) -> CatalogResult<Option<Brand>> {
        self.catalog.read("get_brand", |catalog| catalog.get(name).cloned())
    }

    fn upsert_product(&self, product: Product) -> CatalogResult<Product> {
        self.catalog.write("upsert_product", |catalog| {
            let brand = catalog
                .entry(product.brand_name.clone())
                .or_insert_with(|| Brand::new(product.brand_name.clone(), Vec::new()));
            // One product per category per brand: overwrite, don't append.
            brand.products.retain(|p| p.category != product.category);
            brand.products.push(product.clone());
            product
        })
    }

    fn update_product(&self, brand_name: &str, product: Product) -> CatalogResult<Product> {
        self.catalog.write("update_product", |catalog| {
            let brand = catalog
                .get_mut(brand_name)
                .ok_or(CatalogError::BrandNotFound)?;
            let slot = brand
                .products
                .iter_mut()
                .find(|p| p.category == product.category)
                .ok_or(CatalogError::ProductNotFound)?;
            *slot = product.clone();
            Ok(product)
        })?
    }

    fn delete_product(&self, brand_name: &str, category: Category) -> CatalogResult<()> {
        self.catalog.write("delete_product", |catalog| {
            let brand = catalog
                .get_mut(brand_name)
                .ok_or(CatalogError::BrandNotFound)?;
            let index = brand
                .products
                .iter()
                .position(|p| p.category == category)
                .ok_or(CatalogError::ProductNotFound)?;
            brand.products.remove(index);
            Ok(())
        })?
    }

    fn delete_brand(&self, name: &str) -> CatalogResult<()> {
        self.catalog.write("delete_brand", |catalog| {
            // shift_remove keeps the insertion order of the survivors.
            catalog
                .shift_remove(name)
                .map(|_| ())
                .ok_or(CatalogError::NoBrandDeleted)
        })?
    }

    fn list_all_brands(&self) -> CatalogResult<Vec<Brand>> {
        self.catalog
            .read("list_all_brands", |catalog| catalog.values().cloned().collect())
    }

    fn clear_all(&self) -> CatalogResult<()> {
        self.catalog.write("clear_all", |catalog| catalog.clear())
    }
}
