//! Brand and product entities

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::category::Category;

/// A single priced item.
///
/// Prices are positive integers in the smallest currency unit. A brand
/// holds at most one product per category; inserting into an occupied
/// category replaces the existing product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub brand_name: String,
    pub category: Category,
    pub price: u64,
}

impl Product {
    pub fn new(brand_name: impl Into<String>, category: Category, price: u64) -> Self {
        Self {
            brand_name: brand_name.into(),
            category,
            price,
        }
    }
}

/// A named seller with its product list.
///
/// The name is the unique catalog key. A brand may exist with zero
/// products (created explicitly, or implicitly on first product add).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Brand {
    pub name: String,
    pub products: Vec<Product>,
}

impl Brand {
    pub fn new(name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            name: name.into(),
            products,
        }
    }

    /// First product in the given category, if any.
    pub fn product_in(&self, category: Category) -> Option<&Product> {
        self.products.iter().find(|p| p.category == category)
    }

    /// Whether the brand stocks every category.
    pub fn covers_all_categories(&self) -> bool {
        Category::ALL.iter().all(|c| self.product_in(*c).is_some())
    }
}
