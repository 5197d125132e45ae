//! Product DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CatalogError, Category, Product};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub category: Category,
    pub brand_name: String,
    pub price: u64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            category: p.category,
            brand_name: p.brand_name,
            price: p.price,
        }
    }
}

/// Payload for product create and update.
///
/// The category arrives as a free-form string and is resolved
/// case-insensitively; resolution failure is `InvalidCategory`, raised
/// before any store access.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "brand name is required"))]
    pub brand_name: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(range(min = 1, message = "price must be greater than 0"))]
    pub price: u64,
}

impl ProductRequest {
    pub fn to_domain(&self) -> Result<Product, CatalogError> {
        Ok(Product::new(
            self.brand_name.clone(),
            Category::parse(&self.category)?,
            self.price,
        ))
    }
}
