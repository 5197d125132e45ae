//! Brand DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::super::products::dto::{ProductDto, ProductRequest};
use crate::domain::{Brand, CatalogError};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BrandDto {
    pub brand_name: String,
    pub products: Vec<ProductDto>,
}

impl From<Brand> for BrandDto {
    fn from(b: Brand) -> Self {
        Self {
            brand_name: b.name,
            products: b.products.into_iter().map(Into::into).collect(),
        }
    }
}

/// Payload for brand creation. The product list may be empty.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BrandRequest {
    #[validate(length(min = 1, message = "brand name is required"))]
    pub brand_name: String,
    #[validate(nested)]
    #[serde(default)]
    pub products: Vec<ProductRequest>,
}

impl BrandRequest {
    pub fn to_domain(&self) -> Result<Brand, CatalogError> {
        let products = self
            .products
            .iter()
            .map(|p| p.to_domain())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Brand::new(self.brand_name.clone(), products))
    }
}
