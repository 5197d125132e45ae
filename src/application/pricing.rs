//! Pricing reports
//!
//! Pure read-only algorithms over a catalog snapshot. The snapshot comes
//! from a single `list_all_brands()` call, so each report is internally
//! consistent even under concurrent writers. Brand scan order is the
//! snapshot order (insertion order), and price ties in the two
//! single-winner reports keep the first-found candidate.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Brand, CatalogError, CatalogResult, Category, Product};

/// One winning entry of the cheapest-per-category report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryBestPrice {
    pub category: Category,
    pub brand_name: String,
    pub price: u64,
}

/// Cheapest product per category, plus the sum of the selected prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CheapestPerCategory {
    pub items: Vec<CategoryBestPrice>,
    pub total_price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryPrice {
    pub category: Category,
    pub price: u64,
}

/// The single cheapest brand stocking every category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CheapestFullBrand {
    pub brand_name: String,
    pub categories: Vec<CategoryPrice>,
    pub total_price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BrandPrice {
    pub brand_name: String,
    pub price: u64,
}

/// Min/max prices within one category; ties are all reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryPriceExtremes {
    pub category: Category,
    pub lowest_price: Vec<BrandPrice>,
    pub highest_price: Vec<BrandPrice>,
}

/// Cheapest product in each category across all brands.
///
/// Categories without stock are omitted; an entirely empty result is
/// `ProductNotFound`.
pub fn lowest_priced_by_category(brands: &[Brand]) -> CatalogResult<CheapestPerCategory> {
    let mut items = Vec::new();
    let mut total_price = 0u64;

    for category in Category::ALL {
        let mut cheapest: Option<&Product> = None;
        for brand in brands {
            if let Some(product) = brand.product_in(category) {
                // Strict less-than keeps the first-found brand on ties.
                if cheapest.is_none_or(|best| product.price < best.price) {
                    cheapest = Some(product);
                }
            }
        }
        if let Some(product) = cheapest {
            total_price += product.price;
            items.push(CategoryBestPrice {
                category,
                brand_name: product.brand_name.clone(),
                price: product.price,
            });
        }
    }

    if items.is_empty() {
        return Err(CatalogError::ProductNotFound);
    }
    Ok(CheapestPerCategory { items, total_price })
}

/// The brand with the lowest total price among brands stocking every
/// category. `NoBrandHasAllCategories` when no brand qualifies.
pub fn lowest_total_brand(brands: &[Brand]) -> CatalogResult<CheapestFullBrand> {
    let mut winner: Option<CheapestFullBrand> = None;

    for brand in brands {
        if !brand.covers_all_categories() {
            continue;
        }

        let categories: Vec<CategoryPrice> = Category::ALL
            .iter()
            .filter_map(|c| brand.product_in(*c))
            .map(|p| CategoryPrice {
                category: p.category,
                price: p.price,
            })
            .collect();
        let total_price: u64 = categories.iter().map(|c| c.price).sum();

        if winner
            .as_ref()
            .is_none_or(|best| total_price < best.total_price)
        {
            winner = Some(CheapestFullBrand {
                brand_name: brand.name.clone(),
                categories,
                total_price,
            });
        }
    }

    winner.ok_or(CatalogError::NoBrandHasAllCategories)
}

/// Every brand/price pair at the minimum and maximum price of one
/// category. Unlike the two reports above, ties are not broken here:
/// all tied brands are reported, in scan order.
pub fn price_extremes(brands: &[Brand], category: Category) -> CatalogResult<CategoryPriceExtremes> {
    let in_category: Vec<&Product> = brands
        .iter()
        .flat_map(|b| b.products.iter())
        .filter(|p| p.category == category)
        .collect();

    if in_category.is_empty() {
        return Err(CatalogError::NoProductsInCategory);
    }

    let min = in_category.iter().map(|p| p.price).min().unwrap_or(0);
    let max = in_category.iter().map(|p| p.price).max().unwrap_or(0);

    let collect_at = |price: u64| -> Vec<BrandPrice> {
        in_category
            .iter()
            .filter(|p| p.price == price)
            .map(|p| BrandPrice {
                brand_name: p.brand_name.clone(),
                price: p.price,
            })
            .collect()
    };

    Ok(CategoryPriceExtremes {
        category,
        lowest_price: collect_at(min),
        highest_price: collect_at(max),
    })
}
